//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod filter;
mod layout;
mod pagination;
mod styles;
mod table;
mod toolbar;

pub use filter::{FilterBar, CLEAR_LABEL};
pub use layout::{render_layout, split_screen, Screen, FILTER_KEY_HINTS, KEY_HINTS};
pub use pagination::{PaginationBar, NEXT_LABEL, PREVIOUS_LABEL};
pub use styles::{ClassStyles, ColorConfig};
pub use table::{column_widths, DataTableWidget};
pub use toolbar::Toolbar;

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{Column, DataTableSort, KeyAction};
use crate::view_state::{
    DataTableOptions, DataTableProps, DataTableState, DataTableView, FilterQuery, FilteredRows,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde_json::Value;
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Viewer settings resolved from config and CLI.
///
/// Carries configuration from `main` into the TUI without the view layer
/// knowing about argument parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerArgs {
    /// Toolbar title (usually the input file name).
    pub title: Option<String>,
    /// Toolbar description.
    pub description: Option<String>,
    /// Rows per page; `None` shows everything.
    pub page_size: Option<usize>,
    /// Empty-state placeholder.
    pub empty_message: String,
    /// Show the pagination footer.
    pub show_pagination: bool,
    /// Sort applied before the first key press.
    pub default_sort: Option<DataTableSort<String>>,
    /// Color output.
    pub color: ColorConfig,
}

impl ViewerArgs {
    /// Viewer settings from resolved config.
    pub fn from_config(config: &ResolvedConfig, color: ColorConfig) -> Self {
        Self {
            title: None,
            description: None,
            page_size: config.page_size(),
            empty_message: config.empty_message.clone(),
            show_pagination: config.show_pagination,
            default_sort: None,
            color,
        }
    }
}

impl Default for ViewerArgs {
    fn default() -> Self {
        Self::from_config(&ResolvedConfig::default(), ColorConfig::enabled())
    }
}

fn table_props<'a>(
    rows: &'a [Value],
    columns: &'a [Column<Value>],
    args: &'a ViewerArgs,
) -> DataTableProps<'a, Value> {
    let props = DataTableProps::new(rows, columns)
        .empty_message(&args.empty_message)
        .show_pagination(args.show_pagination);
    match args.page_size {
        Some(size) => props.page_size(size),
        None => props,
    }
}

/// Page shown by the last evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PagePosition {
    page_index: usize,
    total_pages: usize,
}

impl PagePosition {
    fn of(view: &DataTableView<'_, Value>) -> Self {
        Self {
            page_index: view.page_index,
            total_pages: view.total_pages,
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    rows: FilteredRows<Value>,
    columns: Vec<Column<Value>>,
    table: DataTableState<String>,
    args: ViewerArgs,
    styles: ClassStyles,
    key_bindings: KeyBindings,
    focused_column: usize,
    filter: FilterQuery,
    filter_typing: bool,
    shown_page: Option<PagePosition>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        rows: Vec<Value>,
        columns: Vec<Column<Value>>,
        args: ViewerArgs,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, rows, columns, args))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws only after input or a
    /// resize; idle polling does not repaint.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create an application on an existing terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        rows: Vec<Value>,
        columns: Vec<Column<Value>>,
        args: ViewerArgs,
    ) -> Self {
        let mut options = DataTableOptions::default();
        if let Some(sort) = args.default_sort.clone() {
            options = options.default_sort(sort);
        }

        Self {
            terminal,
            rows: FilteredRows::new(rows),
            columns,
            table: DataTableState::new(options),
            styles: ClassStyles::with_color_config(args.color),
            args,
            key_bindings: KeyBindings::default(),
            focused_column: 0,
            filter: FilterQuery::default(),
            filter_typing: false,
            shown_page: None,
        }
    }

    /// Replace the key bindings.
    pub fn key_bindings(mut self, key_bindings: KeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }

    /// The terminal, for inspecting a test backend's buffer.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C quits even while typing a filter
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.filter_typing {
            self.handle_filter_input(key);
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::PrevColumn => {
                self.focused_column = self.focused_column.saturating_sub(1);
            }
            KeyAction::NextColumn => {
                let last = self.columns.len().saturating_sub(1);
                self.focused_column = (self.focused_column + 1).min(last);
            }
            KeyAction::ToggleSort => {
                let props = table_props(self.rows.matched(), &self.columns, &self.args);
                if self.table.activate_header(&props, self.focused_column).is_none() {
                    debug!(column = self.focused_column, "Column is not sortable");
                }
            }
            KeyAction::PrevPage
            | KeyAction::NextPage
            | KeyAction::FirstPage
            | KeyAction::LastPage => self.handle_paging(action),
            KeyAction::StartFilter => {
                self.filter_typing = true;
            }
            KeyAction::ClearFilter => {
                self.set_filter(FilterQuery::default());
            }
        }

        false
    }

    fn handle_filter_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut query = self.filter.clone();
                query.push(ch);
                self.set_filter(query);
            }
            KeyCode::Backspace => {
                let mut query = self.filter.clone();
                query.pop();
                self.set_filter(query);
            }
            KeyCode::Enter => {
                self.filter_typing = false;
            }
            KeyCode::Esc => {
                self.filter_typing = false;
                self.set_filter(FilterQuery::default());
            }
            _ => {}
        }
    }

    fn set_filter(&mut self, query: FilterQuery) {
        if query == self.filter {
            return;
        }
        self.filter = query;
        self.rows.apply(&self.columns, &self.filter);
        self.shown_page = None;
        debug!(
            query = self.filter.as_str(),
            matched = self.rows.matched().len(),
            total = self.rows.total(),
            "Filter applied"
        );
    }

    fn handle_paging(&mut self, action: KeyAction) {
        let shown = match self.shown_page {
            Some(shown) => shown,
            None => {
                let props = table_props(self.rows.matched(), &self.columns, &self.args);
                PagePosition::of(&self.table.evaluate(&props))
            }
        };
        let current = shown.page_index;
        let last = shown.total_pages.saturating_sub(1);

        let target = match action {
            KeyAction::PrevPage => current.saturating_sub(1),
            KeyAction::NextPage => (current + 1).min(last),
            KeyAction::FirstPage => 0,
            KeyAction::LastPage => last,
            _ => return,
        };

        if target != current {
            self.table.request_page(target);
            self.shown_page = Some(PagePosition {
                page_index: target,
                ..shown
            });
        }
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let props = table_props(self.rows.matched(), &self.columns, &self.args);
        let view = self.table.evaluate(&props);
        self.shown_page = Some(PagePosition::of(&view));

        let screen = Screen {
            view: &view,
            styles: &self.styles,
            focused_column: (!self.columns.is_empty()).then_some(self.focused_column),
            title: self.args.title.as_deref(),
            description: self.args.description.as_deref(),
            filter: &self.filter,
            filter_typing: self.filter_typing,
        };

        self.terminal.draw(|frame| render_layout(frame, &screen))?;
        Ok(())
    }
}

/// Initialize and run the viewer over `rows`.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_viewer(
    rows: Vec<Value>,
    columns: Vec<Column<Value>>,
    args: ViewerArgs,
) -> Result<(), TuiError> {
    info!(rows = rows.len(), columns = columns.len(), "Starting viewer");
    let mut app = TuiApp::new(rows, columns, args)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_app_tests.rs"]
mod tests;
