//! Screen layout for the interactive viewer.
//!
//! Stacks, top to bottom: toolbar (when titled), filter bar (while a filter
//! is being typed or applied), the table with its footer, and a key hint line.

use super::constants::{FILTER_BAR_HEIGHT, STATUS_BAR_HEIGHT, TOOLBAR_HEIGHT};
use super::filter::FilterBar;
use super::styles::ClassStyles;
use super::table::DataTableWidget;
use super::toolbar::Toolbar;
use crate::model::Record;
use crate::view_state::{DataTableView, FilterQuery};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Key hints shown on the last line.
pub const KEY_HINTS: &str =
    "h/l: column | s: sort | p/n: page | g/G: first/last | /: filter | q: quit";

/// Key hints shown while typing a filter.
pub const FILTER_KEY_HINTS: &str = "Enter: apply | Esc: clear | Backspace: delete";

/// Everything one frame needs.
pub struct Screen<'s, 'a, T: Record> {
    /// Evaluated table.
    pub view: &'s DataTableView<'a, T>,
    /// Class styles.
    pub styles: &'s ClassStyles,
    /// Header with keyboard focus.
    pub focused_column: Option<usize>,
    /// Toolbar title.
    pub title: Option<&'s str>,
    /// Toolbar description.
    pub description: Option<&'s str>,
    /// Current filter.
    pub filter: &'s FilterQuery,
    /// Whether the filter is being typed.
    pub filter_typing: bool,
}

impl<T: Record> Screen<'_, '_, T> {
    fn shows_filter(&self) -> bool {
        self.filter_typing || !self.filter.as_str().is_empty()
    }

    fn shows_toolbar(&self) -> bool {
        self.title.is_some() || self.description.is_some()
    }
}

/// Split `area` into toolbar, filter, table and status areas.
///
/// Hidden sections get zero height.
pub fn split_screen(area: Rect, toolbar: bool, filter: bool) -> [Rect; 4] {
    let toolbar_height = if toolbar { TOOLBAR_HEIGHT } else { 0 };
    let filter_height = if filter { FILTER_BAR_HEIGHT } else { 0 };
    Layout::vertical([
        Constraint::Length(toolbar_height),
        Constraint::Length(filter_height),
        Constraint::Min(1),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(area)
}

/// Render one frame.
pub fn render_layout<T: Record>(frame: &mut Frame, screen: &Screen<'_, '_, T>) {
    let [toolbar_area, filter_area, table_area, status_area] =
        split_screen(frame.area(), screen.shows_toolbar(), screen.shows_filter());

    if screen.shows_toolbar() {
        let toolbar = Toolbar::new(screen.styles)
            .title(screen.title)
            .description(screen.description);
        frame.render_widget(toolbar, toolbar_area);
    }

    if screen.shows_filter() {
        let filter = FilterBar::new(screen.filter, screen.styles).typing(screen.filter_typing);
        frame.render_widget(filter, filter_area);
    }

    let table =
        DataTableWidget::new(screen.view, screen.styles).focused_column(screen.focused_column);
    frame.render_widget(table, table_area);

    render_status_bar(frame, status_area, screen.filter_typing);
}

fn render_status_bar(frame: &mut Frame, area: Rect, filter_typing: bool) {
    let hints = if filter_typing {
        FILTER_KEY_HINTS
    } else {
        KEY_HINTS
    };
    let paragraph =
        Paragraph::new(Line::from(hints)).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_sections_collapse() {
        let [toolbar, filter, table, status] = split_screen(Rect::new(0, 0, 80, 24), false, false);
        assert_eq!(toolbar.height, 0);
        assert_eq!(filter.height, 0);
        assert_eq!(table.height, 23);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn toolbar_and_filter_take_fixed_heights() {
        let [toolbar, filter, table, _] = split_screen(Rect::new(0, 0, 80, 24), true, true);
        assert_eq!(toolbar.height, TOOLBAR_HEIGHT);
        assert_eq!(filter.height, FILTER_BAR_HEIGHT);
        assert_eq!(table.y, TOOLBAR_HEIGHT + FILTER_BAR_HEIGHT);
        assert_eq!(table.height, 24 - TOOLBAR_HEIGHT - FILTER_BAR_HEIGHT - 1);
    }
}
