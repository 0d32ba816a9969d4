//! Data table widget.
//!
//! Renders a [`DataTableView`] with ratatui's `Table`: sortable headers with
//! arrows, body cells, the empty-state placeholder and the pagination footer.

use super::constants::{class, MIN_COLUMN_WIDTH, PAGINATION_BAR_HEIGHT};
use super::pagination::PaginationBar;
use super::styles::ClassStyles;
use crate::model::Record;
use crate::view_state::{DataTableView, HeaderSort, HeaderView};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Gap between columns, in cells.
const COLUMN_SPACING: u16 = 1;

/// Widget for one frame of a data table.
pub struct DataTableWidget<'v, 'a, T: Record> {
    view: &'v DataTableView<'a, T>,
    styles: &'v ClassStyles,
    focused_column: Option<usize>,
}

impl<'v, 'a, T: Record> DataTableWidget<'v, 'a, T> {
    /// Create a widget for `view`.
    pub fn new(view: &'v DataTableView<'a, T>, styles: &'v ClassStyles) -> Self {
        Self {
            view,
            styles,
            focused_column: None,
        }
    }

    /// Highlight the header at `index`.
    pub fn focused_column(mut self, index: Option<usize>) -> Self {
        self.focused_column = index;
        self
    }

    fn header_cell(&self, index: usize, header: &HeaderView<'_>) -> Cell<'static> {
        let mut label_style = self.styles.resolve(class::TABLE_HEAD, header.class_name);
        if header.sortable {
            label_style = label_style.patch(self.styles.get(class::TABLE_SORT));
        }
        if header.sort != HeaderSort::None {
            label_style = label_style.patch(self.styles.get(class::TABLE_SORT_ACTIVE));
        }
        if self.focused_column == Some(index) {
            label_style = label_style.patch(self.styles.get(class::TABLE_HEAD_FOCUSED));
        }

        let mut spans = vec![Span::styled(header.label.to_string(), label_style)];
        if header.sort != HeaderSort::None {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                header.sort.indicator(),
                self.styles.get(class::TABLE_SORT_INDICATOR),
            ));
        }
        Cell::from(Line::from(spans))
    }

    fn body_rows(&self) -> Vec<Row<'static>> {
        let row_style = self.styles.get(class::TABLE_ROW);
        self.view
            .body()
            .into_iter()
            .map(|cells| {
                let cells = cells.into_iter().zip(self.view.columns).map(|(text, column)| {
                    let style = self
                        .styles
                        .resolve(class::TABLE_CELL, column.class_name.as_deref());
                    Cell::from(text).style(style)
                });
                Row::new(cells).style(row_style)
            })
            .collect()
    }
}

/// Width of each column: the widest of its header (plus arrow) and cells.
pub fn column_widths<T: Record>(view: &DataTableView<'_, T>) -> Vec<u16> {
    let mut widths: Vec<usize> = view
        .headers
        .iter()
        .map(|header| header.label.width() + 2)
        .collect();

    for row in view.body() {
        for (width, text) in widths.iter_mut().zip(&row) {
            *width = (*width).max(text.width());
        }
    }

    widths
        .into_iter()
        .map(|w| u16::try_from(w).unwrap_or(u16::MAX).max(MIN_COLUMN_WIDTH))
        .collect()
}

impl<T: Record> Widget for DataTableWidget<'_, '_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let footer_height = if self.view.pagination.is_some() {
            PAGINATION_BAR_HEIGHT
        } else {
            0
        };
        let [table_area, footer_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(footer_height)]).areas(area);

        let header = Row::new(
            self.view
                .headers
                .iter()
                .enumerate()
                .map(|(index, header)| self.header_cell(index, header)),
        )
        .style(self.styles.get(class::TABLE_HEADER));

        let widths = column_widths(self.view)
            .into_iter()
            .map(Constraint::Length)
            .collect::<Vec<_>>();

        let table = Table::new(self.body_rows(), widths)
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .style(self.styles.get(class::TABLE_BODY));
        Widget::render(table, table_area, buf);

        // The placeholder spans every column, so it is drawn over the body
        // area instead of as a table row.
        if self.view.is_empty() && table_area.height > 1 {
            let placeholder_area = Rect {
                y: table_area.y + 1,
                height: 1,
                ..table_area
            };
            Paragraph::new(self.view.empty_message)
                .style(self.styles.get(class::DATA_TABLE_EMPTY))
                .alignment(Alignment::Center)
                .render(placeholder_area, buf);
        }

        if let Some(summary) = &self.view.pagination {
            PaginationBar::new(summary, self.styles).render(footer_area, buf);
        }
    }
}
