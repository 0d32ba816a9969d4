//! Filter bar widget.

use super::constants::class;
use super::styles::ClassStyles;
use crate::view_state::FilterQuery;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Label of the clear affordance.
pub const CLEAR_LABEL: &str = "Clear";

/// Shows the filter query and, when there is one, a clear affordance.
pub struct FilterBar<'a> {
    query: &'a FilterQuery,
    typing: bool,
    styles: &'a ClassStyles,
}

impl<'a> FilterBar<'a> {
    /// Create a filter bar for `query`.
    pub fn new(query: &'a FilterQuery, styles: &'a ClassStyles) -> Self {
        Self {
            query,
            typing: false,
            styles,
        }
    }

    /// Show a cursor after the query.
    pub fn typing(mut self, typing: bool) -> Self {
        self.typing = typing;
        self
    }

    /// Whether the clear affordance is shown.
    pub fn has_clear(&self) -> bool {
        !self.query.as_str().is_empty()
    }

    fn line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled(
            self.query.as_str(),
            self.styles.get(class::FILTERS),
        )];
        if self.typing {
            spans.push(Span::styled(
                " ",
                self.styles.get(class::FILTERS).add_modifier(Modifier::REVERSED),
            ));
        }
        if self.has_clear() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("[Esc] {}", CLEAR_LABEL),
                self.styles.get(class::FILTERS_CLEAR),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.typing { "Filter" } else { "Filter (active)" };
        Paragraph::new(self.line())
            .block(Block::default().borders(Borders::ALL).title(title))
            .render(area, buf);
    }
}
