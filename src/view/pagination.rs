//! Pagination footer widget.

use super::constants::class;
use super::styles::ClassStyles;
use crate::view_state::PaginationSummary;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Label of the previous-page affordance.
pub const PREVIOUS_LABEL: &str = "‹ Previous";
/// Label of the next-page affordance.
pub const NEXT_LABEL: &str = "Next ›";

/// `Showing X-Y of N   ‹ Previous  Page P of Q  Next ›`
///
/// Affordances that cannot be used are dimmed.
pub struct PaginationBar<'a> {
    summary: &'a PaginationSummary,
    styles: &'a ClassStyles,
}

impl<'a> PaginationBar<'a> {
    /// Create a footer for `summary`.
    pub fn new(summary: &'a PaginationSummary, styles: &'a ClassStyles) -> Self {
        Self { summary, styles }
    }

    fn button(&self, label: &'static str, enabled: bool) -> Span<'static> {
        let style = if enabled {
            self.styles.get(class::PAGINATION_BUTTON)
        } else {
            self.styles
                .resolve(class::PAGINATION_BUTTON, Some(class::PAGINATION_BUTTON_DISABLED))
        };
        Span::styled(label, style)
    }

    /// The footer as a single line.
    pub fn line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                self.summary.showing(),
                self.styles.get(class::PAGINATION_INFO),
            ),
            Span::raw("   "),
            self.button(PREVIOUS_LABEL, self.summary.has_previous()),
            Span::raw("  "),
            Span::styled(
                self.summary.page_label(),
                self.styles.get(class::PAGINATION_PAGE),
            ),
            Span::raw("  "),
            self.button(NEXT_LABEL, self.summary.has_next()),
        ])
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}
