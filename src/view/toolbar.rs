//! Toolbar widget: title and description above the table.

use super::constants::class;
use super::styles::ClassStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};

/// Title line plus an optional description line.
pub struct Toolbar<'a> {
    title: Option<&'a str>,
    description: Option<&'a str>,
    styles: &'a ClassStyles,
}

impl<'a> Toolbar<'a> {
    /// Empty toolbar.
    pub fn new(styles: &'a ClassStyles) -> Self {
        Self {
            title: None,
            description: None,
            styles,
        }
    }

    /// Set the title.
    pub fn title(mut self, title: Option<&'a str>) -> Self {
        self.title = title;
        self
    }

    /// Set the description.
    pub fn description(mut self, description: Option<&'a str>) -> Self {
        self.description = description;
        self
    }

    /// Whether there is anything to draw.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }

    fn text(&self) -> Text<'a> {
        let mut lines = Vec::new();
        if let Some(title) = self.title {
            lines.push(Line::styled(title, self.styles.get(class::TOOLBAR_TITLE)));
        }
        if let Some(description) = self.description {
            lines.push(Line::styled(
                description,
                self.styles.get(class::TOOLBAR_DESCRIPTION),
            ));
        }
        Text::from(lines)
    }
}

impl Widget for Toolbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.text()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::styles::ColorConfig;

    #[test]
    fn empty_without_title_or_description() {
        let styles = ClassStyles::with_color_config(ColorConfig::disabled());
        assert!(Toolbar::new(&styles).is_empty());
        assert!(!Toolbar::new(&styles).title(Some("Users")).is_empty());
    }

    #[test]
    fn description_follows_title() {
        let styles = ClassStyles::with_color_config(ColorConfig::disabled());
        let text = Toolbar::new(&styles)
            .title(Some("Users"))
            .description(Some("42 accounts"))
            .text();

        assert_eq!(text.lines.len(), 2);
        assert_eq!(text.lines[0].to_string(), "Users");
        assert_eq!(text.lines[1].to_string(), "42 accounts");
    }
}
