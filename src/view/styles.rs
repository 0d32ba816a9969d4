//! Class-name styling.
//!
//! Every rendered element carries a `rost-*` class name. [`ClassStyles`]
//! maps class names to ratatui styles; column `class_name` and
//! `header_class_name` values are looked up in the same map.

use super::constants::class;
use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off, regardless of environment.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ClassStyles =====

/// Class name to style lookup.
///
/// Without colors, only modifiers (bold, dim, reversed) are kept so the
/// table stays readable on monochrome terminals.
#[derive(Debug, Clone)]
pub struct ClassStyles {
    styles: HashMap<String, Style>,
    colors: bool,
}

impl ClassStyles {
    /// Default theme for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let mut styles = Self {
            styles: HashMap::new(),
            colors: config.colors_enabled(),
        };

        styles.insert(
            class::TABLE_HEAD,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        );
        styles.insert(
            class::TABLE_HEAD_FOCUSED,
            Style::default().add_modifier(Modifier::REVERSED),
        );
        styles.insert(class::TABLE_SORT_ACTIVE, Style::default().fg(Color::Yellow));
        styles.insert(class::TABLE_SORT_INDICATOR, Style::default().fg(Color::Yellow));
        styles.insert(
            class::DATA_TABLE_EMPTY,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );
        styles.insert(class::PAGINATION_INFO, Style::default().fg(Color::Gray));
        styles.insert(
            class::PAGINATION_PAGE,
            Style::default().add_modifier(Modifier::BOLD),
        );
        styles.insert(class::PAGINATION_BUTTON, Style::default().fg(Color::Cyan));
        styles.insert(
            class::PAGINATION_BUTTON_DISABLED,
            Style::default().add_modifier(Modifier::DIM),
        );
        styles.insert(
            class::TOOLBAR_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        );
        styles.insert(class::TOOLBAR_DESCRIPTION, Style::default().fg(Color::Gray));
        styles.insert(class::FILTERS_CLEAR, Style::default().fg(Color::Red));

        styles
    }

    /// Register (or replace) the style for a class.
    ///
    /// Colors are stripped when colors are disabled.
    pub fn insert(&mut self, class_name: impl Into<String>, style: Style) {
        let style = if self.colors {
            style
        } else {
            strip_colors(style)
        };
        self.styles.insert(class_name.into(), style);
    }

    /// Style for one class; unknown classes get the default style.
    pub fn get(&self, class_name: &str) -> Style {
        self.styles.get(class_name).copied().unwrap_or_default()
    }

    /// Style for a base class patched with an optional extra class.
    pub fn resolve(&self, base: &str, extra: Option<&str>) -> Style {
        let style = self.get(base);
        match extra {
            Some(extra) => style.patch(self.get(extra)),
            None => style,
        }
    }
}

impl Default for ClassStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

fn strip_colors(style: Style) -> Style {
    Style {
        fg: None,
        bg: None,
        underline_color: None,
        ..style
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // ===== ColorConfig Tests =====

    #[test]
    #[serial(no_color)]
    fn color_config_respects_no_color_flag() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(
            !config.colors_enabled(),
            "--no-color flag should disable colors"
        );
    }

    #[test]
    #[serial(no_color)]
    fn color_config_respects_no_color_env_var() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        assert!(
            !config.colors_enabled(),
            "NO_COLOR env var should disable colors"
        );
        std::env::remove_var("NO_COLOR");
    }

    #[test]
    #[serial(no_color)]
    fn color_config_enables_colors_by_default() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(false);
        assert!(
            config.colors_enabled(),
            "Colors should be enabled by default"
        );
    }

    #[test]
    #[serial(no_color)]
    fn color_config_no_color_env_any_value_disables() {
        // NO_COLOR can be any value (even empty string)
        std::env::set_var("NO_COLOR", "");
        let config = ColorConfig::from_env_and_args(false);
        assert!(
            !config.colors_enabled(),
            "NO_COLOR with empty string should disable colors"
        );
        std::env::remove_var("NO_COLOR");
    }

    // ===== ClassStyles Tests =====

    #[test]
    fn head_style_is_colored_when_enabled() {
        let styles = ClassStyles::with_color_config(ColorConfig::enabled());
        assert_eq!(styles.get(class::TABLE_HEAD).fg, Some(Color::Cyan));
    }

    #[test]
    fn colors_are_stripped_when_disabled() {
        let styles = ClassStyles::with_color_config(ColorConfig::disabled());
        let head = styles.get(class::TABLE_HEAD);
        assert_eq!(head.fg, None);
        assert!(
            head.add_modifier.contains(Modifier::BOLD),
            "Modifiers survive without colors"
        );
    }

    #[test]
    fn custom_class_is_stripped_when_disabled() {
        let mut styles = ClassStyles::with_color_config(ColorConfig::disabled());
        styles.insert("price", Style::default().fg(Color::Green));
        assert_eq!(styles.get("price"), Style::default());
    }

    #[test]
    fn unknown_class_gets_default_style() {
        let styles = ClassStyles::with_color_config(ColorConfig::enabled());
        assert_eq!(styles.get("rost-nonexistent"), Style::default());
    }

    #[test]
    fn resolve_patches_extra_class_over_base() {
        let mut styles = ClassStyles::with_color_config(ColorConfig::enabled());
        styles.insert("price", Style::default().fg(Color::Green));

        let style = styles.resolve(class::TABLE_HEAD, Some("price"));
        assert_eq!(style.fg, Some(Color::Green));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
