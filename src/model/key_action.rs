//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// [`KeyBindings`](crate::config::KeyBindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Column focus
    /// Move header focus one column left. Default: h/←
    PrevColumn,
    /// Move header focus one column right. Default: l/→
    NextColumn,
    /// Activate the focused header (advance its sort cycle). Default: s/Enter
    ToggleSort,

    // Pagination
    /// Go to the previous page. Default: p/Page Up
    PrevPage,
    /// Go to the next page. Default: n/Page Down
    NextPage,
    /// Go to the first page. Default: g/Home
    FirstPage,
    /// Go to the last page. Default: G/End
    LastPage,

    // Filtering
    /// Start typing a filter query. Default: /
    StartFilter,
    /// Clear the filter query. Default: Esc
    ClearFilter,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether this action changes the page.
    pub fn is_paging(self) -> bool {
        matches!(
            self,
            KeyAction::PrevPage | KeyAction::NextPage | KeyAction::FirstPage | KeyAction::LastPage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paging_actions_are_classified() {
        assert!(KeyAction::NextPage.is_paging());
        assert!(KeyAction::LastPage.is_paging());
        assert!(!KeyAction::ToggleSort.is_paging());
        assert!(!KeyAction::Quit.is_paging());
    }

    #[test]
    fn actions_are_hashable() {
        use std::collections::HashSet;
        let set: HashSet<_> = [KeyAction::Quit, KeyAction::Quit, KeyAction::NextColumn]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }
}
