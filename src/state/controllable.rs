//! Controlled / uncontrolled state slot.
//!
//! A piece of table state (the sort, the page index) is either owned by the
//! caller or by the engine. The choice is made once, at construction:
//!
//! - **Uncontrolled**: the engine keeps the value in its own retained cell,
//!   seeded from a default.
//! - **Controlled**: the caller installs a change handler. Mutations are
//!   reported to the handler and the caller feeds the new value back in on the
//!   next evaluation.
//!
//! Reads go through [`Controllable::resolve`] in both modes: an externally
//! supplied value wins, otherwise the retained value is used. The retained
//! cell always exists and acts as a shadow copy when only one half of the
//! controlled pair (value or handler) is supplied.

use std::fmt;

/// Handler receiving requested state changes.
pub type ChangeHandler<V> = Box<dyn FnMut(V)>;

/// Where a mutation ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    /// Reported to the caller's change handler; retained state untouched.
    Notified,
    /// Written to the engine's retained state.
    Retained,
}

/// A state value that is either caller-controlled or engine-retained.
pub struct Controllable<V> {
    retained: V,
    on_change: Option<ChangeHandler<V>>,
}

impl<V: Clone + PartialEq> Controllable<V> {
    /// Engine-owned state seeded from `default`.
    pub fn uncontrolled(default: V) -> Self {
        Self {
            retained: default,
            on_change: None,
        }
    }

    /// State whose mutations are reported to `on_change`.
    ///
    /// `default` seeds the shadow copy read when the caller supplies no value.
    pub fn controlled(default: V, on_change: impl FnMut(V) + 'static) -> Self {
        Self {
            retained: default,
            on_change: Some(Box::new(on_change)),
        }
    }

    /// Build from an optional handler.
    pub fn new(default: V, on_change: Option<ChangeHandler<V>>) -> Self {
        Self {
            retained: default,
            on_change,
        }
    }

    /// Whether a change handler is installed.
    pub fn has_handler(&self) -> bool {
        self.on_change.is_some()
    }

    /// Engine-retained value.
    pub fn retained(&self) -> &V {
        &self.retained
    }

    /// Effective value: `external` if supplied, otherwise the retained value.
    pub fn resolve(&self, external: Option<&V>) -> V {
        external.unwrap_or(&self.retained).clone()
    }

    /// Request a new value.
    ///
    /// With a handler installed the request is reported and nothing else
    /// happens. Without one, the retained value is replaced.
    pub fn set(&mut self, next: V) -> Routed {
        match self.on_change.as_mut() {
            Some(handler) => {
                handler(next);
                Routed::Notified
            }
            None => {
                self.retained = next;
                Routed::Retained
            }
        }
    }

    /// Snap the retained value to `value` without notifying anyone.
    ///
    /// Only applies when no external value is present; caller-owned state is
    /// never corrected. Returns `true` if the retained value changed. Calling
    /// again with the same value is a no-op.
    pub fn reconcile(&mut self, external_present: bool, value: V) -> bool {
        if external_present || self.retained == value {
            return false;
        }
        self.retained = value;
        true
    }
}

impl<V: fmt::Debug> fmt::Debug for Controllable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controllable")
            .field("retained", &self.retained)
            .field("controlled", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_handler() -> (Rc<RefCell<Vec<usize>>>, impl FnMut(usize) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (calls, move |value| sink.borrow_mut().push(value))
    }

    #[test]
    fn uncontrolled_set_updates_retained() {
        let mut slot = Controllable::uncontrolled(0usize);
        assert_eq!(slot.set(3), Routed::Retained);
        assert_eq!(slot.resolve(None), 3);
        assert!(!slot.has_handler());
    }

    #[test]
    fn controlled_set_notifies_without_updating() {
        let (calls, handler) = recording_handler();
        let mut slot = Controllable::controlled(0usize, handler);

        assert_eq!(slot.set(4), Routed::Notified);
        assert_eq!(*calls.borrow(), vec![4]);
        assert_eq!(*slot.retained(), 0);
    }

    #[test]
    fn external_value_wins_over_retained() {
        let slot = Controllable::uncontrolled(2usize);
        assert_eq!(slot.resolve(Some(&7)), 7);
        assert_eq!(slot.resolve(None), 2);
    }

    #[test]
    fn reconcile_skips_external_values() {
        let mut slot = Controllable::uncontrolled(5usize);
        assert!(!slot.reconcile(true, 1));
        assert_eq!(*slot.retained(), 5);
    }

    #[test]
    fn reconcile_is_idempotent() {
        let mut slot = Controllable::uncontrolled(5usize);
        assert!(slot.reconcile(false, 1));
        assert!(!slot.reconcile(false, 1));
        assert_eq!(*slot.retained(), 1);
    }

    #[test]
    fn reconcile_never_notifies() {
        let (calls, handler) = recording_handler();
        let mut slot = Controllable::controlled(5usize, handler);
        assert!(slot.reconcile(false, 0));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn debug_reports_mode() {
        let slot = Controllable::controlled(1usize, |_| {});
        assert_eq!(
            format!("{:?}", slot),
            "Controllable { retained: 1, controlled: true }"
        );
    }
}
