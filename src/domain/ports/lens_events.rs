//! Lens Event Port
//!
//! Change notification for lens editing. Lenses themselves are plain values;
//! hosts that need to react to edits register an observer at the boundary.

use crate::domain::entities::Lens;

/// Event emitted when an edited lens changes
#[derive(Debug, Clone, PartialEq)]
pub enum LensEvent {
    /// The lens was replaced by an edited copy
    Changed { old: Lens, new: Lens },
}

/// Trait for receiving lens events
pub trait LensObserver {
    fn on_event(&self, event: &LensEvent);
}

impl<F> LensObserver for F
where
    F: Fn(&LensEvent),
{
    fn on_event(&self, event: &LensEvent) {
        self(event)
    }
}
