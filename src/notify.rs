//! Listener registration and the per-event decision of whether to call it.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::engine::RangeSeekBar;
use crate::number::RangeValue;

/// Callback invoked with the seek bar and its mode-aware `(min, max)` selection.
pub type RangeChangeListener = Box<dyn FnMut(&RangeSeekBar, RangeValue, RangeValue)>;

/// Why a notification is being offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyReason {
    /// Pointer moved while a thumb was pressed.
    DragMove,
    /// Pointer lifted after a drag.
    Released,
    /// Pointer lifted without ever passing the touch slop.
    TapSeek,
    /// Selected values were set programmatically.
    ValueSet,
    /// Value mode changed.
    ModeSwitch,
}

#[derive(Default)]
pub struct NotificationDispatcher {
    listener: Option<RangeChangeListener>,
    notify_while_dragging: bool,
}

impl NotificationDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_listener(&mut self, listener: RangeChangeListener) {
        self.listener = Some(listener);
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    pub fn set_notify_while_dragging(&mut self, flag: bool) {
        self.notify_while_dragging = flag;
    }

    #[must_use]
    pub fn notify_while_dragging(&self) -> bool {
        self.notify_while_dragging
    }

    /// Whether an event with `reason` should reach the listener.
    ///
    /// Intermediate drag moves only notify when `notify_while_dragging` is set;
    /// everything else always does. Nothing notifies without a listener.
    #[must_use]
    pub fn should_notify(&self, reason: NotifyReason) -> bool {
        if !self.has_listener() {
            return false;
        }
        match reason {
            NotifyReason::DragMove => self.notify_while_dragging,
            NotifyReason::Released
            | NotifyReason::TapSeek
            | NotifyReason::ValueSet
            | NotifyReason::ModeSwitch => true,
        }
    }

    /// Lend the listener out for one call; pair with [`Self::restore_listener`].
    pub(crate) fn take_listener(&mut self) -> Option<RangeChangeListener> {
        self.listener.take()
    }

    /// Put a lent listener back unless a new one was registered meanwhile.
    pub(crate) fn restore_listener(&mut self, listener: RangeChangeListener) {
        if self.listener.is_none() {
            self.listener = Some(listener);
        }
    }
}

impl std::fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDispatcher")
            .field("has_listener", &self.has_listener())
            .field("notify_while_dragging", &self.notify_while_dragging)
            .finish()
    }
}
