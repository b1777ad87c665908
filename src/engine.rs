use tracing::debug;

use crate::config::SeekBarConfig;
use crate::consts::DEFAULT_TOUCH_SLOP_PX;
use crate::error::Result;
use crate::hit::hit_test;
use crate::input::{
    GestureState, PointerEvent, PointerId, PointerSample, Step, TransitionContext, transition,
};
use crate::model::{Thumb, ValueMode, ValueModel};
use crate::notify::{NotificationDispatcher, NotifyReason, RangeChangeListener};
use crate::number::{NumberKind, RangeValue};
use crate::state::SavedState;
use crate::track::TrackGeometry;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// View effects returned from input handlers for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Thumb positions or pressed state changed; redraw.
    RenderNeeded,
    /// Ask ancestors not to intercept the rest of this gesture.
    ClaimDrag,
    /// Pressed-state visuals on or off.
    SetPressed(bool),
}

/// Outcome of one pointer event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Whether the seek bar consumed the event. Unhandled events should go to
    /// the host's default handling.
    pub handled: bool,
    pub actions: Vec<Action>,
}

impl Response {
    fn unhandled() -> Self {
        Self::default()
    }
}

/// Dual-thumb range seek bar: value model, gesture state machine and
/// listener dispatch behind one host-facing API.
///
/// All state changes happen synchronously inside the call that caused them.
#[derive(Debug)]
pub struct RangeSeekBar {
    model: ValueModel,
    track: TrackGeometry,
    gesture: GestureState,
    notifier: NotificationDispatcher,
    mode: ValueMode,
    touch_slop: f64,
    enabled: bool,
}

impl Default for RangeSeekBar {
    fn default() -> Self {
        Self {
            model: ValueModel::new(),
            track: TrackGeometry::default(),
            gesture: GestureState::Idle,
            notifier: NotificationDispatcher::new(),
            mode: ValueMode::Linear,
            touch_slop: DEFAULT_TOUCH_SLOP_PX,
            enabled: true,
        }
    }
}

impl RangeSeekBar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a seek bar from a validated configuration. The view width starts
    /// at zero until the host calls [`Self::set_view_width`].
    pub fn from_config(config: &SeekBarConfig) -> Result<Self> {
        config.validate()?;
        let mut bar = Self {
            track: TrackGeometry::new(0.0, config.thumb_width, config.initial_padding),
            mode: config.value_mode,
            touch_slop: config.touch_slop,
            enabled: config.enabled,
            ..Self::default()
        };
        bar.notifier.set_notify_while_dragging(config.notify_while_dragging);
        if let Some(bounds) = &config.bounds {
            let (min, max) = bounds.parse()?;
            bar.set_range_values(min, max)?;
        }
        Ok(bar)
    }

    // --- Range ---

    /// Set absolute bounds. Rebuilds the step list and selects the full range.
    pub fn set_range_values(
        &mut self,
        min: impl Into<RangeValue>,
        max: impl Into<RangeValue>,
    ) -> Result<()> {
        self.model.set_range_values(min.into(), max.into())?;
        debug!(
            min = %self.model.absolute_min(),
            max = %self.model.absolute_max(),
            kind = %self.model.number_kind(),
            steps = self.model.steps().len(),
            "range set"
        );
        Ok(())
    }

    #[must_use]
    pub fn absolute_min(&self) -> RangeValue {
        self.model.absolute_min()
    }

    #[must_use]
    pub fn absolute_max(&self) -> RangeValue {
        self.model.absolute_max()
    }

    #[must_use]
    pub fn number_kind(&self) -> NumberKind {
        self.model.number_kind()
    }

    /// Snap points used in discrete mode.
    #[must_use]
    pub fn discrete_steps(&self) -> &[i64] {
        self.model.steps().as_slice()
    }

    // --- Selection ---

    /// Selected min as seen in `mode`. In discrete mode the thumb is snapped
    /// to the nearest step first.
    pub fn selected_min(&mut self, mode: ValueMode) -> RangeValue {
        self.model.selected(Thumb::Min, mode)
    }

    /// Selected max as seen in `mode`. In discrete mode the thumb is snapped
    /// to the nearest step first.
    pub fn selected_max(&mut self, mode: ValueMode) -> RangeValue {
        self.model.selected(Thumb::Max, mode)
    }

    /// Selected `(min, max)` in linear terms, without snapping.
    #[must_use]
    pub fn selected_linear(&self) -> (RangeValue, RangeValue) {
        (self.model.selected_min(), self.model.selected_max())
    }

    pub fn set_selected_min(&mut self, value: impl Into<RangeValue>) {
        self.model.set_selected_min(value.into());
        self.dispatch(NotifyReason::ValueSet);
    }

    pub fn set_selected_max(&mut self, value: impl Into<RangeValue>) {
        self.model.set_selected_max(value.into());
        self.dispatch(NotifyReason::ValueSet);
    }

    /// Select the whole range again.
    pub fn reset_selected_values(&mut self) {
        self.model.reset_selected_values();
        self.dispatch(NotifyReason::ValueSet);
    }

    #[must_use]
    pub fn normalized_min(&self) -> f64 {
        self.model.normalized_min()
    }

    #[must_use]
    pub fn normalized_max(&self) -> f64 {
        self.model.normalized_max()
    }

    #[must_use]
    pub fn model(&self) -> &ValueModel {
        &self.model
    }

    // --- Mode / listener ---

    #[must_use]
    pub fn value_mode(&self) -> ValueMode {
        self.mode
    }

    /// Switch value mode. Switching to discrete snaps both thumbs; the
    /// listener is notified in every case.
    pub fn set_value_mode(&mut self, mode: ValueMode) {
        self.mode = mode;
        if mode == ValueMode::Discrete {
            self.model.snap_min_to_discrete();
            self.model.snap_max_to_discrete();
        }
        debug!(?mode, "value mode switched");
        self.dispatch(NotifyReason::ModeSwitch);
    }

    pub fn set_notify_while_dragging(&mut self, flag: bool) {
        self.notifier.set_notify_while_dragging(flag);
    }

    #[must_use]
    pub fn notify_while_dragging(&self) -> bool {
        self.notifier.notify_while_dragging()
    }

    pub fn set_on_range_change_listener(&mut self, listener: RangeChangeListener) {
        self.notifier.set_listener(listener);
    }

    pub fn clear_on_range_change_listener(&mut self) {
        self.notifier.clear_listener();
    }

    // --- View ---

    pub fn set_view_width(&mut self, width: f64) {
        self.track.view_width = width;
    }

    #[must_use]
    pub fn track(&self) -> &TrackGeometry {
        &self.track
    }

    /// View x of the center of `thumb`.
    #[must_use]
    pub fn thumb_screen_x(&self, thumb: Thumb) -> f64 {
        self.track.normalized_to_screen(self.model.normalized(thumb))
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling drops any gesture in progress without notifying.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.gesture = GestureState::Idle;
        }
    }

    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    // --- Saved state ---

    #[must_use]
    pub fn saved_state(&self) -> SavedState {
        SavedState {
            normalized_min: self.model.normalized_min(),
            normalized_max: self.model.normalized_max(),
        }
    }

    /// Restore positions saved by [`Self::saved_state`]. Does not notify.
    pub fn restore_state(&mut self, state: SavedState) {
        self.model.restore_normalized(state.normalized_min, state.normalized_max);
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pointer: PointerSample) -> Response {
        self.handle(&PointerEvent::Down { pointer })
    }

    pub fn on_pointer_move(&mut self, pointers: &[PointerSample]) -> Response {
        self.handle(&PointerEvent::Move { pointers: pointers.to_vec() })
    }

    pub fn on_pointer_up(&mut self, pointer: PointerSample) -> Response {
        self.handle(&PointerEvent::Up { pointer })
    }

    pub fn on_secondary_pointer_down(&mut self, pointer: PointerSample) -> Response {
        self.handle(&PointerEvent::SecondaryDown { pointer })
    }

    pub fn on_secondary_pointer_up(&mut self, lifted: PointerId, remaining: &[PointerSample]) -> Response {
        self.handle(&PointerEvent::SecondaryUp { lifted, remaining: remaining.to_vec() })
    }

    pub fn on_pointer_cancel(&mut self) -> Response {
        self.handle(&PointerEvent::Cancel)
    }

    /// Feed one event through the state machine and apply its steps.
    pub fn handle(&mut self, event: &PointerEvent) -> Response {
        if !self.enabled {
            return Response::unhandled();
        }
        let down_hit = match event {
            PointerEvent::Down { pointer } => hit_test(pointer.x, &self.model, &self.track),
            _ => None,
        };
        let ctx = TransitionContext { down_hit, touch_slop: self.touch_slop };
        let previous = self.gesture;
        let result = transition(previous, event, &ctx);
        self.gesture = result.next;
        if !result.handled {
            return Response::unhandled();
        }

        let mut actions = Vec::new();
        for step in result.steps {
            match step {
                Step::Track { thumb, x } => self.track_to(thumb, x),
                Step::Notify(reason) => self.dispatch(reason),
                Step::Pressed(pressed) => actions.push(Action::SetPressed(pressed)),
                Step::ClaimDrag => actions.push(Action::ClaimDrag),
            }
        }
        actions.push(Action::RenderNeeded);
        self.log_transition(previous, self.gesture);
        Response { handled: true, actions }
    }

    fn track_to(&mut self, thumb: Thumb, x: f64) {
        let normalized = self.track.screen_to_normalized(x);
        self.model.set_normalized(thumb, normalized);
    }

    /// Call the listener with mode-aware values if `reason` warrants it.
    fn dispatch(&mut self, reason: NotifyReason) {
        if !self.notifier.should_notify(reason) {
            return;
        }
        let min = self.model.selected(Thumb::Min, self.mode);
        let max = self.model.selected(Thumb::Max, self.mode);
        if let Some(mut listener) = self.notifier.take_listener() {
            listener(self, min, max);
            self.notifier.restore_listener(listener);
        }
    }

    fn log_transition(&self, from: GestureState, to: GestureState) {
        match (from, to) {
            (GestureState::Idle, GestureState::Armed(g)) => {
                debug!(thumb = ?g.thumb, pointer = g.pointer, x = g.down_x, "thumb armed");
            }
            (GestureState::Armed(_), GestureState::Dragging(g)) => {
                debug!(thumb = ?g.thumb, pointer = g.pointer, "drag started");
            }
            (GestureState::Armed(g) | GestureState::Dragging(g), GestureState::Idle) => {
                debug!(
                    thumb = ?g.thumb,
                    min = self.model.normalized_min(),
                    max = self.model.normalized_max(),
                    "gesture ended"
                );
            }
            _ => {}
        }
    }
}
