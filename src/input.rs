//! Pointer input model and the gesture state machine.
//!
//! `PointerEvent` is what the host feeds in. `GestureState` is the gesture
//! being tracked between pointer-down and pointer-up. [`transition`] is a pure
//! function from (state, event) to the next state plus a list of [`Step`]s for
//! the engine to apply; it never touches the value model itself, so every
//! path through the machine can be tested without a host.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use tracing::warn;

use crate::model::Thumb;
use crate::notify::NotifyReason;

/// Host-assigned pointer identifier, stable for the life of one touch.
pub type PointerId = i32;

/// One pointer's position in view-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub x: f64,
}

impl PointerSample {
    #[must_use]
    pub fn new(id: PointerId, x: f64) -> Self {
        Self { id, x }
    }
}

/// A pointer event as delivered by the host's input pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// First pointer touched down.
    Down { pointer: PointerSample },
    /// Pointers moved; carries every pointer still down.
    Move { pointers: Vec<PointerSample> },
    /// Last pointer lifted.
    Up { pointer: PointerSample },
    /// An additional pointer touched down during a gesture.
    SecondaryDown { pointer: PointerSample },
    /// A non-final pointer lifted; `remaining` are the pointers still down.
    SecondaryUp { lifted: PointerId, remaining: Vec<PointerSample> },
    /// The host took the gesture away.
    Cancel,
}

/// The gesture context shared by the armed and dragging states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    /// Thumb being moved.
    pub thumb: Thumb,
    /// Pointer whose x drives the thumb.
    pub pointer: PointerId,
    /// x of the last down (or re-target) of `pointer`; slop is measured from here.
    pub down_x: f64,
}

/// State of the touch controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A thumb was pressed but the pointer has not yet moved past the touch slop.
    Armed(Gesture),
    /// The pointer moved past the slop; the thumb follows it.
    Dragging(Gesture),
}

impl GestureState {
    #[must_use]
    pub fn gesture(&self) -> Option<&Gesture> {
        match self {
            Self::Idle => None,
            Self::Armed(g) | Self::Dragging(g) => Some(g),
        }
    }

    /// Thumb currently pressed, if any.
    #[must_use]
    pub fn pressed_thumb(&self) -> Option<Thumb> {
        self.gesture().map(|g| g.thumb)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    fn with_gesture(self, gesture: Gesture) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Armed(_) => Self::Armed(gesture),
            Self::Dragging(_) => Self::Dragging(gesture),
        }
    }
}

/// Work the engine performs after a transition, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Move `thumb` to the normalized position under view x `x`.
    Track { thumb: Thumb, x: f64 },
    /// Offer a notification to the dispatcher.
    Notify(NotifyReason),
    /// Pressed-state visuals on or off.
    Pressed(bool),
    /// Ask ancestors not to steal the rest of the gesture.
    ClaimDrag,
}

/// Result of feeding one event to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: GestureState,
    pub handled: bool,
    pub steps: Vec<Step>,
}

impl Transition {
    fn ignored(state: GestureState) -> Self {
        Self { next: state, handled: false, steps: Vec::new() }
    }

    fn handled(next: GestureState, steps: Vec<Step>) -> Self {
        Self { next, handled: true, steps }
    }
}

/// Inputs to a transition that come from outside the event itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionContext {
    /// Thumb under the pointer for a `Down` event, from the hit test.
    pub down_hit: Option<Thumb>,
    /// Horizontal distance a pointer must exceed before a press becomes a drag.
    pub touch_slop: f64,
}

/// Advance the gesture state machine by one event.
#[must_use]
pub fn transition(state: GestureState, event: &PointerEvent, ctx: &TransitionContext) -> Transition {
    match event {
        PointerEvent::Down { pointer } => on_down(state, *pointer, ctx),
        PointerEvent::Move { pointers } => on_move(state, pointers, ctx),
        PointerEvent::Up { pointer } => on_up(state, *pointer),
        PointerEvent::SecondaryDown { pointer } => on_secondary_down(state, *pointer),
        PointerEvent::SecondaryUp { lifted, remaining } => on_secondary_up(state, *lifted, remaining),
        PointerEvent::Cancel => on_cancel(state),
    }
}

fn on_down(state: GestureState, pointer: PointerSample, ctx: &TransitionContext) -> Transition {
    let Some(thumb) = ctx.down_hit else {
        if state.is_idle() {
            return Transition::ignored(state);
        }
        // A leftover gesture still has pressed visuals on.
        return Transition::handled(GestureState::Idle, vec![Step::Pressed(false)]);
    };
    let gesture = Gesture { thumb, pointer: pointer.id, down_x: pointer.x };
    Transition::handled(
        GestureState::Armed(gesture),
        vec![Step::Pressed(true), Step::Track { thumb, x: pointer.x }, Step::ClaimDrag],
    )
}

fn on_move(state: GestureState, pointers: &[PointerSample], ctx: &TransitionContext) -> Transition {
    let Some(&gesture) = state.gesture() else {
        return Transition::ignored(state);
    };
    let Some(x) = find_x(pointers, gesture.pointer) else {
        warn!(pointer = gesture.pointer, "move without active pointer; ignoring");
        return Transition::ignored(state);
    };
    let thumb = gesture.thumb;
    match state {
        GestureState::Dragging(_) => {
            Transition::handled(state, vec![Step::Track { thumb, x }, Step::Notify(NotifyReason::DragMove)])
        }
        _ if (x - gesture.down_x).abs() > ctx.touch_slop => Transition::handled(
            GestureState::Dragging(gesture),
            vec![
                Step::Pressed(true),
                Step::Track { thumb, x },
                Step::ClaimDrag,
                Step::Notify(NotifyReason::DragMove),
            ],
        ),
        _ => Transition::handled(state, vec![Step::Notify(NotifyReason::DragMove)]),
    }
}

fn on_up(state: GestureState, pointer: PointerSample) -> Transition {
    let Some(&gesture) = state.gesture() else {
        return Transition::ignored(state);
    };
    if pointer.id != gesture.pointer {
        warn!(pointer = pointer.id, active = gesture.pointer, "up from stale pointer; dropping gesture");
        return Transition::handled(GestureState::Idle, vec![Step::Pressed(false)]);
    }
    let reason = if state.is_dragging() { NotifyReason::Released } else { NotifyReason::TapSeek };
    Transition::handled(
        GestureState::Idle,
        vec![Step::Track { thumb: gesture.thumb, x: pointer.x }, Step::Pressed(false), Step::Notify(reason)],
    )
}

fn on_secondary_down(state: GestureState, pointer: PointerSample) -> Transition {
    let Some(&gesture) = state.gesture() else {
        return Transition::ignored(state);
    };
    let retargeted = Gesture { pointer: pointer.id, down_x: pointer.x, ..gesture };
    Transition::handled(state.with_gesture(retargeted), Vec::new())
}

fn on_secondary_up(state: GestureState, lifted: PointerId, remaining: &[PointerSample]) -> Transition {
    let Some(&gesture) = state.gesture() else {
        return Transition::ignored(state);
    };
    if lifted != gesture.pointer {
        return Transition::handled(state, Vec::new());
    }
    let Some(next) = remaining.iter().find(|p| p.id != lifted) else {
        warn!(pointer = lifted, "active pointer lifted with no pointer left to follow");
        return Transition::handled(state, Vec::new());
    };
    let retargeted = Gesture { pointer: next.id, down_x: next.x, ..gesture };
    Transition::handled(state.with_gesture(retargeted), Vec::new())
}

fn on_cancel(state: GestureState) -> Transition {
    if state.is_idle() {
        return Transition::ignored(state);
    }
    Transition::handled(GestureState::Idle, vec![Step::Pressed(false)])
}

fn find_x(pointers: &[PointerSample], id: PointerId) -> Option<f64> {
    pointers.iter().find(|p| p.id == id).map(|p| p.x)
}
