use super::*;

const SLOP: f64 = 8.0;

// =============================================================
// Helpers
// =============================================================

fn ctx(hit: Option<Thumb>) -> TransitionContext {
    TransitionContext { down_hit: hit, touch_slop: SLOP }
}

fn no_hit() -> TransitionContext {
    ctx(None)
}

fn gesture(thumb: Thumb, pointer: PointerId, down_x: f64) -> Gesture {
    Gesture { thumb, pointer, down_x }
}

fn armed(thumb: Thumb, pointer: PointerId, down_x: f64) -> GestureState {
    GestureState::Armed(gesture(thumb, pointer, down_x))
}

fn dragging(thumb: Thumb, pointer: PointerId, down_x: f64) -> GestureState {
    GestureState::Dragging(gesture(thumb, pointer, down_x))
}

fn p(id: PointerId, x: f64) -> PointerSample {
    PointerSample::new(id, x)
}

fn move_to(id: PointerId, x: f64) -> PointerEvent {
    PointerEvent::Move { pointers: vec![p(id, x)] }
}

fn has_notify(t: &Transition) -> bool {
    t.steps.iter().any(|s| matches!(s, Step::Notify(_)))
}

fn tracks(t: &Transition) -> Vec<(Thumb, f64)> {
    t.steps
        .iter()
        .filter_map(|s| match s {
            Step::Track { thumb, x } => Some((*thumb, *x)),
            _ => None,
        })
        .collect()
}

// =============================================================
// GestureState
// =============================================================

#[test]
fn state_default_is_idle() {
    let s = GestureState::default();
    assert!(s.is_idle());
    assert!(s.pressed_thumb().is_none());
    assert!(!s.is_dragging());
}

#[test]
fn state_pressed_thumb_in_active_states() {
    assert_eq!(armed(Thumb::Min, 0, 1.0).pressed_thumb(), Some(Thumb::Min));
    assert_eq!(dragging(Thumb::Max, 0, 1.0).pressed_thumb(), Some(Thumb::Max));
    assert!(dragging(Thumb::Max, 0, 1.0).is_dragging());
    assert!(!armed(Thumb::Max, 0, 1.0).is_dragging());
}

// =============================================================
// Down
// =============================================================

#[test]
fn down_without_hit_is_not_handled() {
    let t = transition(GestureState::Idle, &PointerEvent::Down { pointer: p(0, 100.0) }, &no_hit());
    assert!(!t.handled);
    assert_eq!(t.next, GestureState::Idle);
    assert!(t.steps.is_empty());
}

#[test]
fn down_on_thumb_arms_and_seeks() {
    let down = PointerEvent::Down { pointer: p(3, 15.0) };
    let t = transition(GestureState::Idle, &down, &ctx(Some(Thumb::Min)));
    assert!(t.handled);
    assert_eq!(t.next, armed(Thumb::Min, 3, 15.0));
    assert_eq!(
        t.steps,
        vec![Step::Pressed(true), Step::Track { thumb: Thumb::Min, x: 15.0 }, Step::ClaimDrag]
    );
}

#[test]
fn down_missing_thumbs_mid_gesture_releases_press() {
    let down = PointerEvent::Down { pointer: p(2, 100.0) };
    let t = transition(armed(Thumb::Max, 1, 200.0), &down, &no_hit());
    assert!(t.handled);
    assert_eq!(t.next, GestureState::Idle);
    assert_eq!(t.steps, vec![Step::Pressed(false)]);
    assert!(!has_notify(&t));
}

#[test]
fn down_replaces_leftover_gesture() {
    let down = PointerEvent::Down { pointer: p(2, 200.0) };
    let t = transition(dragging(Thumb::Min, 1, 0.0), &down, &ctx(Some(Thumb::Max)));
    assert_eq!(t.next, armed(Thumb::Max, 2, 200.0));
}

// =============================================================
// Move
// =============================================================

#[test]
fn move_while_idle_is_not_handled() {
    let t = transition(GestureState::Idle, &move_to(0, 50.0), &no_hit());
    assert!(!t.handled);
    assert_eq!(t.next, GestureState::Idle);
}

#[test]
fn move_within_slop_stays_armed() {
    let state = armed(Thumb::Min, 0, 100.0);
    let t = transition(state, &move_to(0, 105.0), &no_hit());
    assert!(t.handled);
    assert_eq!(t.next, state);
    assert!(tracks(&t).is_empty());
    assert_eq!(t.steps, vec![Step::Notify(NotifyReason::DragMove)]);
}

#[test]
fn move_exactly_at_slop_stays_armed() {
    let state = armed(Thumb::Min, 0, 100.0);
    let t = transition(state, &move_to(0, 100.0 - SLOP), &no_hit());
    assert_eq!(t.next, state);
}

#[test]
fn move_past_slop_starts_drag() {
    let state = armed(Thumb::Max, 0, 100.0);
    let t = transition(state, &move_to(0, 120.0), &no_hit());
    assert_eq!(t.next, dragging(Thumb::Max, 0, 100.0));
    assert_eq!(tracks(&t), vec![(Thumb::Max, 120.0)]);
    assert!(t.steps.contains(&Step::ClaimDrag));
    assert!(t.steps.contains(&Step::Notify(NotifyReason::DragMove)));
}

#[test]
fn move_past_slop_leftward_starts_drag() {
    let t = transition(armed(Thumb::Min, 0, 100.0), &move_to(0, 80.0), &no_hit());
    assert!(t.next.is_dragging());
}

#[test]
fn move_while_dragging_tracks_every_event() {
    let state = dragging(Thumb::Min, 0, 100.0);
    let t = transition(state, &move_to(0, 101.0), &no_hit());
    assert_eq!(t.next, state);
    assert_eq!(tracks(&t), vec![(Thumb::Min, 101.0)]);
    assert_eq!(t.steps.last(), Some(&Step::Notify(NotifyReason::DragMove)));
}

#[test]
fn move_follows_active_pointer_among_several() {
    let state = dragging(Thumb::Min, 7, 100.0);
    let event = PointerEvent::Move { pointers: vec![p(2, 10.0), p(7, 150.0)] };
    let t = transition(state, &event, &no_hit());
    assert_eq!(tracks(&t), vec![(Thumb::Min, 150.0)]);
}

#[test]
fn move_without_active_pointer_is_ignored() {
    let state = dragging(Thumb::Min, 7, 100.0);
    let t = transition(state, &move_to(9, 150.0), &no_hit());
    assert!(!t.handled);
    assert_eq!(t.next, state);
    assert!(t.steps.is_empty());
}

// =============================================================
// Up
// =============================================================

#[test]
fn up_after_drag_tracks_and_releases() {
    let t = transition(dragging(Thumb::Max, 0, 100.0), &PointerEvent::Up { pointer: p(0, 140.0) }, &no_hit());
    assert!(t.handled);
    assert_eq!(t.next, GestureState::Idle);
    assert_eq!(tracks(&t), vec![(Thumb::Max, 140.0)]);
    assert!(t.steps.contains(&Step::Pressed(false)));
    assert!(t.steps.contains(&Step::Notify(NotifyReason::Released)));
}

#[test]
fn up_without_drag_is_tap_seek() {
    let t = transition(armed(Thumb::Min, 0, 100.0), &PointerEvent::Up { pointer: p(0, 103.0) }, &no_hit());
    assert_eq!(t.next, GestureState::Idle);
    assert_eq!(tracks(&t), vec![(Thumb::Min, 103.0)]);
    assert!(t.steps.contains(&Step::Notify(NotifyReason::TapSeek)));
}

#[test]
fn up_while_idle_is_not_handled() {
    let t = transition(GestureState::Idle, &PointerEvent::Up { pointer: p(0, 10.0) }, &no_hit());
    assert!(!t.handled);
    assert!(t.steps.is_empty());
}

#[test]
fn up_from_stale_pointer_drops_gesture_silently() {
    let t = transition(dragging(Thumb::Min, 4, 100.0), &PointerEvent::Up { pointer: p(5, 10.0) }, &no_hit());
    assert_eq!(t.next, GestureState::Idle);
    assert!(tracks(&t).is_empty());
    assert!(!has_notify(&t));
    assert_eq!(t.steps, vec![Step::Pressed(false)]);
}

// =============================================================
// Secondary pointers
// =============================================================

#[test]
fn secondary_down_retargets_active_pointer() {
    let event = PointerEvent::SecondaryDown { pointer: p(1, 60.0) };
    let t = transition(dragging(Thumb::Min, 0, 100.0), &event, &no_hit());
    assert!(t.handled);
    assert_eq!(t.next, dragging(Thumb::Min, 1, 60.0));
    assert!(t.steps.is_empty());
}

#[test]
fn secondary_down_while_idle_is_not_handled() {
    let t = transition(GestureState::Idle, &PointerEvent::SecondaryDown { pointer: p(1, 60.0) }, &no_hit());
    assert!(!t.handled);
}

#[test]
fn secondary_up_of_active_pointer_retargets_remaining() {
    let event = PointerEvent::SecondaryUp { lifted: 0, remaining: vec![p(1, 75.0)] };
    let t = transition(armed(Thumb::Max, 0, 100.0), &event, &no_hit());
    assert!(t.handled);
    assert_eq!(t.next, armed(Thumb::Max, 1, 75.0));
}

#[test]
fn secondary_up_skips_lifted_pointer_in_remaining() {
    let event = PointerEvent::SecondaryUp { lifted: 0, remaining: vec![p(0, 100.0), p(1, 75.0)] };
    let t = transition(dragging(Thumb::Max, 0, 100.0), &event, &no_hit());
    assert_eq!(t.next, dragging(Thumb::Max, 1, 75.0));
}

#[test]
fn secondary_up_of_other_pointer_keeps_target() {
    let state = dragging(Thumb::Min, 0, 100.0);
    let event = PointerEvent::SecondaryUp { lifted: 1, remaining: vec![p(0, 110.0)] };
    let t = transition(state, &event, &no_hit());
    assert!(t.handled);
    assert_eq!(t.next, state);
}

#[test]
fn secondary_up_with_nothing_left_keeps_state() {
    let state = dragging(Thumb::Min, 0, 100.0);
    let event = PointerEvent::SecondaryUp { lifted: 0, remaining: vec![] };
    let t = transition(state, &event, &no_hit());
    assert_eq!(t.next, state);
}

#[test]
fn secondary_up_never_ends_gesture() {
    let event = PointerEvent::SecondaryUp { lifted: 0, remaining: vec![p(1, 75.0)] };
    let t = transition(dragging(Thumb::Min, 0, 100.0), &event, &no_hit());
    assert!(!t.next.is_idle());
    assert!(!has_notify(&t));
}

// =============================================================
// Cancel
// =============================================================

#[test]
fn cancel_while_dragging_returns_idle_without_notify() {
    let t = transition(dragging(Thumb::Min, 0, 100.0), &PointerEvent::Cancel, &no_hit());
    assert!(t.handled);
    assert_eq!(t.next, GestureState::Idle);
    assert!(!has_notify(&t));
    assert!(tracks(&t).is_empty());
}

#[test]
fn cancel_while_armed_returns_idle() {
    let t = transition(armed(Thumb::Max, 0, 100.0), &PointerEvent::Cancel, &no_hit());
    assert_eq!(t.next, GestureState::Idle);
    assert_eq!(t.steps, vec![Step::Pressed(false)]);
}

#[test]
fn cancel_while_idle_is_not_handled() {
    let t = transition(GestureState::Idle, &PointerEvent::Cancel, &no_hit());
    assert!(!t.handled);
}
