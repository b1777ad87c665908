#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::OVERLAP_SPLIT;
use crate::model::{Thumb, ValueModel};
use crate::track::TrackGeometry;

/// Whether `touch_x` lies within half a thumb of the thumb drawn at `normalized`.
#[must_use]
pub fn is_in_thumb_range(touch_x: f64, normalized: f64, track: &TrackGeometry) -> bool {
    (touch_x - track.normalized_to_screen(normalized)).abs() <= track.thumb_half_width
}

/// Which thumb (if any) is under `touch_x`.
///
/// When the thumbs overlap and both are hit, a touch in the right half of the
/// view picks `Min` and one in the left half picks `Max`, so the chosen thumb
/// always has room to move away from the other.
#[must_use]
pub fn hit_test(touch_x: f64, model: &ValueModel, track: &TrackGeometry) -> Option<Thumb> {
    let min_hit = is_in_thumb_range(touch_x, model.normalized_min(), track);
    let max_hit = is_in_thumb_range(touch_x, model.normalized_max(), track);
    match (min_hit, max_hit) {
        (true, true) => Some(resolve_overlap(touch_x, track.view_width)),
        (true, false) => Some(Thumb::Min),
        (false, true) => Some(Thumb::Max),
        (false, false) => None,
    }
}

fn resolve_overlap(touch_x: f64, view_width: f64) -> Thumb {
    if view_width > 0.0 && touch_x / view_width > OVERLAP_SPLIT { Thumb::Min } else { Thumb::Max }
}
