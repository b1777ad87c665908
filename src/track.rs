#[cfg(test)]
#[path = "track_test.rs"]
mod track_test;

use crate::consts::{DEFAULT_INITIAL_PADDING_PX, DEFAULT_THUMB_WIDTH_PX};

/// Horizontal layout of the track inside the view.
///
/// The usable track starts `padding()` pixels from each edge, where padding is
/// the configured initial padding plus half a thumb, so a thumb at either end
/// stays fully inside the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub view_width: f64,
    pub thumb_half_width: f64,
    pub initial_padding: f64,
}

impl Default for TrackGeometry {
    fn default() -> Self {
        Self {
            view_width: 0.0,
            thumb_half_width: DEFAULT_THUMB_WIDTH_PX / 2.0,
            initial_padding: DEFAULT_INITIAL_PADDING_PX,
        }
    }
}

impl TrackGeometry {
    #[must_use]
    pub fn new(view_width: f64, thumb_width: f64, initial_padding: f64) -> Self {
        Self { view_width, thumb_half_width: thumb_width / 2.0, initial_padding }
    }

    /// Inset from each view edge to the track ends, in pixels.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.initial_padding + self.thumb_half_width
    }

    /// Length of the usable track in pixels. Zero or negative when the view is
    /// narrower than two paddings.
    #[must_use]
    pub fn track_length(&self) -> f64 {
        self.view_width - 2.0 * self.padding()
    }

    /// Convert a normalized position to a view x-coordinate.
    #[must_use]
    pub fn normalized_to_screen(&self, normalized: f64) -> f64 {
        self.padding() + normalized * self.track_length()
    }

    /// Convert a view x-coordinate to a normalized position clamped to `[0,1]`.
    /// Returns 0 when there is no usable track.
    #[must_use]
    pub fn screen_to_normalized(&self, x: f64) -> f64 {
        let length = self.track_length();
        if length <= 0.0 {
            return 0.0;
        }
        ((x - self.padding()) / length).clamp(0.0, 1.0)
    }
}
