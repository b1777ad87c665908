//! Host-supplied configuration, parsed from JSON.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_INITIAL_PADDING_PX, DEFAULT_THUMB_HEIGHT_PX, DEFAULT_THUMB_WIDTH_PX, DEFAULT_TOUCH_SLOP_PX,
};
use crate::error::{Result, SeekBarError};
use crate::model::ValueMode;
use crate::number::RangeValue;

/// Range bounds in textual form, e.g. `{ "kind": "i64", "min": "500", "max": "50000" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundsConfig {
    pub kind: String,
    pub min: String,
    pub max: String,
}

impl BoundsConfig {
    /// Parse both bounds with the configured kind.
    pub fn parse(&self) -> Result<(RangeValue, RangeValue)> {
        Ok((RangeValue::parse(&self.kind, &self.min)?, RangeValue::parse(&self.kind, &self.max)?))
    }
}

/// Every knob of a [`crate::engine::RangeSeekBar`]. Missing JSON fields take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekBarConfig {
    /// Absolute bounds; `None` keeps the default `0..100` integer range.
    pub bounds: Option<BoundsConfig>,
    /// Thumb width in pixels; half of it is the hit radius and track inset.
    pub thumb_width: f64,
    /// Thumb height in pixels. Only validated here; layout belongs to the host.
    pub thumb_height: f64,
    /// Extra inset on both track ends, in pixels.
    pub initial_padding: f64,
    /// Pointer travel in pixels before a press becomes a drag.
    pub touch_slop: f64,
    pub notify_while_dragging: bool,
    pub value_mode: ValueMode,
    pub enabled: bool,
}

impl Default for SeekBarConfig {
    fn default() -> Self {
        Self {
            bounds: None,
            thumb_width: DEFAULT_THUMB_WIDTH_PX,
            thumb_height: DEFAULT_THUMB_HEIGHT_PX,
            initial_padding: DEFAULT_INITIAL_PADDING_PX,
            touch_slop: DEFAULT_TOUCH_SLOP_PX,
            notify_while_dragging: false,
            value_mode: ValueMode::Linear,
            enabled: true,
        }
    }
}

impl SeekBarConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| SeekBarError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that geometry is usable and textual bounds parse.
    pub fn validate(&self) -> Result<()> {
        let thumb_ok = |v: f64| v.is_finite() && v > 0.0;
        if !thumb_ok(self.thumb_width) || !thumb_ok(self.thumb_height) {
            return Err(SeekBarError::InvalidThumbAsset {
                width: self.thumb_width,
                height: self.thumb_height,
            });
        }
        if !self.initial_padding.is_finite() || self.initial_padding < 0.0 {
            return Err(SeekBarError::InvalidConfig(format!(
                "initial_padding must be >= 0, got {}",
                self.initial_padding
            )));
        }
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(SeekBarError::InvalidConfig(format!(
                "touch_slop must be >= 0, got {}",
                self.touch_slop
            )));
        }
        if let Some(bounds) = &self.bounds {
            bounds.parse()?;
        }
        Ok(())
    }
}
