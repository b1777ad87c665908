//! Value model: absolute bounds, the two normalized thumb positions, and the
//! conversions between them.
//!
//! Both positions live in one struct so every mutator can re-clamp the pair
//! together; `0 <= normalized_min <= normalized_max <= 1` holds after every
//! call. A degenerate range (`min == max`) never divides by zero: values
//! normalize to 0 and the selection collapses to the full track.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAXIMUM, DEFAULT_MINIMUM, VALUE_DECIMAL_PLACES};
use crate::error::{Result, SeekBarError};
use crate::number::{NumberKind, RangeValue};
use crate::steps::StepList;

/// One of the two draggable handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thumb {
    Min,
    Max,
}

/// How selected values are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueMode {
    /// Any value in the range, rounded to two decimals.
    #[default]
    Linear,
    /// Values snapped to the nearest entry of the step list.
    Discrete,
}

#[derive(Debug, Clone)]
pub struct ValueModel {
    absolute_min: RangeValue,
    absolute_max: RangeValue,
    kind: NumberKind,
    min_prim: f64,
    max_prim: f64,
    normalized_min: f64,
    normalized_max: f64,
    steps: StepList,
}

impl Default for ValueModel {
    fn default() -> Self {
        let min = RangeValue::Int(DEFAULT_MINIMUM);
        let max = RangeValue::Int(DEFAULT_MAXIMUM);
        Self {
            kind: min.kind(),
            min_prim: min.to_f64(),
            max_prim: max.to_f64(),
            steps: StepList::generate(min.to_i64(), max.to_i64()),
            normalized_min: 0.0,
            normalized_max: 1.0,
            absolute_min: min,
            absolute_max: max,
        }
    }
}

impl ValueModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Model over `[min, max]` with the full range selected.
    pub fn with_range(min: RangeValue, max: RangeValue) -> Result<Self> {
        let mut model = Self::default();
        model.set_range_values(min, max)?;
        Ok(model)
    }

    // --- Range ---

    /// Replace the absolute bounds, rebuild the step list and select the
    /// full range. The number kind follows `min`.
    pub fn set_range_values(&mut self, min: RangeValue, max: RangeValue) -> Result<()> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SeekBarError::NonFiniteBound);
        }
        self.kind = min.kind();
        self.min_prim = min.to_f64();
        self.max_prim = max.to_f64();
        self.steps = StepList::generate(min.to_i64(), max.to_i64());
        self.absolute_min = min;
        self.absolute_max = max;
        self.normalized_min = 0.0;
        self.normalized_max = 1.0;
        Ok(())
    }

    #[must_use]
    pub fn absolute_min(&self) -> RangeValue {
        self.absolute_min.clone()
    }

    #[must_use]
    pub fn absolute_max(&self) -> RangeValue {
        self.absolute_max.clone()
    }

    #[must_use]
    pub fn number_kind(&self) -> NumberKind {
        self.kind
    }

    #[must_use]
    pub fn steps(&self) -> &StepList {
        &self.steps
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    fn span(&self) -> f64 {
        self.max_prim - self.min_prim
    }

    // --- Conversions ---

    /// Position of `value` in `[0,1]` space. Not clamped; 0 for a degenerate range.
    #[must_use]
    pub fn value_to_normalized(&self, value: RangeValue) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        (value.to_f64() - self.min_prim) / self.span()
    }

    /// Value at `normalized`, rounded half-up to two decimals and cast to the
    /// range's number kind.
    #[must_use]
    pub fn normalized_to_value(&self, normalized: f64) -> RangeValue {
        let v = self.min_prim + normalized * self.span();
        self.kind.cast(round_half_up(v))
    }

    // --- Normalized positions ---

    #[must_use]
    pub fn normalized_min(&self) -> f64 {
        self.normalized_min
    }

    #[must_use]
    pub fn normalized_max(&self) -> f64 {
        self.normalized_max
    }

    #[must_use]
    pub fn normalized(&self, thumb: Thumb) -> f64 {
        match thumb {
            Thumb::Min => self.normalized_min,
            Thumb::Max => self.normalized_max,
        }
    }

    /// Clamp `value` to `[0, normalized_max]` and store it. NaN collapses onto
    /// the max thumb.
    pub fn set_normalized_min(&mut self, value: f64) {
        self.normalized_min = 0f64.max(1f64.min(value.min(self.normalized_max)));
    }

    /// Clamp `value` to `[normalized_min, 1]` and store it. NaN collapses onto
    /// the min thumb.
    pub fn set_normalized_max(&mut self, value: f64) {
        self.normalized_max = 0f64.max(1f64.min(value.max(self.normalized_min)));
    }

    pub fn set_normalized(&mut self, thumb: Thumb, value: f64) {
        match thumb {
            Thumb::Min => self.set_normalized_min(value),
            Thumb::Max => self.set_normalized_max(value),
        }
    }

    /// Overwrite both positions at once, re-establishing the ordering.
    pub fn restore_normalized(&mut self, min: f64, max: f64) {
        self.normalized_min = 0.0;
        self.normalized_max = 1.0;
        self.set_normalized_min(min);
        self.set_normalized_max(max);
    }

    // --- Selected values ---

    pub fn set_selected_min(&mut self, value: RangeValue) {
        if self.is_degenerate() {
            self.set_normalized_min(0.0);
        } else {
            self.set_normalized_min(self.value_to_normalized(value));
        }
    }

    pub fn set_selected_max(&mut self, value: RangeValue) {
        if self.is_degenerate() {
            self.set_normalized_max(1.0);
        } else {
            self.set_normalized_max(self.value_to_normalized(value));
        }
    }

    pub fn set_selected(&mut self, thumb: Thumb, value: RangeValue) {
        match thumb {
            Thumb::Min => self.set_selected_min(value),
            Thumb::Max => self.set_selected_max(value),
        }
    }

    /// Linear selected min. Never mutates.
    #[must_use]
    pub fn selected_min(&self) -> RangeValue {
        self.normalized_to_value(self.normalized_min)
    }

    /// Linear selected max. Never mutates.
    #[must_use]
    pub fn selected_max(&self) -> RangeValue {
        self.normalized_to_value(self.normalized_max)
    }

    #[must_use]
    pub fn selected_linear(&self, thumb: Thumb) -> RangeValue {
        self.normalized_to_value(self.normalized(thumb))
    }

    /// Move `thumb` onto the step nearest its current linear value and return
    /// that step in the range's number kind.
    #[allow(clippy::cast_precision_loss)]
    pub fn snap_to_discrete(&mut self, thumb: Thumb) -> RangeValue {
        let current = self.selected_linear(thumb).to_i64();
        let snapped = self.steps.closest(current);
        let snapped = self.kind.cast(snapped as f64);
        self.set_selected(thumb, snapped.clone());
        snapped
    }

    pub fn snap_min_to_discrete(&mut self) -> RangeValue {
        self.snap_to_discrete(Thumb::Min)
    }

    pub fn snap_max_to_discrete(&mut self) -> RangeValue {
        self.snap_to_discrete(Thumb::Max)
    }

    /// Selected value for `thumb` as seen in `mode`. Discrete mode snaps the
    /// thumb first, hence `&mut self`.
    pub fn selected(&mut self, thumb: Thumb, mode: ValueMode) -> RangeValue {
        match mode {
            ValueMode::Linear => self.selected_linear(thumb),
            ValueMode::Discrete => self.snap_to_discrete(thumb),
        }
    }

    /// Select the full range again.
    pub fn reset_selected_values(&mut self) {
        self.set_selected_min(self.absolute_min());
        self.set_selected_max(self.absolute_max());
    }
}

/// Round half-up to [`VALUE_DECIMAL_PLACES`] decimals.
fn round_half_up(v: f64) -> f64 {
    let factor = 10f64.powi(VALUE_DECIMAL_PLACES);
    (v * factor + 0.5).floor() / factor
}
