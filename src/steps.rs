//! Discrete snap points for the quantized selection mode.
//!
//! The list is dense near the bottom of each decade and sparser toward its top:
//! inside `[10^d, 2·10^d)` values advance by `10^(d-1)`, inside `[2·10^d, 4·10^d)`
//! by `2·10^(d-1)` and above that by `5·10^(d-1)`. Single-digit values advance by
//! one. The same shape is produced for `(1, 100)` and `(10_000, 5_000_000)`.
//!
//! All arithmetic is on `i64` and saturates rather than overflowing.

#[cfg(test)]
#[path = "steps_test.rs"]
mod steps_test;

/// Number of decimal digits in `n`, ignoring sign. `digit_count(0) == 1`.
#[must_use]
pub fn digit_count(n: i64) -> u32 {
    n.unsigned_abs().checked_ilog10().map_or(1, |d| d + 1)
}

/// `10^(digit_count(n) - 1)`: the place value of the leading digit.
#[must_use]
pub fn leading_power(n: i64) -> i64 {
    10_i64.pow(digit_count(n) - 1)
}

/// Lower end of the list: values below 10 pass through, anything else is
/// floored to its leading digit (`523 → 500`).
#[must_use]
pub fn rounded_min(min: i64) -> i64 {
    if min < 10 {
        return min;
    }
    let power = leading_power(min);
    min / power * power
}

/// Upper end of the list: `max` ceiled to its leading digit (`523 → 600`,
/// `100 → 100`).
#[must_use]
pub fn rounded_max(max: i64) -> i64 {
    let power = leading_power(max);
    let quotient = max / power;
    let quotient = if max % power != 0 && max > 0 { quotient + 1 } else { quotient };
    quotient.saturating_mul(power)
}

/// Distance from `i` to the next snap point.
#[must_use]
pub fn step_size(i: i64) -> i64 {
    let step_min = leading_power(i);
    if step_min <= 1 {
        1
    } else if (step_min..2 * step_min).contains(&i) {
        step_min / 10
    } else if (2 * step_min..4 * step_min).contains(&i) {
        step_min / 10 * 2
    } else {
        step_min / 10 * 5
    }
}

/// Snap points between the rounded ends of `[min, max]`, strictly increasing.
///
/// Never empty: the rounded minimum is always the first entry. The last entry
/// is at least `max`, also for negative ranges where the rounded maximum can
/// fall off the step grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepList {
    values: Vec<i64>,
}

impl StepList {
    /// Walk from `rounded_min(min)` up to `rounded_max(max)` inclusive, taking
    /// one more step past it if the walk has not yet reached `max`.
    #[must_use]
    pub fn generate(min: i64, max: i64) -> Self {
        let upper = rounded_max(max);
        let mut i = rounded_min(min);
        let mut values = vec![i];
        while i < upper || i < max {
            let next = i.saturating_add(step_size(i));
            if next > upper && i >= max {
                break;
            }
            values.push(next);
            i = next;
        }
        Self { values }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> i64 {
        self.values[0]
    }

    #[must_use]
    pub fn last(&self) -> i64 {
        self.values[self.values.len() - 1]
    }

    /// Entry nearest to `target`. Ties go to the earlier (lower) entry.
    #[must_use]
    pub fn closest(&self, target: i64) -> i64 {
        closest_value(&self.values, target).unwrap_or(target)
    }
}

/// Entry of `list` nearest to `target`, scanning left to right and replacing
/// the best only on a strictly smaller distance. `None` for an empty list.
#[must_use]
pub fn closest_value(list: &[i64], target: i64) -> Option<i64> {
    let (&first, rest) = list.split_first()?;
    let mut best = first;
    let mut best_diff = first.abs_diff(target);
    for &candidate in rest {
        let diff = candidate.abs_diff(target);
        if diff < best_diff {
            best = candidate;
            best_diff = diff;
        }
    }
    Some(best)
}
