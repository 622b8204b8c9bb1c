//! 3D rendering eligibility gate and auto-adjust.
//!
//! The 3D view only handles short arrays of small values. An array outside
//! those limits is never rejected outright: the caller gets a warning and the
//! option to adjust the array into range.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::algorithms::Value;

/// Warning shown when a 3D request is refused with the default limits.
pub const REQUIREMENTS_WARNING: &str =
    "3D visualization requires array length ≤ 10 and values ≤ 20";

/// Limits an array must satisfy to be drawn in 3D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mode3dLimits {
    /// Longest array.
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Largest value.
    #[serde(default = "default_max_value")]
    pub max_value: Value,

    /// Auto-adjust replaces an oversized value with
    /// `max_value - random(0..=max_reduction)`.
    #[serde(default = "default_max_reduction")]
    pub max_reduction: Value,
}

fn default_max_length() -> usize {
    10
}
fn default_max_value() -> Value {
    20
}
fn default_max_reduction() -> Value {
    5
}

impl Default for Mode3dLimits {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            max_value: default_max_value(),
            max_reduction: default_max_reduction(),
        }
    }
}

impl Mode3dLimits {
    /// Whether `array` can be drawn in 3D.
    #[must_use]
    pub fn is_eligible(&self, array: &[Value]) -> bool {
        array.len() <= self.max_length && array.iter().all(|&v| v <= self.max_value)
    }

    /// Bring `array` within the limits.
    ///
    /// Keeps the first `max_length` elements and replaces every value above
    /// `max_value` with `max_value - random(0..=max_reduction)`. Values already
    /// in range are kept as they are.
    pub fn auto_adjust<R: Rng + ?Sized>(&self, array: &[Value], rng: &mut R) -> Vec<Value> {
        array
            .iter()
            .take(self.max_length)
            .map(|&v| {
                if v > self.max_value {
                    self.max_value
                        .saturating_sub(rng.gen_range(0..=self.max_reduction))
                } else {
                    v
                }
            })
            .collect()
    }

    /// Warning text describing these limits.
    #[must_use]
    pub fn requirements_message(&self) -> String {
        format!(
            "3D visualization requires array length ≤ {} and values ≤ {}",
            self.max_length, self.max_value
        )
    }
}

/// Whether `array` can be drawn in 3D under the default limits.
#[must_use]
pub fn is_eligible(array: &[Value]) -> bool {
    Mode3dLimits::default().is_eligible(array)
}

/// Adjust `array` for 3D under the default limits.
pub fn auto_adjust<R: Rng + ?Sized>(array: &[Value], rng: &mut R) -> Vec<Value> {
    Mode3dLimits::default().auto_adjust(array, rng)
}
