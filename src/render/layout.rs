//! Bar layout: widths, gaps, heights and label sizing.

use serde::Serialize;

use crate::algorithms::Value;

/// Narrowest bar, in pixels.
pub const MIN_BAR_WIDTH: u32 = 16;

/// Widest bar, in pixels.
pub const MAX_BAR_WIDTH: u32 = 48;

/// Below this bar width labels shrink and the pivot badge abbreviates.
pub const COMPACT_WIDTH: u32 = 35;

/// Horizontal padding of the bar container (32 px per side).
pub const CONTAINER_PADDING: u32 = 64;

/// Tallest bar as a percentage of the container height.
const MAX_HEIGHT_PERCENT: f64 = 85.0;

/// Shortest bar, so zero values stay visible.
const MIN_HEIGHT_PERCENT: f64 = 3.0;

/// Width of each bar and the gap between neighbours, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BarDimensions {
    /// Bar width.
    pub width: u32,
    /// Gap between adjacent bars.
    pub gap: u32,
}

/// Gap between bars for an array of `len` elements.
#[must_use]
pub const fn gap_for(len: usize) -> u32 {
    if len <= 10 {
        8
    } else if len <= 20 {
        4
    } else {
        2
    }
}

/// Bar width and gap for `len` bars in a container `container_width` px wide.
///
/// `floor((container_width - (len - 1) * gap) / len)` clamped to
/// `MIN_BAR_WIDTH..=MAX_BAR_WIDTH`. An empty array is laid out as one bar.
#[must_use]
pub fn bar_dimensions(len: usize, container_width: u32) -> BarDimensions {
    let len = len.max(1);
    let gap = gap_for(len);

    let n = len as i64;
    let total_gap = (n - 1) * i64::from(gap);
    let raw = (i64::from(container_width) - total_gap).div_euclid(n);
    let width = raw.clamp(i64::from(MIN_BAR_WIDTH), i64::from(MAX_BAR_WIDTH)) as u32;

    BarDimensions { width, gap }
}

/// Bar height as a percentage of the container: `max(value / max * 85, 3)`.
#[must_use]
pub fn bar_height_percent(value: Value, max: Value) -> f64 {
    if max == 0 {
        return MIN_HEIGHT_PERCENT;
    }
    (f64::from(value) / f64::from(max) * MAX_HEIGHT_PERCENT).max(MIN_HEIGHT_PERCENT)
}

/// Value and index label size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSize {
    /// `text-xs`, for narrow bars.
    Small,
    /// `text-sm`.
    Regular,
}

/// Label size for bars `bar_width` px wide.
#[must_use]
pub const fn label_size(bar_width: u32) -> LabelSize {
    if bar_width < COMPACT_WIDTH {
        LabelSize::Small
    } else {
        LabelSize::Regular
    }
}

/// Usable width of a container whose client width is `client_width`.
#[must_use]
pub const fn container_width_from_client(client_width: u32) -> u32 {
    client_width.saturating_sub(CONTAINER_PADDING)
}
