//! Frame view-model: everything a front end needs to draw one state.

use serde::Serialize;

use crate::algorithms::{Action, AlgorithmId, AlgorithmState, Value};
use crate::color::ColorToken;
use crate::theme::Theme;

use super::layout::{bar_dimensions, bar_height_percent, label_size, BarDimensions, LabelSize};
use super::{decorator, COMPACT_WIDTH};

/// Caption shown when a state has no description.
pub const DEFAULT_CAPTION: &str = "Sorting in progress...";

/// Kind of index indicator drawn under a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    /// Outer loop index.
    I,
    /// Inner loop index.
    J,
    /// Selection sort's running minimum.
    Min,
    /// Quick sort's pivot.
    Pivot,
}

/// Index indicator drawn under a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// What the badge marks.
    pub kind: BadgeKind,
    /// Text inside the badge.
    pub label: &'static str,
    /// Badge fill.
    pub color: ColorToken,
}

impl Badge {
    fn new(kind: BadgeKind, bar_width: u32) -> Self {
        let (label, color) = match kind {
            BadgeKind::I => ("i", ColorToken::Blue600),
            BadgeKind::J => ("j", ColorToken::Amber600),
            BadgeKind::Min => ("min", ColorToken::Purple400),
            BadgeKind::Pivot if bar_width < COMPACT_WIDTH => ("P", ColorToken::Purple500),
            BadgeKind::Pivot => ("Pivot", ColorToken::Purple500),
        };
        Self { kind, label, color }
    }
}

/// One bar of a frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarView {
    /// Position in the array.
    pub index: usize,
    /// Value drawn inside the bar.
    pub value: Value,
    /// Height as a percentage of the container.
    pub height_percent: f64,
    /// Fill color.
    pub color: ColorToken,
    /// Value and index label size.
    pub label_size: LabelSize,
    /// Indicators under the bar, in drawing order.
    pub badges: Vec<Badge>,
}

/// Everything needed to draw one state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    /// Algorithm the frame is drawn for.
    pub algorithm: AlgorithmId,
    /// Theme the colors were picked for.
    pub theme: Theme,
    /// Action of the underlying state.
    pub action: Action,
    /// Bar width and gap.
    pub dimensions: BarDimensions,
    /// Bars, left to right.
    pub bars: Vec<BarView>,
    /// Key being inserted; only insertion sort shows it.
    pub key: Option<Value>,
    /// Caption above the bars.
    pub caption: String,
}

impl FrameView {
    /// Build the view of `state` for a container `container_width` px wide.
    #[must_use]
    pub fn build(
        state: &AlgorithmState,
        algorithm: AlgorithmId,
        theme: Theme,
        container_width: u32,
    ) -> Self {
        let dimensions = bar_dimensions(state.len(), container_width);
        let max = state.max_value();
        let decorator = decorator(algorithm);

        let bars = state
            .array
            .iter()
            .enumerate()
            .map(|(index, &value)| BarView {
                index,
                value,
                height_percent: bar_height_percent(value, max),
                color: decorator.color_for(state, index, theme),
                label_size: label_size(dimensions.width),
                badges: badges(state, index, algorithm, dimensions.width),
            })
            .collect();

        let caption = if state.description.is_empty() {
            DEFAULT_CAPTION.to_string()
        } else {
            state.description.clone()
        };

        Self {
            algorithm,
            theme,
            action: state.action,
            dimensions,
            bars,
            key: (algorithm == AlgorithmId::Insertion)
                .then_some(state.key)
                .flatten(),
            caption,
        }
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the frame has no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Badges under bar `index`: `i`, then `j`, then `min`, then the pivot.
fn badges(state: &AlgorithmState, index: usize, algorithm: AlgorithmId, width: u32) -> Vec<Badge> {
    let at = Some(index);
    let mut out = Vec::new();
    if state.i == at {
        out.push(Badge::new(BadgeKind::I, width));
    }
    if state.j == at {
        out.push(Badge::new(BadgeKind::J, width));
    }
    if state.min_index == at {
        out.push(Badge::new(BadgeKind::Min, width));
    }
    if algorithm == AlgorithmId::Quick && state.pivot_index == at {
        out.push(Badge::new(BadgeKind::Pivot, width));
    }
    out
}
