//! State rendering: decorators, layout and frame view-models.
//!
//! Everything in this module is a pure function of a borrowed state, the
//! algorithm identity and the theme. Nothing here mutates a state or keeps
//! one alive past the call.
//!
//! # Decision tables
//!
//! Each algorithm has its own [`Decorator`]. The order of the checks inside a
//! decorator is part of its contract: overlapping conditions (a pivot that is
//! also being compared, a finalized index inside the active subrange) resolve
//! to whichever check comes first.

mod decorators;
mod frame;
mod layout;

pub use decorators::{BubbleDecorator, InsertionDecorator, QuickDecorator, SelectionDecorator};
pub use frame::{Badge, BadgeKind, BarView, FrameView, DEFAULT_CAPTION};
pub use layout::{
    bar_dimensions, bar_height_percent, container_width_from_client, gap_for, label_size,
    BarDimensions, LabelSize, COMPACT_WIDTH, CONTAINER_PADDING, MAX_BAR_WIDTH, MIN_BAR_WIDTH,
};

use crate::algorithms::{AlgorithmId, AlgorithmState};
use crate::color::ColorToken;
use crate::theme::Theme;

/// Per-algorithm color decision table.
pub trait Decorator {
    /// Algorithm whose states this decorator understands.
    fn algorithm(&self) -> AlgorithmId;

    /// Color of bar `index` in `state`.
    ///
    /// Total over `0..state.array.len()`. States produced by another
    /// algorithm get the theme's default color.
    fn color_for(&self, state: &AlgorithmState, index: usize, theme: Theme) -> ColorToken;
}

/// The decorator registered for `algorithm`.
#[must_use]
pub fn decorator(algorithm: AlgorithmId) -> &'static dyn Decorator {
    match algorithm {
        AlgorithmId::Bubble => &BubbleDecorator,
        AlgorithmId::Selection => &SelectionDecorator,
        AlgorithmId::Insertion => &InsertionDecorator,
        AlgorithmId::Quick => &QuickDecorator,
    }
}

/// Color of bar `index` in `state` as drawn for `algorithm` under `theme`.
#[must_use]
pub fn color_for(
    state: &AlgorithmState,
    index: usize,
    algorithm: AlgorithmId,
    theme: Theme,
) -> ColorToken {
    decorator(algorithm).color_for(state, index, theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::generate;

    #[test]
    fn test_decorator_registry_matches_ids() {
        for algorithm in AlgorithmId::ALL {
            assert_eq!(decorator(algorithm).algorithm(), algorithm);
        }
    }

    #[test]
    fn test_color_for_is_total_over_every_state() {
        let input = [6, 2, 9, 2, 4, 1, 8];
        for algorithm in AlgorithmId::ALL {
            for state in generate(algorithm, &input) {
                for index in 0..state.array.len() {
                    for theme in [Theme::Light, Theme::Dark] {
                        let _ = color_for(&state, index, algorithm, theme);
                    }
                }
            }
        }
    }

    #[test]
    fn test_complete_state_is_all_green() {
        let input = [3, 1, 2];
        for algorithm in AlgorithmId::ALL {
            let states = generate(algorithm, &input);
            let last = states.last().unwrap();
            for index in 0..input.len() {
                assert_eq!(
                    color_for(last, index, algorithm, Theme::Dark),
                    ColorToken::Green500,
                    "{algorithm} index {index}"
                );
            }
        }
    }

    #[test]
    fn test_foreign_state_falls_back_to_default() {
        let states = generate(AlgorithmId::Quick, &[2, 1, 3]);
        let state = &states[1];
        assert_eq!(
            color_for(state, 0, AlgorithmId::Insertion, Theme::Light),
            Theme::Light.default_bar()
        );
    }
}
