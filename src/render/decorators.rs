//! Per-algorithm color decorators.

use crate::algorithms::{
    Action, AlgorithmId, AlgorithmState, BubbleAction, InsertionAction, QuickAction,
    SelectionAction,
};
use crate::color::ColorToken;
use crate::theme::Theme;

use super::Decorator;

/// Bubble sort colors.
///
/// 1. `Complete`, or index in `completed_bars`: green.
/// 2. Index `j` or `j + 1`: red after a swap, yellow otherwise.
/// 3. `EarlyStop`: light green wash.
/// 4. Blue, on either theme.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleDecorator;

impl Decorator for BubbleDecorator {
    fn algorithm(&self) -> AlgorithmId {
        AlgorithmId::Bubble
    }

    fn color_for(&self, state: &AlgorithmState, index: usize, theme: Theme) -> ColorToken {
        let Action::Bubble(action) = state.action else {
            return theme.default_bar();
        };

        if action == BubbleAction::Complete || state.completed_bars.contains(&index) {
            return ColorToken::Green500;
        }

        if state.j.is_some_and(|j| index == j || index == j + 1) {
            return match action {
                BubbleAction::Swap => ColorToken::Red600,
                BubbleAction::Start
                | BubbleAction::Compare
                | BubbleAction::EarlyStop
                | BubbleAction::Complete => ColorToken::Yellow400,
            };
        }

        match action {
            BubbleAction::EarlyStop => ColorToken::Green300,
            BubbleAction::Start
            | BubbleAction::Compare
            | BubbleAction::Swap
            | BubbleAction::Complete => ColorToken::Blue500,
        }
    }
}

/// Selection sort colors.
///
/// 1. `Complete`: green.
/// 2. Index `i`: blue.
/// 3. Index `min_index`: yellow.
/// 4. `Swap` on `i` or `min_index`: red.
/// 5. Index `<= i`: green.
/// 6. Theme default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionDecorator;

impl Decorator for SelectionDecorator {
    fn algorithm(&self) -> AlgorithmId {
        AlgorithmId::Selection
    }

    fn color_for(&self, state: &AlgorithmState, index: usize, theme: Theme) -> ColorToken {
        let Action::Selection(action) = state.action else {
            return theme.default_bar();
        };

        if action == SelectionAction::Complete {
            return ColorToken::Green500;
        }
        if state.i == Some(index) {
            return ColorToken::Blue500;
        }
        if state.min_index == Some(index) {
            return ColorToken::Yellow500;
        }

        let swapping = match action {
            SelectionAction::Swap => true,
            SelectionAction::Start
            | SelectionAction::Compare
            | SelectionAction::SectionSorted
            | SelectionAction::Complete => false,
        };
        // shadowed by rules 2 and 3; the web front end orders them the same way
        if swapping && (state.i == Some(index) || state.min_index == Some(index)) {
            return ColorToken::Red500;
        }

        if state.i.is_some_and(|i| index <= i) {
            return ColorToken::Green500;
        }

        theme.default_bar()
    }
}

/// Insertion sort colors.
///
/// 1. `Shift` and `j < index <= i`: rose.
/// 2. `SectionSorted` and `index <= i`, or `Complete`: green.
/// 3. Index `i` (the key's origin): amber.
/// 4. Index `j`: sky.
/// 5. Theme default.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionDecorator;

impl Decorator for InsertionDecorator {
    fn algorithm(&self) -> AlgorithmId {
        AlgorithmId::Insertion
    }

    fn color_for(&self, state: &AlgorithmState, index: usize, theme: Theme) -> ColorToken {
        let Action::Insertion(action) = state.action else {
            return theme.default_bar();
        };

        match action {
            InsertionAction::Shift => {
                if let (Some(i), Some(j)) = (state.i, state.j) {
                    if index > j && index <= i {
                        return ColorToken::Rose500;
                    }
                }
            }
            InsertionAction::SectionSorted => {
                if state.i.is_some_and(|i| index <= i) {
                    return ColorToken::Green500;
                }
            }
            InsertionAction::Complete => return ColorToken::Green500,
            InsertionAction::Start | InsertionAction::Compare => {}
        }

        if state.i == Some(index) {
            return ColorToken::Amber500;
        }
        if state.j == Some(index) {
            return ColorToken::Sky500;
        }

        theme.default_bar()
    }
}

/// Quick sort colors.
///
/// 1. Index in `correct_positions`: green.
/// 2. Index `pivot_index`: purple.
/// 3. `Compare` on `j`: yellow.
/// 4. `Swap` or `SwapPrepare` on `i` or `j`: rose.
/// 5. `SortLeft` or `SortRight` inside `low..=high`: light blue.
/// 6. Theme default.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickDecorator;

impl Decorator for QuickDecorator {
    fn algorithm(&self) -> AlgorithmId {
        AlgorithmId::Quick
    }

    fn color_for(&self, state: &AlgorithmState, index: usize, theme: Theme) -> ColorToken {
        let Action::Quick(action) = state.action else {
            return theme.default_bar();
        };

        if state.correct_positions.contains(&index) {
            return ColorToken::Green500;
        }
        if state.pivot_index == Some(index) {
            return ColorToken::Purple500;
        }

        match action {
            QuickAction::Compare => {
                if state.j == Some(index) {
                    return ColorToken::Yellow400;
                }
            }
            QuickAction::Swap | QuickAction::SwapPrepare => {
                if state.i == Some(index) || state.j == Some(index) {
                    return ColorToken::Rose500;
                }
            }
            QuickAction::SortLeft | QuickAction::SortRight => {
                if let (Some(low), Some(high)) = (state.low, state.high) {
                    if index >= low && index <= high {
                        return ColorToken::Blue400;
                    }
                }
            }
            QuickAction::Start | QuickAction::Pivot | QuickAction::Complete => {}
        }

        theme.default_bar()
    }
}
