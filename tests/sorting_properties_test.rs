//! Property tests over every generated state stream.
//!
//! Each property is a falsifiable claim about all four algorithms; proptest
//! searches for an input that refutes it.
//!
//! Run: cargo test --test sorting_properties_test

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sortviz::algorithms::{
    generate, Action, AlgorithmId, AlgorithmState, BubbleAction, InsertionAction, QuickAction,
    SelectionAction, Value,
};
use sortviz::color::ColorToken;
use sortviz::contracts::{is_permutation, is_sorted_ascending, is_well_formed, max_states};
use sortviz::mode3d::{self, Mode3dLimits};
use sortviz::render::{bar_dimensions, color_for, FrameView, MAX_BAR_WIDTH, MIN_BAR_WIDTH};
use sortviz::theme::Theme;

fn arrays() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(0u32..=1000, 0..=50)
}

fn algorithms() -> impl Strategy<Value = AlgorithmId> {
    prop::sample::select(AlgorithmId::ALL.to_vec())
}

fn sorted(input: &[Value]) -> Vec<Value> {
    let mut v = input.to_vec();
    v.sort_unstable();
    v
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_final_state_is_sorted_permutation(input in arrays(), alg in algorithms()) {
        let states = generate(alg, &input);
        let last = states.last().unwrap();

        prop_assert!(last.action.is_complete());
        prop_assert_eq!(&last.array, &sorted(&input));
        prop_assert!(is_sorted_ascending(&last.array));
        prop_assert!(is_permutation(&last.array, &input));
        prop_assert!(is_well_formed(&input, &states));
    }

    #[test]
    fn prop_every_state_is_a_permutation(input in arrays(), alg in algorithms()) {
        for state in generate(alg, &input) {
            prop_assert!(is_permutation(&state.array, &input));
            prop_assert_eq!(state.action.algorithm(), alg);
        }
    }

    #[test]
    fn prop_generation_is_deterministic(input in arrays(), alg in algorithms()) {
        prop_assert_eq!(generate(alg, &input), generate(alg, &input));
    }

    #[test]
    fn prop_state_count_is_bounded(input in arrays(), alg in algorithms()) {
        let states = generate(alg, &input);
        prop_assert!(!states.is_empty());
        prop_assert!(states.len() <= max_states(input.len()));
    }

    #[test]
    fn prop_indices_stay_in_bounds(input in arrays(), alg in algorithms()) {
        let n = input.len();
        for state in generate(alg, &input) {
            for index in [state.i, state.j, state.min_index, state.pivot_index, state.low, state.high]
                .into_iter()
                .flatten()
            {
                prop_assert!(index < n, "{:?} out of bounds for {}", index, n);
            }
            prop_assert!(state.completed_bars.iter().all(|&k| k < n));
            prop_assert!(state.correct_positions.iter().all(|&k| k < n));
        }
    }

    #[test]
    fn prop_finalized_sets_only_grow(input in arrays(), alg in algorithms()) {
        let states = generate(alg, &input);
        for pair in states.windows(2) {
            prop_assert!(pair[0].completed_bars.is_subset(&pair[1].completed_bars));
            prop_assert!(pair[0].correct_positions.is_subset(&pair[1].correct_positions));
        }
    }

    #[test]
    fn prop_quick_ranges_contain_pivot(input in arrays()) {
        for state in generate(AlgorithmId::Quick, &input) {
            if let (Some(low), Some(high)) = (state.low, state.high) {
                prop_assert!(low <= high);
                if let Some(p) = state.pivot_index {
                    prop_assert!(low <= p && p <= high);
                }
            }
        }
    }

    #[test]
    fn prop_quick_correct_positions_hold_final_values(input in arrays()) {
        let expected = sorted(&input);
        for state in generate(AlgorithmId::Quick, &input) {
            for &k in &state.correct_positions {
                prop_assert_eq!(state.array[k], expected[k]);
                prop_assert_eq!(
                    color_for(&state, k, AlgorithmId::Quick, Theme::Light),
                    ColorToken::Green500
                );
            }
        }
    }

    #[test]
    fn prop_completed_bars_hold_final_values(input in arrays(), alg in algorithms()) {
        let expected = sorted(&input);
        for state in generate(alg, &input) {
            for &k in &state.completed_bars {
                prop_assert_eq!(state.array[k], expected[k], "{} bar {}", alg, k);
            }
        }
    }

    #[test]
    fn prop_section_sorted_prefix(input in arrays()) {
        let expected = sorted(&input);
        for alg in [AlgorithmId::Selection, AlgorithmId::Insertion] {
            for state in generate(alg, &input) {
                let marked = matches!(
                    state.action,
                    Action::Selection(SelectionAction::SectionSorted)
                        | Action::Insertion(InsertionAction::SectionSorted)
                );
                if !marked {
                    continue;
                }
                let i = state.i.unwrap();
                prop_assert!(is_sorted_ascending(&state.array[..=i]));
                // selection fixes the smallest values first
                if alg == AlgorithmId::Selection {
                    prop_assert_eq!(&state.array[..=i], &expected[..=i]);
                }
            }
        }
    }

    #[test]
    fn prop_ties_never_swap(value in 0u32..100, len in 2usize..12, alg in algorithms()) {
        let input = vec![value; len];
        let swaps = generate(alg, &input)
            .iter()
            .filter(|s| matches!(
                s.action,
                Action::Bubble(BubbleAction::Swap)
                    | Action::Selection(SelectionAction::Swap)
                    | Action::Insertion(InsertionAction::Shift)
                    | Action::Quick(QuickAction::Swap | QuickAction::SwapPrepare)
            ))
            .count();
        prop_assert_eq!(swaps, 0);
    }

    #[test]
    fn prop_color_defined_for_every_bar(input in arrays(), alg in algorithms(), dark in any::<bool>()) {
        let theme = Theme::from_dark_mode(dark);
        for state in generate(alg, &input) {
            let frame = FrameView::build(&state, alg, theme, 800);
            prop_assert_eq!(frame.len(), state.array.len());
        }
    }

    #[test]
    fn prop_bar_width_is_clamped(len in 0usize..200, width in 0u32..4000) {
        let dims = bar_dimensions(len, width);
        prop_assert!((MIN_BAR_WIDTH..=MAX_BAR_WIDTH).contains(&dims.width));
    }

    #[test]
    fn prop_auto_adjust_is_eligible(input in prop::collection::vec(0u32..1000, 0..40), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let adjusted = mode3d::auto_adjust(&input, &mut rng);
        prop_assert!(mode3d::is_eligible(&adjusted));
        prop_assert_eq!(adjusted.len(), input.len().min(10));
        for (a, b) in adjusted.iter().zip(&input) {
            if *b <= 20 {
                prop_assert_eq!(a, b);
            } else {
                prop_assert!((15..=20).contains(a));
            }
        }
    }
}

// ============================================================================
// Fixed scenarios
// ============================================================================

fn tags(states: &[AlgorithmState]) -> Vec<&'static str> {
    states.iter().map(|s| s.action.tag()).collect()
}

#[test]
fn test_bubble_sorted_input_stops_after_one_pass() {
    let states = generate(AlgorithmId::Bubble, &[1, 2, 3, 4]);
    assert_eq!(
        tags(&states),
        vec!["start", "compare", "compare", "compare", "early-stop", "complete"]
    );
}

#[test]
fn test_selection_prefix_is_sorted_when_marked() {
    let input = [29, 10, 14, 37, 13];
    let expected = sorted(&input);
    for state in generate(AlgorithmId::Selection, &input) {
        if state.action == Action::Selection(SelectionAction::SectionSorted) {
            let i = state.i.unwrap();
            assert_eq!(state.array[..=i], expected[..=i]);
        }
    }
}

#[test]
fn test_insertion_prefix_is_sorted_when_marked() {
    let input = [5, 2, 4, 6, 1, 3];
    for state in generate(AlgorithmId::Insertion, &input) {
        if state.action == Action::Insertion(InsertionAction::SectionSorted) {
            let i = state.i.unwrap();
            assert!(is_sorted_ascending(&state.array[..=i]));
        }
    }
}

#[test]
fn test_single_element_is_one_complete_state() {
    for alg in AlgorithmId::ALL {
        let states = generate(alg, &[7]);
        assert_eq!(states.len(), 1, "{alg}");
        assert!(states[0].action.is_complete());
    }
}

#[test]
fn test_dimension_examples() {
    let five = bar_dimensions(5, 424);
    assert_eq!((five.width, five.gap), (48, 8));

    let crowded = bar_dimensions(25, 100);
    assert_eq!((crowded.width, crowded.gap), (16, 2));

    let ten = bar_dimensions(10, 800);
    assert_eq!((ten.width, ten.gap), (48, 8));

    let thirty = bar_dimensions(30, 400);
    assert_eq!((thirty.width, thirty.gap), (16, 2));

    let fifteen = bar_dimensions(15, 400);
    assert_eq!((fifteen.width, fifteen.gap), (22, 4));
}

#[test]
fn test_3d_gate_examples() {
    assert!(mode3d::is_eligible(&[1, 20, 3]));
    assert!(!mode3d::is_eligible(&[5, 25, 3]));
    assert!(!mode3d::is_eligible(&[1; 11]));
    assert!(Mode3dLimits::default().is_eligible(&[]));
}
