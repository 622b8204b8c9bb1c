//! Formal contracts for state sequences.
//!
//! Design-by-contract specifications using Verus-style pre/postconditions.
//! These serve as both documentation and verification targets: generators
//! check them with `debug_assert!()` and the property tests check them over
//! arbitrary inputs.

use std::collections::HashMap;

use crate::algorithms::{AlgorithmState, Value};

/// Whether `data` is sorted ascending (non-strict).
///
/// #[ensures(result == true ==> forall|k| 0 < k < data.len() ==> data[k-1] <= data[k])]
/// #[ensures(data.len() <= 1 ==> result == true)]
#[must_use]
pub fn is_sorted_ascending(data: &[Value]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Whether `a` and `b` hold the same multiset of values.
///
/// #[ensures(result == true ==> a.len() == b.len())]
/// #[ensures(is_permutation(a, a))]
#[must_use]
pub fn is_permutation(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts: HashMap<Value, isize> = HashMap::new();
    for &v in a {
        *counts.entry(v).or_default() += 1;
    }
    for &v in b {
        *counts.entry(v).or_default() -= 1;
    }
    counts.values().all(|&c| c == 0)
}

/// Whether `index` addresses a bar of `state`.
///
/// #[requires(state.array.len() > 0)]
/// #[ensures(result == true ==> index < state.array.len())]
#[must_use]
pub fn is_valid_index(state: &AlgorithmState, index: usize) -> bool {
    index < state.array.len()
}

/// Whether a state sequence satisfies the start/finish invariants for `input`.
///
/// #[ensures(result == true ==> states.last().action.is_complete())]
/// #[ensures(result == true ==> is_sorted_ascending(states.last().array))]
/// #[ensures(result == true ==> is_permutation(states.last().array, input))]
/// #[ensures(result == true ==> forall|s, k| s names k ==> is_valid_index(s, k))]
/// #[ensures(input.len() <= 1 ==> (result == true ==> states.len() == 1))]
#[must_use]
pub fn is_well_formed(input: &[Value], states: &[AlgorithmState]) -> bool {
    let (Some(first), Some(last)) = (states.first(), states.last()) else {
        return false;
    };
    if input.len() <= 1 {
        return states.len() == 1 && last.action.is_complete() && last.array == input;
    }
    first.action.is_start()
        && first.array == input
        && last.action.is_complete()
        && is_sorted_ascending(&last.array)
        && is_permutation(&last.array, input)
        && states
            .iter()
            .all(|s| s.array.len() == input.len() && indices_valid(s))
}

/// Whether every index a state names addresses one of its bars.
fn indices_valid(state: &AlgorithmState) -> bool {
    [state.i, state.j, state.min_index, state.pivot_index, state.low, state.high]
        .into_iter()
        .flatten()
        .chain(state.completed_bars.iter().copied())
        .chain(state.correct_positions.iter().copied())
        .all(|k| is_valid_index(state, k))
}

/// Upper bound on the number of states any generator may emit for length `n`.
///
/// Every algorithm here performs at most `n * (n - 1) / 2` comparisons plus
/// `n` loop exits, emits at most three states per comparison, and adds a
/// linear number of bookkeeping states, so `4 * n * n + 4` bounds them all.
///
/// #[ensures(result >= 1)]
#[must_use]
pub const fn max_states(n: usize) -> usize {
    4 * n * n + 4
}
