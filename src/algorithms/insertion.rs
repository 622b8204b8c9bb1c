//! Insertion sort step generator.

use super::state::{AlgorithmState, InsertionAction, Trace, Value};
use super::{AlgorithmId, StepGenerator};

/// Insertion sort by shifting larger elements one slot right.
///
/// For each `i` the key `a[i]` is compared against `a[j]` for `j = i-1`
/// downwards. While `a[j] > key` the element is copied into `j+1` and a
/// `Shift` is emitted, so indices `j+1..=i` are the ones in motion. Equal
/// values stop the scan, which keeps the sort stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl StepGenerator for InsertionSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Insertion
    }

    fn generate(&self, input: &[Value]) -> Vec<AlgorithmState> {
        let mut trace = Trace::new(input);
        let n = input.len();
        if n <= 1 {
            return trace.finish(AlgorithmId::Insertion);
        }

        let start = trace
            .frame(InsertionAction::Start)
            .described("Initial unsorted array");
        trace.push(start);

        for i in 1..n {
            let key = trace.array[i];
            // slot the key lands in once the scan stops
            let mut hole = i;

            while hole > 0 {
                let j = hole - 1;
                let compare = trace
                    .frame(InsertionAction::Compare)
                    .with_i(i)
                    .with_j(j)
                    .with_key(key)
                    .described(format!("Comparing {} with key {key}", trace.array[j]));
                trace.push(compare);

                if trace.array[j] <= key {
                    break;
                }

                trace.array[j + 1] = trace.array[j];
                let shift = trace
                    .frame(InsertionAction::Shift)
                    .with_i(i)
                    .with_j(j)
                    .with_key(key)
                    .described(format!("Shifted {} right", trace.array[j]));
                trace.push(shift);
                hole = j;
            }

            // 0..=i is sorted among itself but not final, so nothing joins
            // `completed_bars` until the sort finishes
            trace.array[hole] = key;
            let sorted = trace
                .frame(InsertionAction::SectionSorted)
                .with_i(i)
                .with_key(key)
                .described(format!("Inserted {key} at index {hole}"));
            trace.push(sorted);
        }

        trace.finish(AlgorithmId::Insertion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Action;
    use crate::contracts::is_sorted_ascending;

    fn tags(states: &[AlgorithmState]) -> Vec<&'static str> {
        states.iter().map(|s| s.action.tag()).collect()
    }

    #[test]
    fn test_trace_for_small_input() {
        let states = InsertionSort.generate(&[2, 3, 1]);
        assert_eq!(
            tags(&states),
            vec![
                "start",
                // i = 1: 2 <= 3 stops immediately
                "compare",
                "section-sorted",
                // i = 2: shift 3, shift 2, reach the front
                "compare",
                "shift",
                "compare",
                "shift",
                "section-sorted",
                "complete",
            ]
        );
    }

    #[test]
    fn test_shift_copies_element_right() {
        let states = InsertionSort.generate(&[2, 1]);
        let shift = states
            .iter()
            .find(|s| s.action == Action::Insertion(InsertionAction::Shift))
            .unwrap();
        // the 2 was copied into slot 1; the key is held aside
        assert_eq!(shift.array, vec![2, 2]);
        assert_eq!(shift.key, Some(1));
        assert_eq!((shift.j, shift.i), (Some(0), Some(1)));
    }

    #[test]
    fn test_equal_keys_do_not_shift() {
        let states = InsertionSort.generate(&[3, 3, 3]);
        assert!(!tags(&states).contains(&"shift"));
    }

    #[test]
    fn test_prefix_sorted_at_section_sorted() {
        let states = InsertionSort.generate(&[8, 3, 5, 1, 9, 2]);
        for state in states
            .iter()
            .filter(|s| s.action == Action::Insertion(InsertionAction::SectionSorted))
        {
            let i = state.i.unwrap();
            assert!(is_sorted_ascending(&state.array[..=i]), "{state:?}");
        }
    }

    #[test]
    fn test_completed_bars_only_at_completion() {
        let states = InsertionSort.generate(&[2, 3, 1]);
        let (last, steps) = states.split_last().unwrap();
        assert!(steps.iter().all(|s| s.completed_bars.is_empty()));
        assert_eq!(last.completed_bars.len(), 3);
        assert_eq!(last.array, vec![1, 2, 3]);
    }

    #[test]
    fn test_every_step_carries_the_key() {
        let states = InsertionSort.generate(&[4, 1, 3]);
        let inner = &states[1..states.len() - 1];
        assert!(inner.iter().all(|s| s.key.is_some()));
    }
}
