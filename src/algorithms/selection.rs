//! Selection sort step generator.

use super::state::{AlgorithmState, SelectionAction, Trace, Value};
use super::{AlgorithmId, StepGenerator};

/// Selection sort: scan `i+1..n` for the minimum, swap it into `i`.
///
/// The minimum only moves on a strictly smaller value, so ties never swap.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl StepGenerator for SelectionSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Selection
    }

    fn generate(&self, input: &[Value]) -> Vec<AlgorithmState> {
        let mut trace = Trace::new(input);
        let n = input.len();
        if n <= 1 {
            return trace.finish(AlgorithmId::Selection);
        }

        let start = trace
            .frame(SelectionAction::Start)
            .described("Initial unsorted array");
        trace.push(start);

        for i in 0..n - 1 {
            let mut min = i;

            for j in i + 1..n {
                let compare = trace
                    .frame(SelectionAction::Compare)
                    .with_i(i)
                    .with_j(j)
                    .with_min_index(min)
                    .described(format!(
                        "Comparing {} with current minimum {}",
                        trace.array[j], trace.array[min]
                    ));
                trace.push(compare);

                if trace.array[j] < trace.array[min] {
                    min = j;
                }
            }

            if min != i {
                trace.array.swap(i, min);
                let swap = trace
                    .frame(SelectionAction::Swap)
                    .with_i(i)
                    .with_min_index(min)
                    .described(format!(
                        "Moved minimum {} to index {i}",
                        trace.array[i]
                    ));
                trace.push(swap);
            }

            trace.completed.insert(i);
            let sorted = trace
                .frame(SelectionAction::SectionSorted)
                .with_i(i)
                .described(format!("Indices 0..={i} are sorted"));
            trace.push(sorted);
        }

        trace.finish(AlgorithmId::Selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Action;
    use crate::contracts::is_sorted_ascending;

    fn count(states: &[AlgorithmState], action: SelectionAction) -> usize {
        states
            .iter()
            .filter(|s| s.action == Action::Selection(action))
            .count()
    }

    #[test]
    fn test_comparison_count_is_quadratic() {
        let states = SelectionSort.generate(&[4, 3, 2, 1, 0]);
        assert_eq!(count(&states, SelectionAction::Compare), 10);
        assert_eq!(count(&states, SelectionAction::SectionSorted), 4);
    }

    #[test]
    fn test_no_swap_when_minimum_already_in_place() {
        let states = SelectionSort.generate(&[1, 2, 3]);
        assert_eq!(count(&states, SelectionAction::Swap), 0);
        // start + 3 compares + 2 section-sorted + complete
        assert_eq!(states.len(), 7);
    }

    #[test]
    fn test_ties_do_not_swap() {
        let states = SelectionSort.generate(&[2, 2, 1]);
        let swaps: Vec<_> = states
            .iter()
            .filter(|s| s.action == Action::Selection(SelectionAction::Swap))
            .map(|s| (s.i, s.min_index))
            .collect();
        // the 1 moves to the front; the two 2s keep their relative slot
        assert_eq!(swaps, vec![(Some(0), Some(2))]);
    }

    #[test]
    fn test_prefix_sorted_at_section_sorted() {
        let states = SelectionSort.generate(&[9, 4, 7, 1, 3]);
        for state in states
            .iter()
            .filter(|s| s.action == Action::Selection(SelectionAction::SectionSorted))
        {
            let i = state.i.unwrap();
            assert!(is_sorted_ascending(&state.array[..=i]));
            assert!(state.completed_bars.contains(&i));
        }
    }

    #[test]
    fn test_compare_tracks_running_minimum() {
        let states = SelectionSort.generate(&[5, 3, 4]);
        // compares for i=0: j=1 (min 0), j=2 (min 1)
        assert_eq!(states[1].min_index, Some(0));
        assert_eq!(states[2].min_index, Some(1));
    }
}
