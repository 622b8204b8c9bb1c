//! Bubble sort step generator.
//!
//! Pass `i` walks `j` over `0..n-1-i`, emitting a `Compare` before each
//! comparison and a `Swap` after each exchange. The index `n-1-i` joins
//! `completed_bars` at the end of the pass. A pass without any swap emits
//! `EarlyStop` and ends the sort.

use super::state::{AlgorithmState, BubbleAction, Trace, Value};
use super::{AlgorithmId, StepGenerator};

/// Bubble sort with the no-swap short circuit.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl StepGenerator for BubbleSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Bubble
    }

    fn generate(&self, input: &[Value]) -> Vec<AlgorithmState> {
        let mut trace = Trace::new(input);
        let n = input.len();
        if n <= 1 {
            return trace.finish(AlgorithmId::Bubble);
        }

        let start = trace
            .frame(BubbleAction::Start)
            .described("Initial unsorted array");
        trace.push(start);

        for i in 0..n - 1 {
            let mut swapped = false;

            for j in 0..n - 1 - i {
                let (a, b) = (trace.array[j], trace.array[j + 1]);
                let compare = trace
                    .frame(BubbleAction::Compare)
                    .with_i(i)
                    .with_j(j)
                    .described(format!("Comparing {a} and {b}"));
                trace.push(compare);

                if a > b {
                    trace.array.swap(j, j + 1);
                    swapped = true;
                    let swap = trace
                        .frame(BubbleAction::Swap)
                        .with_i(i)
                        .with_j(j)
                        .described(format!("Swapped {a} and {b}"));
                    trace.push(swap);
                }
            }

            trace.completed.insert(n - 1 - i);

            if !swapped {
                let stop = trace
                    .frame(BubbleAction::EarlyStop)
                    .with_i(i)
                    .described(format!("No swaps in pass {}, array is sorted", i + 1));
                trace.push(stop);
                break;
            }
        }

        trace.finish(AlgorithmId::Bubble)
    }
}
