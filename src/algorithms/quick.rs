//! Quick sort step generator.
//!
//! Lomuto partitioning with the last element of the range as pivot. Each
//! exchange is emitted in two phases (`SwapPrepare`, then `Swap`) so the
//! renderer can show the pair before and after the move. A pivot's final
//! index joins `correct_positions` as soon as its partition completes, as does
//! any single-element range reached by recursion.

use super::state::{AlgorithmState, QuickAction, Trace, Value};
use super::{AlgorithmId, StepGenerator};

/// Recursive Lomuto quick sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl StepGenerator for QuickSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Quick
    }

    fn generate(&self, input: &[Value]) -> Vec<AlgorithmState> {
        let mut trace = Trace::new(input);
        let n = input.len();
        if n <= 1 {
            return trace.finish(AlgorithmId::Quick);
        }

        let start = trace
            .frame(QuickAction::Start)
            .described("Initial unsorted array");
        trace.push(start);

        sort_range(&mut trace, 0, n - 1);
        trace.finish(AlgorithmId::Quick)
    }
}

/// Sort `low..=high`. Recursion depth is bounded by the array length.
fn sort_range(trace: &mut Trace, low: usize, high: usize) {
    if low == high {
        trace.correct.insert(low);
        return;
    }
    if low > high {
        return;
    }

    let p = partition(trace, low, high);
    trace.correct.insert(p);

    if low < p {
        // the next partition of low..=p-1 picks p-1 as its pivot
        let left = trace
            .frame(QuickAction::SortLeft)
            .with_range(low, p - 1)
            .with_pivot(p - 1)
            .described(format!("Sorting left part {low}..={}", p - 1));
        trace.push(left);
        sort_range(trace, low, p - 1);
    }

    if p < high {
        let right = trace
            .frame(QuickAction::SortRight)
            .with_range(p + 1, high)
            .with_pivot(high)
            .described(format!("Sorting right part {}..={high}", p + 1));
        trace.push(right);
        sort_range(trace, p + 1, high);
    }
}

/// Partition `low..=high` around `a[high]` and return the pivot's final index.
fn partition(trace: &mut Trace, low: usize, high: usize) -> usize {
    let pivot = trace.array[high];
    let picked = trace
        .frame(QuickAction::Pivot)
        .with_pivot(high)
        .with_range(low, high)
        .described(format!("Pivot {pivot} selected"));
    trace.push(picked);

    // next slot for an element smaller than the pivot
    let mut i = low;

    for j in low..high {
        let compare = trace
            .frame(QuickAction::Compare)
            .with_i(i)
            .with_j(j)
            .with_pivot(high)
            .with_range(low, high)
            .described(format!("Comparing {} with pivot {pivot}", trace.array[j]));
        trace.push(compare);

        if trace.array[j] < pivot {
            if i != j {
                exchange(trace, i, j, high, high, low, high);
            }
            i += 1;
        }
    }

    // an element equal to the pivot already at `i` can stand in for it
    if i != high && trace.array[i] != pivot {
        exchange(trace, i, high, high, i, low, high);
    }

    i
}

/// Emit `SwapPrepare`, swap `a[i]` and `a[j]`, emit `Swap`.
///
/// The pivot may move during the exchange, so its index before and after is
/// passed separately.
fn exchange(
    trace: &mut Trace,
    i: usize,
    j: usize,
    pivot_before: usize,
    pivot_after: usize,
    low: usize,
    high: usize,
) {
    let (a, b) = (trace.array[i], trace.array[j]);
    let prepare = trace
        .frame(QuickAction::SwapPrepare)
        .with_i(i)
        .with_j(j)
        .with_pivot(pivot_before)
        .with_range(low, high)
        .described(format!("Swapping {a} and {b}"));
    trace.push(prepare);

    trace.array.swap(i, j);

    let swapped = trace
        .frame(QuickAction::Swap)
        .with_i(i)
        .with_j(j)
        .with_pivot(pivot_after)
        .with_range(low, high)
        .described(format!("Swapped {a} and {b}"));
    trace.push(swapped);
}
