//! Algorithm states: one frame of a visualization.
//!
//! Every algorithm owns a closed set of action tags. [`Action`] wraps them so a
//! single sequence type can carry any algorithm while decorators still match
//! exhaustively on the tags of their own algorithm.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::AlgorithmId;

/// Element type of the arrays being sorted.
pub type Value = u32;

/// Bubble sort action tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BubbleAction {
    /// Initial unsorted array.
    Start,
    /// About to compare `j` and `j + 1`.
    Compare,
    /// `j` and `j + 1` were just swapped.
    Swap,
    /// A full pass made no swap; the array is sorted.
    EarlyStop,
    /// Sorting finished.
    Complete,
}

/// Selection sort action tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionAction {
    /// Initial unsorted array.
    Start,
    /// `j` is compared against the running minimum.
    Compare,
    /// The minimum was just swapped into position `i`.
    Swap,
    /// Every index `<= i` holds its final value.
    SectionSorted,
    /// Sorting finished.
    Complete,
}

/// Insertion sort action tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsertionAction {
    /// Initial unsorted array.
    Start,
    /// `a[j]` is compared against the key.
    Compare,
    /// `a[j]` was copied one slot right; indices `j+1..=i` are moving.
    Shift,
    /// The key was placed; indices `<= i` are sorted relative to each other.
    SectionSorted,
    /// Sorting finished.
    Complete,
}

/// Quick sort action tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuickAction {
    /// Initial unsorted array.
    Start,
    /// A partition of `low..=high` picked `pivot_index`.
    Pivot,
    /// `a[j]` is compared against the pivot.
    Compare,
    /// `i` and `j` are about to be swapped.
    SwapPrepare,
    /// `i` and `j` were just swapped.
    Swap,
    /// Recursing into the subrange left of the last pivot.
    SortLeft,
    /// Recursing into the subrange right of the last pivot.
    SortRight,
    /// Sorting finished.
    Complete,
}

/// Action tag of a state, tagged with the algorithm that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "algorithm", content = "tag", rename_all = "lowercase")]
pub enum Action {
    /// Bubble sort step.
    Bubble(BubbleAction),
    /// Selection sort step.
    Selection(SelectionAction),
    /// Insertion sort step.
    Insertion(InsertionAction),
    /// Quick sort step.
    Quick(QuickAction),
}

impl Action {
    /// The neutral action of an algorithm's first state.
    #[must_use]
    pub const fn start(algorithm: AlgorithmId) -> Self {
        match algorithm {
            AlgorithmId::Bubble => Self::Bubble(BubbleAction::Start),
            AlgorithmId::Selection => Self::Selection(SelectionAction::Start),
            AlgorithmId::Insertion => Self::Insertion(InsertionAction::Start),
            AlgorithmId::Quick => Self::Quick(QuickAction::Start),
        }
    }

    /// The completion action of an algorithm's last state.
    #[must_use]
    pub const fn complete(algorithm: AlgorithmId) -> Self {
        match algorithm {
            AlgorithmId::Bubble => Self::Bubble(BubbleAction::Complete),
            AlgorithmId::Selection => Self::Selection(SelectionAction::Complete),
            AlgorithmId::Insertion => Self::Insertion(InsertionAction::Complete),
            AlgorithmId::Quick => Self::Quick(QuickAction::Complete),
        }
    }

    /// Algorithm that owns this tag.
    #[must_use]
    pub const fn algorithm(self) -> AlgorithmId {
        match self {
            Self::Bubble(_) => AlgorithmId::Bubble,
            Self::Selection(_) => AlgorithmId::Selection,
            Self::Insertion(_) => AlgorithmId::Insertion,
            Self::Quick(_) => AlgorithmId::Quick,
        }
    }

    /// Whether this is a completion tag.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(
            self,
            Self::Bubble(BubbleAction::Complete)
                | Self::Selection(SelectionAction::Complete)
                | Self::Insertion(InsertionAction::Complete)
                | Self::Quick(QuickAction::Complete)
        )
    }

    /// Whether this is the neutral starting tag.
    #[must_use]
    pub const fn is_start(self) -> bool {
        matches!(
            self,
            Self::Bubble(BubbleAction::Start)
                | Self::Selection(SelectionAction::Start)
                | Self::Insertion(InsertionAction::Start)
                | Self::Quick(QuickAction::Start)
        )
    }

    /// Kebab-case tag as the front end spells it (`"swap-prepare"`).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Bubble(a) => match a {
                BubbleAction::Start => "start",
                BubbleAction::Compare => "compare",
                BubbleAction::Swap => "swap",
                BubbleAction::EarlyStop => "early-stop",
                BubbleAction::Complete => "complete",
            },
            Self::Selection(a) => match a {
                SelectionAction::Start => "start",
                SelectionAction::Compare => "compare",
                SelectionAction::Swap => "swap",
                SelectionAction::SectionSorted => "section-sorted",
                SelectionAction::Complete => "complete",
            },
            Self::Insertion(a) => match a {
                InsertionAction::Start => "start",
                InsertionAction::Compare => "compare",
                InsertionAction::Shift => "shift",
                InsertionAction::SectionSorted => "section-sorted",
                InsertionAction::Complete => "complete",
            },
            Self::Quick(a) => match a {
                QuickAction::Start => "start",
                QuickAction::Pivot => "pivot",
                QuickAction::Compare => "compare",
                QuickAction::SwapPrepare => "swap-prepare",
                QuickAction::Swap => "swap",
                QuickAction::SortLeft => "sort-left",
                QuickAction::SortRight => "sort-right",
                QuickAction::Complete => "complete",
            },
        }
    }
}

impl From<BubbleAction> for Action {
    fn from(a: BubbleAction) -> Self {
        Self::Bubble(a)
    }
}

impl From<SelectionAction> for Action {
    fn from(a: SelectionAction) -> Self {
        Self::Selection(a)
    }
}

impl From<InsertionAction> for Action {
    fn from(a: InsertionAction) -> Self {
        Self::Insertion(a)
    }
}

impl From<QuickAction> for Action {
    fn from(a: QuickAction) -> Self {
        Self::Quick(a)
    }
}

/// One frame of the visualization.
///
/// Index fields are `None` unless the action gives them a meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmState {
    /// Array contents at this step.
    pub array: Vec<Value>,
    /// What just happened.
    pub action: Action,
    /// Outer loop index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i: Option<usize>,
    /// Inner loop index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub j: Option<usize>,
    /// Running minimum (selection sort).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_index: Option<usize>,
    /// Current pivot position (quick sort).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot_index: Option<usize>,
    /// Lower bound of the active subrange, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<usize>,
    /// Upper bound of the active subrange, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<usize>,
    /// Value being inserted (insertion sort).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Value>,
    /// Indices fixed at their final position (bubble, selection, insertion).
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub completed_bars: BTreeSet<usize>,
    /// Indices finalized by partition placement (quick sort).
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub correct_positions: BTreeSet<usize>,
    /// Caption shown above the bars.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl AlgorithmState {
    /// Create a state with no index metadata.
    #[must_use]
    pub fn new(array: &[Value], action: impl Into<Action>) -> Self {
        Self {
            array: array.to_vec(),
            action: action.into(),
            i: None,
            j: None,
            min_index: None,
            pivot_index: None,
            low: None,
            high: None,
            key: None,
            completed_bars: BTreeSet::new(),
            correct_positions: BTreeSet::new(),
            description: String::new(),
        }
    }

    /// Set the outer index.
    #[must_use]
    pub fn with_i(mut self, i: usize) -> Self {
        self.i = Some(i);
        self
    }

    /// Set the inner index.
    #[must_use]
    pub fn with_j(mut self, j: usize) -> Self {
        self.j = Some(j);
        self
    }

    /// Set the running minimum.
    #[must_use]
    pub fn with_min_index(mut self, min_index: usize) -> Self {
        self.min_index = Some(min_index);
        self
    }

    /// Set the pivot position.
    #[must_use]
    pub fn with_pivot(mut self, pivot_index: usize) -> Self {
        self.pivot_index = Some(pivot_index);
        self
    }

    /// Set the active subrange `low..=high`.
    #[must_use]
    pub fn with_range(mut self, low: usize, high: usize) -> Self {
        self.low = Some(low);
        self.high = Some(high);
        self
    }

    /// Set the key being inserted.
    #[must_use]
    pub fn with_key(mut self, key: Value) -> Self {
        self.key = Some(key);
        self
    }

    /// Set the caption.
    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Largest value in the snapshot, 0 when empty.
    #[must_use]
    pub fn max_value(&self) -> Value {
        self.array.iter().copied().max().unwrap_or(0)
    }

    /// Whether `index` is marked final by either auxiliary set.
    #[must_use]
    pub fn is_finalized(&self, index: usize) -> bool {
        self.completed_bars.contains(&index) || self.correct_positions.contains(&index)
    }
}

/// Working array plus the states recorded so far.
///
/// Generators mutate `array` in place and snapshot it into each emitted state
/// together with the current auxiliary sets.
#[derive(Debug)]
pub(crate) struct Trace {
    pub(crate) array: Vec<Value>,
    pub(crate) completed: BTreeSet<usize>,
    pub(crate) correct: BTreeSet<usize>,
    states: Vec<AlgorithmState>,
}

impl Trace {
    /// Start a trace by copying the caller's input.
    pub(crate) fn new(input: &[Value]) -> Self {
        Self {
            array: input.to_vec(),
            completed: BTreeSet::new(),
            correct: BTreeSet::new(),
            states: Vec::new(),
        }
    }

    /// Snapshot the working array and auxiliary sets under `action`.
    pub(crate) fn frame(&self, action: impl Into<Action>) -> AlgorithmState {
        let mut state = AlgorithmState::new(&self.array, action);
        state.completed_bars.clone_from(&self.completed);
        state.correct_positions.clone_from(&self.correct);
        state
    }

    /// Record a state.
    pub(crate) fn push(&mut self, state: AlgorithmState) {
        self.states.push(state);
    }

    /// Record the completion state and return the whole sequence.
    ///
    /// Every index is marked final in the set the algorithm renders from.
    pub(crate) fn finish(mut self, algorithm: AlgorithmId) -> Vec<AlgorithmState> {
        let all = 0..self.array.len();
        if algorithm == AlgorithmId::Quick {
            self.correct.extend(all);
        } else {
            self.completed.extend(all);
        }
        let done = self
            .frame(Action::complete(algorithm))
            .described("Array is sorted");
        self.states.push(done);
        self.states
    }
}
