//! Step generators and the algorithm registry.
//!
//! A step generator turns an input array into the complete, ordered sequence
//! of [`AlgorithmState`]s the algorithm passes through. Generation is eager,
//! pure and deterministic: the same input always yields the same sequence and
//! the caller's array is never mutated.
//!
//! # Example
//!
//! ```rust
//! use sortviz::algorithms::{generate, AlgorithmId};
//!
//! let states = generate(AlgorithmId::Bubble, &[3, 1, 2]);
//! assert!(states.first().is_some_and(|s| s.action.is_start()));
//! assert_eq!(states.last().map(|s| s.array.clone()), Some(vec![1, 2, 3]));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Bubble sort with early stop.
pub mod bubble;
/// Insertion sort with right shifts.
pub mod insertion;
/// Lomuto quick sort.
pub mod quick;
/// Selection sort.
pub mod selection;
/// State and action types.
pub mod state;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;
pub use state::{
    Action, AlgorithmState, BubbleAction, InsertionAction, QuickAction, SelectionAction, Value,
};

/// Identifier of a supported sorting algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmId {
    /// Bubble sort.
    #[default]
    Bubble,
    /// Selection sort.
    Selection,
    /// Insertion sort.
    Insertion,
    /// Quick sort.
    Quick,
}

impl AlgorithmId {
    /// Every supported algorithm, in menu order.
    pub const ALL: [Self; 4] = [Self::Bubble, Self::Selection, Self::Insertion, Self::Quick];

    /// Registry id (`"bubble"`, `"quick"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Quick => "quick",
        }
    }

    /// Registry record for this algorithm.
    #[must_use]
    pub fn info(self) -> &'static AlgorithmInfo {
        match self {
            Self::Bubble => &REGISTRY[0],
            Self::Selection => &REGISTRY[1],
            Self::Insertion => &REGISTRY[2],
            Self::Quick => &REGISTRY[3],
        }
    }

    /// The step generator for this algorithm.
    #[must_use]
    pub fn generator(self) -> &'static dyn StepGenerator {
        match self {
            Self::Bubble => &BubbleSort,
            Self::Selection => &SelectionSort,
            Self::Insertion => &InsertionSort,
            Self::Quick => &QuickSort,
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let id = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == id)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Produces the state sequence of one algorithm.
pub trait StepGenerator {
    /// Algorithm this generator implements.
    fn id(&self) -> AlgorithmId;

    /// Generate every state for `input`, first to last.
    ///
    /// Arrays of length 0 or 1 yield a single completion state.
    fn generate(&self, input: &[Value]) -> Vec<AlgorithmState>;
}

/// Generate the state sequence of `algorithm` for `input`.
pub fn generate(algorithm: AlgorithmId, input: &[Value]) -> Vec<AlgorithmState> {
    let states = algorithm.generator().generate(input);
    debug_assert!(crate::contracts::is_well_formed(input, &states));
    tracing::debug!(
        algorithm = %algorithm,
        input_len = input.len(),
        states = states.len(),
        "Generated state sequence"
    );
    states
}

// ============================================================================
// Registry
// ============================================================================

/// Menu record of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    /// Registry id.
    pub id: AlgorithmId,
    /// Display name.
    pub name: &'static str,
    /// Menu category.
    pub category: &'static str,
}

/// Category shared by every algorithm in this crate.
pub const SORTING: &str = "Sorting";

static REGISTRY: [AlgorithmInfo; 4] = [
    AlgorithmInfo {
        id: AlgorithmId::Bubble,
        name: "Bubble Sort",
        category: SORTING,
    },
    AlgorithmInfo {
        id: AlgorithmId::Selection,
        name: "Selection Sort",
        category: SORTING,
    },
    AlgorithmInfo {
        id: AlgorithmId::Insertion,
        name: "Insertion Sort",
        category: SORTING,
    },
    AlgorithmInfo {
        id: AlgorithmId::Quick,
        name: "Quick Sort",
        category: SORTING,
    },
];

/// Every registered algorithm, in menu order.
#[must_use]
pub fn registry() -> &'static [AlgorithmInfo] {
    &REGISTRY
}

/// Registered algorithms of one category (case-insensitive).
pub fn by_category(category: &str) -> impl Iterator<Item = &'static AlgorithmInfo> + '_ {
    REGISTRY
        .iter()
        .filter(move |info| info.category.eq_ignore_ascii_case(category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_ids() {
        for algorithm in AlgorithmId::ALL {
            assert_eq!(algorithm.info().id, algorithm);
            assert_eq!(algorithm.generator().id(), algorithm);
        }
        assert_eq!(registry().len(), AlgorithmId::ALL.len());
    }

    #[test]
    fn test_registry_names() {
        assert_eq!(AlgorithmId::Bubble.info().name, "Bubble Sort");
        assert_eq!(AlgorithmId::Quick.info().name, "Quick Sort");
        assert!(registry().iter().all(|info| info.category == "Sorting"));
    }

    #[test]
    fn test_by_category() {
        assert_eq!(by_category("sorting").count(), 4);
        assert_eq!(by_category("Searching").count(), 0);
    }

    #[test]
    fn test_parse_algorithm_id() {
        assert_eq!("quick".parse::<AlgorithmId>().unwrap(), AlgorithmId::Quick);
        assert_eq!(" Insertion ".parse::<AlgorithmId>().unwrap(), AlgorithmId::Insertion);
        assert!(matches!(
            "merge".parse::<AlgorithmId>(),
            Err(Error::UnknownAlgorithm(id)) if id == "merge"
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for algorithm in AlgorithmId::ALL {
            assert_eq!(algorithm.to_string().parse::<AlgorithmId>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_generate_every_algorithm_sorts() {
        let input = [5, 1, 4, 2, 8, 2];
        for algorithm in AlgorithmId::ALL {
            let states = generate(algorithm, &input);
            let last = states.last().unwrap();
            assert_eq!(last.array, vec![1, 2, 2, 4, 5, 8], "{algorithm}");
            assert!(last.action.is_complete());
            assert!(states[0].action.is_start());
            assert_eq!(states[0].array, input.to_vec());
        }
    }

    #[test]
    fn test_trivial_inputs_yield_single_complete_state() {
        for algorithm in AlgorithmId::ALL {
            for input in [&[][..], &[7][..]] {
                let states = generate(algorithm, input);
                assert_eq!(states.len(), 1, "{algorithm} {input:?}");
                assert!(states[0].action.is_complete());
                assert_eq!(states[0].array, input.to_vec());
            }
        }
    }
}
