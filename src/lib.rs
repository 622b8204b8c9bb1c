//! # sortviz
//!
//! Step-by-step state streams for classic sorting algorithms, plus the pure
//! rendering rules a front end needs to animate them.
//!
//! Each algorithm turns an input array into an ordered sequence of
//! [`AlgorithmState`](algorithms::AlgorithmState) snapshots. A per-algorithm
//! decorator maps any snapshot to bar colors, and the layout functions turn
//! array length and container width into bar sizes. A [`Session`] ties these
//! together with navigation, theme, and the 3D-mode gate.
//!
//! ## Quick Start
//!
//! ```rust
//! use sortviz::prelude::*;
//!
//! let states = generate(AlgorithmId::Bubble, &[5, 3, 8, 1]);
//! assert_eq!(states.last().unwrap().array, vec![1, 3, 5, 8]);
//!
//! let frame = FrameView::build(&states[1], AlgorithmId::Bubble, Theme::Dark, 800);
//! assert_eq!(frame.bars.len(), 4);
//! ```
//!
//! ## Feature Flags
//!
//! - `cli`: the `sortviz` binary (default)
//! - `json`: JSON export of state streams and frames
//! - `wasm`: WebAssembly bindings for browser front ends

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Pixel and percentage math mixes integer and float widths
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Sorting algorithms, their state snapshots and the registry.
pub mod algorithms;

/// Invariants every generated state stream satisfies.
pub mod contracts;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Color tokens and RGBA values.
pub mod color;

/// Light and dark themes.
pub mod theme;

/// Decorators, layout and frame view-models.
pub mod render;

/// Frame output (terminal, SVG).
pub mod output;

// ============================================================================
// Session Modules
// ============================================================================

/// Configuration loading and validation.
pub mod config;

/// 3D mode eligibility and auto-adjust.
pub mod mode3d;

/// Resize listener registrations.
pub mod resize;

/// Playback session over a generated state stream.
pub mod session;

/// Expiring user-facing warnings.
pub mod warning;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for sortviz operations.
pub mod error;

pub use error::{Error, Result};
pub use session::Session;

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use sortviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithms::{
        generate, registry, Action, AlgorithmId, AlgorithmInfo, AlgorithmState, StepGenerator,
        Value,
    };
    pub use crate::color::{ColorToken, Rgba};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::mode3d::Mode3dLimits;
    pub use crate::output::{frame_to_svg, TerminalMode, TerminalRenderer};
    pub use crate::render::{bar_dimensions, color_for, BarDimensions, Decorator, FrameView};
    pub use crate::resize::{ResizeRegistry, ResizeWatch};
    pub use crate::session::Session;
    pub use crate::theme::Theme;
    pub use crate::warning::{WarningQueue, WarningSink};
}

// ============================================================================
// Tests
// ============================================================================
