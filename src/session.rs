//! Playback context: owns one visualization's state sequence.
//!
//! A [`Session`] holds the input array, the selected algorithm and the full
//! state sequence generated from them. Any change to the input or algorithm
//! discards the sequence and generates a new one in a single assignment, so a
//! reader never observes a partially generated sequence.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::algorithms::{generate, AlgorithmId, AlgorithmState, Value};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::mode3d::Mode3dLimits;
use crate::render::FrameView;
use crate::theme::Theme;
use crate::warning::WarningSink;

/// Random array of `size` values drawn from `1..=max_value`.
pub fn random_array<R: Rng + ?Sized>(size: usize, max_value: Value, rng: &mut R) -> Vec<Value> {
    let max_value = max_value.max(1);
    (0..size).map(|_| rng.gen_range(1..=max_value)).collect()
}

/// One visualization session.
#[derive(Debug, Clone)]
pub struct Session {
    algorithm: AlgorithmId,
    array: Vec<Value>,
    states: Vec<AlgorithmState>,
    current: usize,
    is_3d: bool,
    limits: Mode3dLimits,
    max_size: usize,
    warning_duration: Duration,
    prompt_duration: Duration,
    adjust_offer_until: Option<Instant>,
    before_adjust: Option<Vec<Value>>,
}

impl Session {
    /// Create a session and generate its states.
    #[must_use]
    pub fn new(algorithm: AlgorithmId, array: Vec<Value>) -> Self {
        let config = Config::default();
        let states = generate(algorithm, &array);
        Self {
            algorithm,
            array,
            states,
            current: 0,
            is_3d: false,
            limits: config.mode3d,
            max_size: config.visualization.max_size,
            warning_duration: config.warning_duration(),
            prompt_duration: config.prompt_duration(),
            adjust_offer_until: None,
            before_adjust: None,
        }
    }

    /// Create a session from configuration with a random starting array.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured algorithm is unknown.
    pub fn from_config<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<Self> {
        let algorithm = config.algorithm()?;
        let vis = &config.visualization;
        let size = vis.size.clamp(1, vis.max_size.max(1));
        let array = random_array(size, vis.max_value, rng);

        let mut session = Self::new(algorithm, array);
        session.limits = config.mode3d;
        session.max_size = vis.max_size.max(1);
        session.warning_duration = config.warning_duration();
        session.prompt_duration = config.prompt_duration();
        Ok(session)
    }

    fn regenerate(&mut self) {
        self.states = generate(self.algorithm, &self.array);
        self.current = 0;
        tracing::debug!(
            algorithm = %self.algorithm,
            len = self.array.len(),
            states = self.states.len(),
            "Session regenerated"
        );
    }

    // ------------------------------------------------------------------------
    // Inputs
    // ------------------------------------------------------------------------

    /// Selected algorithm.
    #[must_use]
    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// Input array the states were generated from.
    #[must_use]
    pub fn array(&self) -> &[Value] {
        &self.array
    }

    /// Replace the input array and regenerate.
    ///
    /// The 3D view drops back to 2D when the new array is outside the limits.
    pub fn set_array(&mut self, array: Vec<Value>) {
        self.array = array;
        self.before_adjust = None;
        self.regenerate();
        if self.is_3d && !self.limits.is_eligible(&self.array) {
            self.is_3d = false;
            tracing::debug!(len = self.array.len(), "New array exceeds 3D limits, back to 2D");
        }
    }

    /// Switch algorithm and regenerate.
    pub fn set_algorithm(&mut self, algorithm: AlgorithmId) {
        self.algorithm = algorithm;
        self.regenerate();
    }

    /// Replace the input with a random array of `size` elements.
    ///
    /// `size` is clamped to `1..=max_size`.
    pub fn set_size<R: Rng + ?Sized>(&mut self, size: usize, max_value: Value, rng: &mut R) {
        let size = size.clamp(1, self.max_size);
        self.set_array(random_array(size, max_value, rng));
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// Every state, first to last. Never empty.
    #[must_use]
    pub fn states(&self) -> &[AlgorithmState] {
        &self.states
    }

    /// Number of states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: every sequence has at least its completion state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Index of the state being shown.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The state being shown.
    #[must_use]
    pub fn current_state(&self) -> &AlgorithmState {
        &self.states[self.current]
    }

    /// Advance one state; false at the last state.
    pub fn step_forward(&mut self) -> bool {
        if self.current + 1 < self.states.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one state; false at the first state.
    pub fn step_back(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to state `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StateIndexOutOfBounds`] past the last state.
    pub fn seek(&mut self, index: usize) -> Result<()> {
        if index >= self.states.len() {
            return Err(Error::StateIndexOutOfBounds {
                index,
                len: self.states.len(),
            });
        }
        tracing::debug!(from = self.current, to = index, "Seek");
        self.current = index;
        Ok(())
    }

    /// Back to the first state.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Whether the last state is shown.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current + 1 == self.states.len()
    }

    /// Playback position in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.states.len() <= 1 {
            return 1.0;
        }
        self.current as f64 / (self.states.len() - 1) as f64
    }

    /// View of the current state.
    #[must_use]
    pub fn frame(&self, theme: Theme, container_width: u32) -> FrameView {
        FrameView::build(self.current_state(), self.algorithm, theme, container_width)
    }

    // ------------------------------------------------------------------------
    // 3D mode
    // ------------------------------------------------------------------------

    /// Whether the 3D view is selected.
    #[must_use]
    pub fn is_3d(&self) -> bool {
        self.is_3d
    }

    /// Limits applied by the 3D gate.
    #[must_use]
    pub fn limits(&self) -> Mode3dLimits {
        self.limits
    }

    /// Back to the 2D view.
    pub fn set_2d(&mut self) {
        self.is_3d = false;
    }

    /// Ask for the 3D view.
    ///
    /// The current state's array is checked against the limits. When it
    /// passes, 3D is switched on. Otherwise a warning goes to `sink` and an
    /// auto-adjust offer opens until the prompt lifetime elapses. Returns
    /// whether 3D is on.
    pub fn request_3d(&mut self, sink: &mut dyn WarningSink, now: Instant) -> bool {
        if self.limits.is_eligible(&self.current_state().array) {
            self.adjust_offer_until = None;
            self.is_3d = true;
            tracing::debug!("3D view enabled");
            return true;
        }

        let message = self.limits.requirements_message();
        tracing::warn!(len = self.current_state().len(), "{message}");
        sink.add_warning(&message, self.warning_duration, now);
        self.adjust_offer_until = Some(now + self.prompt_duration);
        false
    }

    /// Whether the auto-adjust offer is still open at `now`.
    #[must_use]
    pub fn auto_adjust_offer_open(&self, now: Instant) -> bool {
        self.adjust_offer_until.is_some_and(|until| now < until)
    }

    /// Close the auto-adjust offer without adjusting.
    pub fn dismiss_auto_adjust(&mut self) {
        self.adjust_offer_until = None;
    }

    /// Adjust the current state's array into 3D limits and adopt it as input.
    ///
    /// The size follows the adjusted array. The sequence is regenerated, 3D is
    /// switched on and the offer closes. [`Session::revert_auto_adjust`]
    /// restores the previous input.
    pub fn auto_adjust<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let adjusted = self.limits.auto_adjust(&self.current_state().array, rng);
        let previous = std::mem::take(&mut self.array);
        tracing::debug!(from = previous.len(), to = adjusted.len(), "Auto-adjusted for 3D");

        self.set_array(adjusted);
        self.before_adjust = Some(previous);
        self.adjust_offer_until = None;
        self.is_3d = true;
    }

    /// Restore the input from before the last auto-adjust and return to 2D.
    ///
    /// Returns false when there is nothing to restore.
    pub fn revert_auto_adjust(&mut self) -> bool {
        let Some(previous) = self.before_adjust.take() else {
            return false;
        };
        self.set_array(previous);
        self.is_3d = false;
        true
    }
}
