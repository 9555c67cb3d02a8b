//! In-flight status for a form submission.
//!
//! The status lives in an explicit value owned by the caller. UI
//! code must never flip a loading flag on some shared mutation
//! object; it asks this tracker instead.

use std::fmt::{self, Display};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
  #[default]
  Idle,
  Pending,
  Succeeded,
  Failed,
}

impl Display for SubmitState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      SubmitState::Idle => "idle",
      SubmitState::Pending => "pending",
      SubmitState::Succeeded => "succeeded",
      SubmitState::Failed => "failed",
    })
  }
}

/// Tracks one form's submission lifecycle across attempts.
#[derive(Debug, Default, Clone)]
pub struct Submission {
  state: SubmitState,
}

impl Submission {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub const fn state(&self) -> SubmitState {
    self.state
  }

  #[must_use]
  pub fn is_pending(&self) -> bool {
    self.state == SubmitState::Pending
  }

  /// Marks the submission as in flight. Returns `false` without
  /// touching the state if one is already pending, which is what
  /// absorbs a double-clicked submit button.
  pub fn begin(&mut self) -> bool {
    if self.is_pending() {
      tracing::debug!("submission already in flight; ignored");
      return false;
    }
    self.state = SubmitState::Pending;
    tracing::debug!(state = %self.state, "submission started");
    true
  }

  pub fn succeed(&mut self) {
    self.state = SubmitState::Succeeded;
    tracing::debug!(state = %self.state, "submission finished");
  }

  pub fn fail(&mut self) {
    self.state = SubmitState::Failed;
    tracing::debug!(state = %self.state, "submission finished");
  }

  pub fn reset(&mut self) {
    self.state = SubmitState::Idle;
  }
}
