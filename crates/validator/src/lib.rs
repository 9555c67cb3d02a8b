#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;
mod std_impl;

pub use error::*;
pub mod extras;

/// Context-free validation over an entire value.
///
/// Implementors are expected to collect every violation before
/// returning, not bail out on the first one.
pub trait Validate {
  fn validate(&self) -> Result<(), ValidateError>;
}

pub trait HasLength {
  fn length(&self) -> usize;
}
