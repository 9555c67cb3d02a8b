//! Advisory password-strength scoring.
//!
//! The score is a UI hint only. Submission is gated by the policy's
//! minimum-length rule alone, never by this module.

/// Coarse band for rendering a strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
  Weak,
  Fair,
  Strong,
}

pub const MAX_SCORE: u8 = 5;

/// Scores a candidate password from 0 to 5, one point per
/// independent check: length of at least 8, an uppercase letter,
/// a lowercase letter, a digit, and a non-alphanumeric symbol.
#[must_use]
pub fn score(secret: &str) -> u8 {
  let checks = [
    secret.len() >= 8,
    secret.chars().any(char::is_uppercase),
    secret.chars().any(char::is_lowercase),
    secret.chars().any(|c| c.is_ascii_digit()),
    secret.chars().any(|c| !c.is_alphanumeric()),
  ];
  checks.into_iter().fold(0, |total, passed| total + u8::from(passed))
}

#[must_use]
pub fn label(score: u8) -> Strength {
  match score {
    0..=2 => Strength::Weak,
    3 | 4 => Strength::Fair,
    _ => Strength::Strong,
  }
}
