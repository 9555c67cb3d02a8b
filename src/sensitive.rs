use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::ops::Deref;

/// Keeps the raw sensitive data in memory but it cannot be
/// accidentally leaked through the console or logs.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(value)
  }

  #[must_use]
  pub fn into_inner(self) -> T {
    self.0
  }
}

impl<T> Debug for Sensitive<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_tuple("<hidden>").finish()
  }
}

impl<T> Display for Sensitive<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_tuple("<hidden>").finish()
  }
}

impl<T> AsRef<T> for Sensitive<T> {
  fn as_ref(&self) -> &T {
    &self.0
  }
}

impl<T: Deref> Sensitive<T> {
  #[must_use]
  pub fn as_deref(&self) -> Sensitive<&T::Target> {
    Sensitive(self.0.deref())
  }
}

impl<T: AsRef<str>> Sensitive<T> {
  #[must_use]
  pub fn as_str(&self) -> &str {
    self.0.as_ref()
  }
}

impl<T> From<T> for Sensitive<T> {
  fn from(value: T) -> Self {
    Self(value)
  }
}

impl<T: validator::HasLength> validator::HasLength for Sensitive<T> {
  fn length(&self) -> usize {
    self.0.length()
  }
}

#[cfg(test)]
mod tests {
  use super::Sensitive;
  use serde_test::Token;
  use validator::HasLength;

  #[test]
  fn test_serde_transparent() {
    let value: Sensitive<String> = "hunter42".to_string().into();
    serde_test::assert_tokens(&value, &[Token::Str("hunter42")]);
  }

  #[test]
  fn test_fmt() {
    let value = Sensitive::new("hello");
    assert_eq!(value.to_string(), "<hidden>");
    assert_eq!(format!("{value:?}"), "<hidden>");
  }

  #[test]
  fn test_length_passthrough() {
    let value: Sensitive<String> = "hunter42".to_string().into();
    assert_eq!(value.length(), 8);
  }
}
