use crate::{HasLength, Validate, ValidateError};
use std::borrow::Cow;

impl HasLength for String {
  fn length(&self) -> usize {
    self.len()
  }
}

impl<'a> HasLength for &'a String {
  fn length(&self) -> usize {
    self.len()
  }
}

impl HasLength for str {
  fn length(&self) -> usize {
    self.len()
  }
}

impl<'a> HasLength for &'a str {
  fn length(&self) -> usize {
    self.len()
  }
}

impl<'a> HasLength for Cow<'a, str> {
  fn length(&self) -> usize {
    self.len()
  }
}

// ------------------------------------------------ //

impl<'a, T: Validate> Validate for &'a T {
  fn validate(&self) -> Result<(), ValidateError> {
    T::validate(self)
  }
}

impl<T: Validate> Validate for Box<T> {
  fn validate(&self) -> Result<(), ValidateError> {
    T::validate(self)
  }
}

impl<'a, T: Validate + ToOwned> Validate for Cow<'a, T> {
  fn validate(&self) -> Result<(), ValidateError> {
    T::validate(self)
  }
}
