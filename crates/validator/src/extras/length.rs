use crate::HasLength;

#[must_use]
pub fn validate_length<T: HasLength>(
  value: &T,
  min: Option<usize>,
  max: Option<usize>,
  equal: Option<usize>,
) -> bool {
  let length = value.length();
  if let Some(equal) = equal {
    return length == equal;
  }
  if min.is_some_and(|min| length < min) {
    return false;
  }
  if max.is_some_and(|max| length > max) {
    return false;
  }
  true
}

#[cfg(test)]
mod tests {
  use super::validate_length;

  #[test]
  fn test_bounds() {
    assert!(validate_length(&"hello", Some(1), Some(8), None));
    assert!(!validate_length(&"hello", Some(6), None, None));
    assert!(!validate_length(&"hello", None, Some(4), None));
    assert!(validate_length(&"hello", None, None, Some(5)));
    assert!(!validate_length(&"hello", None, None, Some(4)));
    assert!(validate_length(&"", None, None, None));
  }
}
