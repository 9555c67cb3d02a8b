use indexmap::IndexMap;
use serde::{ser::SerializeMap, Serialize};
use std::borrow::Cow;

/// Which constraint a validation message came from.
///
/// Wire output only carries the human-readable text; the rule is
/// for callers that need to branch on the kind of violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
  /// Field is empty or missing entirely.
  Required,
  /// String is shorter than the configured minimum.
  MinLength,
  /// Value does not match the expected grammar.
  FormatInvalid,
  /// Confirmation field does not equal its primary field.
  Mismatch,
  /// Boolean consent field is not `true`.
  MustAccept,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Message {
  rule: Rule,
  text: Cow<'static, str>,
}

impl Message {
  #[must_use]
  pub fn new(rule: Rule, text: impl Into<Cow<'static, str>>) -> Self {
    Self { rule, text: text.into() }
  }

  #[must_use]
  pub const fn rule(&self) -> Rule {
    self.rule
  }

  #[must_use]
  pub fn text(&self) -> &str {
    &self.text
  }
}

impl std::fmt::Debug for Message {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    self.text.fmt(f)
  }
}

impl std::fmt::Display for Message {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.text)
  }
}

impl Serialize for Message {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.text)
  }
}

pub struct MessageBuilder(Vec<Message>);

impl MessageBuilder {
  #[must_use]
  pub const fn new() -> Self {
    Self(Vec::new())
  }

  pub fn insert(&mut self, rule: Rule, text: impl Into<Cow<'static, str>>) {
    self.0.push(Message::new(rule, text));
  }

  #[must_use]
  pub fn build(self) -> ValidateError {
    ValidateError::Messages(self.0)
  }
}

pub struct FieldBuilder(IndexMap<Cow<'static, str>, ValidateError>);

#[allow(clippy::new_without_default)]
impl FieldBuilder {
  #[must_use]
  pub fn new() -> Self {
    Self(IndexMap::default())
  }

  pub fn insert(&mut self, key: impl Into<Cow<'static, str>>, value: ValidateError) {
    if !value.is_empty() {
      self.0.insert(key.into(), value);
    }
  }

  #[must_use]
  pub fn build(self) -> ValidateError {
    ValidateError::Fields(self.0)
  }
}

// ---------------------------------------------------- //

#[derive(Clone, PartialEq, Eq)]
pub enum ValidateError {
  Fields(IndexMap<Cow<'static, str>, ValidateError>),
  Messages(Vec<Message>),
}

impl std::fmt::Display for ValidateError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("Invalid form data given")
  }
}

impl std::error::Error for ValidateError {}

impl std::fmt::Debug for ValidateError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ValidateError::Fields(n) => n.fmt(f),
      ValidateError::Messages(n) => f.debug_map().entry(&"_errors", &n).finish(),
    }
  }
}

impl ValidateError {
  #[must_use]
  pub fn field_builder() -> FieldBuilder {
    FieldBuilder::new()
  }

  #[must_use]
  pub const fn msg_builder() -> MessageBuilder {
    MessageBuilder::new()
  }

  /// Single-message error. Handy for rules that cannot pile up
  /// with others on the same field.
  #[must_use]
  pub fn message(rule: Rule, text: impl Into<Cow<'static, str>>) -> Self {
    ValidateError::Messages(vec![Message::new(rule, text)])
  }
}

impl ValidateError {
  #[must_use]
  pub fn is_empty(&self) -> bool {
    match self {
      ValidateError::Fields(n) => n.is_empty(),
      ValidateError::Messages(n) => n.is_empty(),
    }
  }

  pub fn into_result(self) -> Result<(), Self> {
    if self.is_empty() {
      Ok(())
    } else {
      Err(self)
    }
  }

  /// Error attached to a top-level field, if any.
  #[must_use]
  pub fn field(&self, name: &str) -> Option<&ValidateError> {
    match self {
      ValidateError::Fields(fields) => fields.get(name),
      ValidateError::Messages(..) => None,
    }
  }

  /// Whether any message in the tree violated `rule`.
  #[must_use]
  pub fn has_rule(&self, rule: Rule) -> bool {
    match self {
      ValidateError::Fields(fields) => fields.values().any(|v| v.has_rule(rule)),
      ValidateError::Messages(messages) => messages.iter().any(|m| m.rule() == rule),
    }
  }
}

fn serialize_index_map<K: Serialize, V: Serialize, S: serde::Serializer>(
  map: &IndexMap<K, V>,
  serializer: S,
) -> Result<S::Ok, S::Error> {
  let mut map_ser = serializer.serialize_map(Some(map.len()))?;
  for (key, value) in map {
    map_ser.serialize_entry(key, value)?;
  }
  map_ser.end()
}

impl Serialize for ValidateError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    match self {
      ValidateError::Fields(n) => serialize_index_map(n, serializer),
      ValidateError::Messages(n) => {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("_errors", &n)?;
        map.end()
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::Validate;

  use super::*;
  use serde_test::Token;

  #[derive(Debug)]
  struct Profile {
    nickname: &'static str,
    contact: &'static str,
  }

  impl Validate for Profile {
    fn validate(&self) -> Result<(), ValidateError> {
      let mut fields = ValidateError::field_builder();
      {
        let mut msg = ValidateError::msg_builder();
        if self.nickname.is_empty() {
          msg.insert(Rule::Required, "Nickname is empty");
        }
        fields.insert("nickname", msg.build());
      }
      {
        let mut msg = ValidateError::msg_builder();
        if !self.contact.contains('@') {
          msg.insert(Rule::FormatInvalid, "Invalid contact address");
        }
        fields.insert("contact", msg.build());
      }
      fields.build().into_result()
    }
  }

  #[test]
  fn test_debug_fmt() {
    const EXPECTED_FMT_MSG: &str = r#"{"nickname": {"_errors": ["Nickname is empty"]}, "contact": {"_errors": ["Invalid contact address"]}}"#;

    let error = Profile { nickname: "", contact: "nowhere" }.validate().unwrap_err();
    assert_eq!(EXPECTED_FMT_MSG, format!("{error:?}"));
  }

  #[test]
  fn test_serde_impl() {
    let error = Profile { nickname: "", contact: "nowhere" }.validate().unwrap_err();
    serde_test::assert_ser_tokens(
      &error,
      &[
        Token::Map { len: Some(2) },
        Token::Str("nickname"),
        Token::Map { len: Some(1) },
        Token::Str("_errors"),
        Token::Seq { len: Some(1) },
        Token::Str("Nickname is empty"),
        Token::SeqEnd,
        Token::MapEnd,
        Token::Str("contact"),
        Token::Map { len: Some(1) },
        Token::Str("_errors"),
        Token::Seq { len: Some(1) },
        Token::Str("Invalid contact address"),
        Token::SeqEnd,
        Token::MapEnd,
        Token::MapEnd,
      ],
    );
  }

  #[test]
  fn test_field_and_rule_accessors() {
    let error = Profile { nickname: "", contact: "memo@example.com" }.validate().unwrap_err();
    assert!(error.field("nickname").is_some());
    assert!(error.field("contact").is_none());
    assert!(error.has_rule(Rule::Required));
    assert!(!error.has_rule(Rule::FormatInvalid));

    let nickname = error.field("nickname").unwrap();
    assert!(nickname.has_rule(Rule::Required));
  }

  #[test]
  fn validate_error_is_empty() {
    assert!(MessageBuilder::new().build().is_empty());
    assert!(FieldBuilder::new().build().is_empty());

    let mut msg = MessageBuilder::new();
    msg.insert(Rule::Required, "Hello world!");
    assert!(!msg.build().is_empty());

    {
      let mut msg = MessageBuilder::new();
      msg.insert(Rule::Required, "Hello world!");

      let mut err = FieldBuilder::new();
      err.insert("microbar", msg.build());
      assert!(!err.build().is_empty());
    }

    // empty inner errors must not materialize a field entry
    let mut err = FieldBuilder::new();
    err.insert("microbar", MessageBuilder::new().build());
    assert!(err.build().is_empty());
  }
}
