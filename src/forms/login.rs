use serde::{Deserialize, Serialize};
use validator::{extras::validate_length, Rule, Validate, ValidateError};

use crate::policy::LoginPolicy;
use crate::Sensitive;

/// Raw login submission, exactly as the form produced it. No
/// trimming or case normalization happens anywhere downstream.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Login {
  pub identifier: Sensitive<String>,
  pub secret: Sensitive<String>,
}

/// What actually goes to the authentication service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
  pub identifier: Sensitive<String>,
  pub secret: Sensitive<String>,
}

impl Login {
  pub fn check(&self, policy: &LoginPolicy) -> Result<(), ValidateError> {
    let mut fields = ValidateError::field_builder();
    fields.insert("identifier", check_credential(&self.identifier, policy.identifier_min));
    fields.insert("secret", check_credential(&self.secret, policy.secret_min));
    fields.build().into_result()
  }

  pub fn into_request(self, policy: &LoginPolicy) -> Result<LoginRequest, ValidateError> {
    self.check(policy)?;
    Ok(LoginRequest { identifier: self.identifier, secret: self.secret })
  }
}

fn check_credential(value: &Sensitive<String>, min: usize) -> ValidateError {
  let mut error = ValidateError::msg_builder();
  if value.as_str().is_empty() {
    error.insert(Rule::Required, "Must not be empty");
  } else if !validate_length(value, Some(min), None, None) {
    error.insert(Rule::MinLength, format!("Must be at least {min} characters long"));
  }
  error.build()
}

impl Validate for Login {
  fn validate(&self) -> Result<(), ValidateError> {
    self.check(&LoginPolicy::default())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn form(identifier: &str, secret: &str) -> Login {
    Login {
      identifier: identifier.to_string().into(),
      secret: secret.to_string().into(),
    }
  }

  #[test]
  fn test_accepts_non_empty_fields_verbatim() {
    let policy = LoginPolicy::default();
    let request = form("  ana ", "x").into_request(&policy).unwrap();

    // literal whitespace is preserved
    assert_eq!(request.identifier.as_str(), "  ana ");
    assert_eq!(request.secret.as_str(), "x");
  }

  #[test]
  fn test_empty_identifier_flags_identifier_only() {
    let error = form("", "x").check(&LoginPolicy::default()).unwrap_err();

    let identifier = error.field("identifier").unwrap();
    assert!(identifier.has_rule(Rule::Required));
    assert!(error.field("secret").is_none());
  }

  #[test]
  fn test_both_empty_flags_both() {
    let error = form("", "").check(&LoginPolicy::default()).unwrap_err();
    assert!(error.field("identifier").is_some());
    assert!(error.field("secret").is_some());
  }

  #[test]
  fn test_raised_thresholds() {
    // one source variant shipped 3/6 instead of 1/1
    let policy = LoginPolicy { identifier_min: 3, secret_min: 6 };

    let error = form("ab", "12345").check(&policy).unwrap_err();
    assert!(error.field("identifier").unwrap().has_rule(Rule::MinLength));
    assert!(error.field("secret").unwrap().has_rule(Rule::MinLength));

    assert!(form("abc", "123456").check(&policy).is_ok());
  }

  #[test]
  fn test_idempotent() {
    let policy = LoginPolicy::default();
    let form = form("", "pw");
    assert_eq!(form.check(&policy), form.check(&policy));
  }
}
