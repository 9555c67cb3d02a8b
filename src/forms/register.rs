use serde::{Deserialize, Serialize};
use validator::{extras::validate_length, Rule, Validate, ValidateError};

use crate::policy::RegisterPolicy;
use crate::validation::is_valid_email;
use crate::Sensitive;

/// Raw registration submission.
///
/// `secret_confirmation` and `terms_accepted` exist only for
/// client-side validation; [`Register::into_request`] strips them
/// by construction.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Register {
  pub display_name: String,
  pub identifier: String,
  pub email_address: String,
  pub secret: Sensitive<String>,
  pub secret_confirmation: Sensitive<String>,
  #[serde(default)]
  pub terms_accepted: Option<bool>,
}

/// What actually goes to the authentication service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
  pub display_name: String,
  pub identifier: String,
  pub email_address: String,
  pub secret: Sensitive<String>,
}

impl Register {
  pub fn check(&self, policy: &RegisterPolicy) -> Result<(), ValidateError> {
    let mut fields = ValidateError::field_builder();
    fields.insert("display_name", check_required(&self.display_name));
    fields.insert("identifier", check_required(&self.identifier));

    fields.insert("email_address", {
      let mut error = ValidateError::msg_builder();
      if self.email_address.is_empty() {
        error.insert(Rule::Required, "Must not be empty");
      } else if !is_valid_email(&self.email_address) {
        error.insert(Rule::FormatInvalid, "Invalid e-mail address");
      }
      error.build()
    });

    fields.insert("secret", {
      let mut error = ValidateError::msg_builder();
      if self.secret.as_str().is_empty() {
        error.insert(Rule::Required, "Must not be empty");
      } else if !validate_length(&self.secret, Some(policy.secret_min), None, None) {
        error.insert(
          Rule::MinLength,
          format!("Must be at least {} characters long", policy.secret_min),
        );
      }
      error.build()
    });

    // the mismatch belongs to the confirmation field, never to
    // the secret itself
    if self.secret.as_str() != self.secret_confirmation.as_str() {
      fields.insert(
        "secret_confirmation",
        ValidateError::message(Rule::Mismatch, "Passwords do not match"),
      );
    }

    if policy.require_terms && self.terms_accepted != Some(true) {
      fields.insert(
        "terms_accepted",
        ValidateError::message(Rule::MustAccept, "You must accept the terms of service"),
      );
    }

    fields.build().into_result()
  }

  pub fn into_request(self, policy: &RegisterPolicy) -> Result<RegisterRequest, ValidateError> {
    self.check(policy)?;
    Ok(RegisterRequest {
      display_name: self.display_name,
      identifier: self.identifier,
      email_address: self.email_address,
      secret: self.secret,
    })
  }
}

fn check_required(value: &str) -> ValidateError {
  let mut error = ValidateError::msg_builder();
  if value.is_empty() {
    error.insert(Rule::Required, "Must not be empty");
  }
  error.build()
}

impl Validate for Register {
  fn validate(&self) -> Result<(), ValidateError> {
    self.check(&RegisterPolicy::default())
  }
}
