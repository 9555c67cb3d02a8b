use error_stack::{Report, ResultExt};
use serde::Deserialize;
use thiserror::Error;
use validator::{Rule, Validate, ValidateError};

use crate::util::figment::FigmentErrorAttachable;
use crate::util::validator::IntoValidatorReport;

#[derive(Debug, Error)]
#[error("Failed to load validation policy")]
pub struct ParseError;

/// Thresholds applied by the credential validator.
///
/// The source material never settled on one set of minimums, so
/// they are injected here instead of hardcoded. The defaults are
/// the permissive ones; deployments raise them through
/// `doorman.toml` or `DOORMAN_*` environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Policy {
  pub login: LoginPolicy,
  pub register: RegisterPolicy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoginPolicy {
  pub identifier_min: usize,
  pub secret_min: usize,
}

impl Default for LoginPolicy {
  fn default() -> Self {
    Self { identifier_min: 1, secret_min: 1 }
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegisterPolicy {
  pub secret_min: usize,
  /// Whether the terms-of-service checkbox is part of the schema
  /// at all. Off by default; consent capture is a per-deployment
  /// decision.
  pub require_terms: bool,
}

impl Default for RegisterPolicy {
  fn default() -> Self {
    Self { secret_min: 8, require_terms: false }
  }
}

impl Validate for Policy {
  fn validate(&self) -> Result<(), ValidateError> {
    let mut fields = ValidateError::field_builder();
    if let Err(error) = self.login.validate() {
      fields.insert("login", error);
    }
    if let Err(error) = self.register.validate() {
      fields.insert("register", error);
    }
    fields.build().into_result()
  }
}

impl Validate for LoginPolicy {
  fn validate(&self) -> Result<(), ValidateError> {
    let mut fields = ValidateError::field_builder();
    fields.insert("identifier_min", check_minimum(self.identifier_min));
    fields.insert("secret_min", check_minimum(self.secret_min));
    fields.build().into_result()
  }
}

impl Validate for RegisterPolicy {
  fn validate(&self) -> Result<(), ValidateError> {
    let mut fields = ValidateError::field_builder();
    fields.insert("secret_min", check_minimum(self.secret_min));
    fields.build().into_result()
  }
}

// a zero minimum would let empty fields through and break the
// non-empty invariant every form relies on
fn check_minimum(value: usize) -> ValidateError {
  let mut error = ValidateError::msg_builder();
  if value == 0 {
    error.insert(Rule::MinLength, "Minimum lengths must be at least 1");
  }
  error.build()
}

impl Policy {
  const DEFAULT_CONFIG_FILE: &'static str = "doorman.toml";

  /// Loads the policy from `doorman.toml` merged with `DOORMAN_`
  /// prefixed environment variables, environment taking priority.
  pub fn load() -> error_stack::Result<Self, ParseError> {
    let policy = Self::figment()
      .extract::<Self>()
      .map_err(|e| Report::new(ParseError).attach_figment_error(e))?;

    policy
      .validate()
      .into_validator_report()
      .change_context(ParseError)?;

    Ok(policy)
  }

  /// Creates a default [`figment::Figment`] object to load the
  /// validation policy. Split out for testing.
  pub(crate) fn figment() -> figment::Figment {
    use figment::{
      providers::{Env, Format, Toml},
      Figment,
    };

    Figment::new().merge(Toml::file(Self::DEFAULT_CONFIG_FILE)).merge(
      // figment's env provider cannot tell a nesting dot from an
      // underscore inside a key, hence the explicit map
      Env::prefixed("DOORMAN_").map(|v| match v.as_str() {
        "LOGIN_IDENTIFIER_MIN" => "login.identifier_min".into(),
        "LOGIN_SECRET_MIN" => "login.secret_min".into(),
        "REGISTER_SECRET_MIN" => "register.secret_min".into(),
        "REGISTER_REQUIRE_TERMS" => "register.require_terms".into(),
        _ => v.as_str().replace('_', ".").into(),
      }),
    )
  }
}
