//! Login and registration payloads with their validation rules.
//!
//! Each raw form is validated in one shot: every violated rule is
//! collected into a single field-keyed [`ValidateError`], and a
//! passing form is converted into the normalized request handed to
//! the external authentication collaborator. Validation-only
//! fields (`secret_confirmation`, `terms_accepted`) never survive
//! the conversion.

mod login;
mod register;

pub use login::{Login, LoginRequest};
pub use register::{Register, RegisterRequest};

use crate::Policy;
use validator::ValidateError;

/// Checks a login submission against `policy` and returns the
/// normalized request on success.
pub fn validate_login(form: Login, policy: &Policy) -> Result<LoginRequest, ValidateError> {
  form.into_request(&policy.login)
}

/// Checks a registration submission against `policy` and returns
/// the normalized request on success.
pub fn validate_register(
  form: Register,
  policy: &Policy,
) -> Result<RegisterRequest, ValidateError> {
  form.into_request(&policy.register)
}
