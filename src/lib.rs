#![cfg_attr(test, allow(clippy::unwrap_used))]

pub(crate) mod util;

mod sensitive;

pub mod forms;
pub mod policy;
pub mod strength;
pub mod submit;
pub mod validation;

pub use forms::{validate_login, validate_register};
pub use policy::Policy;
pub use sensitive::Sensitive;
pub use submit::{Submission, SubmitState};

#[cfg(test)]
mod tests {
  use static_assertions::assert_impl_all;

  // every public type crosses a UI event-handler boundary, so all
  // of them have to stay Send + Sync
  assert_impl_all!(crate::Policy: Send, Sync, Clone);
  assert_impl_all!(crate::Sensitive<String>: Send, Sync);
  assert_impl_all!(crate::Submission: Send, Sync, Clone);
  assert_impl_all!(crate::forms::Login: Send, Sync, Clone);
  assert_impl_all!(crate::forms::Register: Send, Sync, Clone);
  assert_impl_all!(crate::forms::LoginRequest: Send, Sync);
  assert_impl_all!(crate::forms::RegisterRequest: Send, Sync);
  assert_impl_all!(validator::ValidateError: Send, Sync, Clone);
}
