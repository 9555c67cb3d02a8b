use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
    .expect("compile email regex")
});

// RFC 5321 forwarding limit
const EMAIL_MAX: usize = 254;

/// Checks a submitted e-mail address against a standard address
/// grammar. Host names in raw IP address form do not pass.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
  EMAIL_REGEX.is_match(email) && email.len() <= EMAIL_MAX
}
