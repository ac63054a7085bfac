//! Length criterion - checks the password against the policy minimum.

use secrecy::{ExposeSecret, SecretString};

use crate::policy::Policy;

/// Checks if the password meets the policy's minimum length.
///
/// Length is counted in characters, not bytes, so multi-byte input is not
/// penalized.
pub fn meets_min_length(password: &SecretString, policy: &Policy) -> bool {
    password.expose_secret().chars().count() >= policy.min_length
}
