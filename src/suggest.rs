//! Password suggestion - random generation from a fixed strong alphabet.

use rand::Rng;
use thiserror::Error;

/// Default length for suggested passwords.
pub const DEFAULT_SUGGESTION_LENGTH: usize = 12;

// 26 + 26 + 10 + 10 = 72 symbols
const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SuggestError {
    #[error("Suggested password length must be at least 1, got {0}")]
    InvalidLength(usize),
}

/// Generates a random password of exactly `length` characters.
///
/// Each character is drawn uniformly and independently from a 72-symbol
/// alphabet (letters, digits, `!@#$%^&*()`). Calls are independent; there is
/// no fixed seed and no reproducibility guarantee.
///
/// # Errors
///
/// Returns [`SuggestError::InvalidLength`] if `length` is zero.
pub fn suggest_password(length: usize) -> Result<String, SuggestError> {
    if length < 1 {
        return Err(SuggestError::InvalidLength(length));
    }

    let mut rng = rand::thread_rng();
    let password = (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    Ok(password)
}

/// Generates a random password of [`DEFAULT_SUGGESTION_LENGTH`] characters.
pub fn suggest_default_password() -> String {
    // Length is a positive constant, the error arm is unreachable
    suggest_password(DEFAULT_SUGGESTION_LENGTH).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_exact_length() {
        let password = suggest_password(12).unwrap();
        assert_eq!(password.chars().count(), 12);
    }

    #[test]
    fn test_suggest_draws_from_alphabet() {
        let password = suggest_password(64).unwrap();
        for c in password.chars() {
            assert!(
                ALPHABET.contains(&(c as u8)),
                "character {c:?} outside the suggestion alphabet"
            );
        }
    }

    #[test]
    fn test_suggest_zero_length_is_rejected() {
        assert_eq!(suggest_password(0), Err(SuggestError::InvalidLength(0)));
    }

    #[test]
    fn test_default_length() {
        let password = suggest_default_password();
        assert_eq!(password.chars().count(), DEFAULT_SUGGESTION_LENGTH);
    }

    #[test]
    fn test_calls_are_independent() {
        // 72^32 outcomes; a collision here means a broken random source
        let a = suggest_password(32).unwrap();
        let b = suggest_password(32).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_alphabet_size() {
        assert_eq!(ALPHABET.len(), 72);
    }
}
