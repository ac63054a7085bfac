//! Entropy estimation under a uniform-alphabet brute-force model.

use secrecy::{ExposeSecret, SecretString};

use crate::criteria::classes;

const LOWERCASE_SIZE: usize = 26;
const UPPERCASE_SIZE: usize = 26;
const DIGIT_SIZE: usize = 10;

/// Estimates password strength in bits.
///
/// The effective alphabet is the sum of the sizes of the character classes
/// actually present in the password, independent of any policy. Classes:
/// lowercase (26), uppercase (26), digits (10), and the special-symbol set
/// (its own size). Entropy is `length * log2(alphabet)`.
///
/// An empty password, or one containing none of the four classes, has an
/// empty effective alphabet and yields exactly 0.0 bits.
pub fn estimate_entropy_bits(password: &SecretString) -> f64 {
    let mut charset_size = 0usize;
    if classes::has_lowercase(password) {
        charset_size += LOWERCASE_SIZE;
    }
    if classes::has_uppercase(password) {
        charset_size += UPPERCASE_SIZE;
    }
    if classes::has_digit(password) {
        charset_size += DIGIT_SIZE;
    }
    if classes::has_special(password) {
        charset_size += classes::SPECIAL_CHARACTERS.chars().count();
    }

    // log2(0) is undefined; an empty alphabet means nothing to search
    if charset_size == 0 {
        return 0.0;
    }

    let length = password.expose_secret().chars().count() as f64;
    length * (charset_size as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pwd(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_empty_password_is_zero_bits() {
        let bits = estimate_entropy_bits(&pwd(""));
        assert_eq!(bits, 0.0);
        assert!(!bits.is_nan());
    }

    #[test]
    fn test_classless_password_is_zero_bits() {
        // Spaces belong to no class
        assert_eq!(estimate_entropy_bits(&pwd("    ")), 0.0);
    }

    #[test]
    fn test_lowercase_only() {
        let bits = estimate_entropy_bits(&pwd("aaaa"));
        assert!((bits - 4.0 * 26f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn test_mixed_classes_widen_the_alphabet() {
        let special_size = classes::SPECIAL_CHARACTERS.chars().count();
        let charset = (26 + 26 + 10 + special_size) as f64;
        let bits = estimate_entropy_bits(&pwd("Abc123!@"));
        assert!((bits - 8.0 * charset.log2()).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_grows_with_length() {
        let short = estimate_entropy_bits(&pwd("abcd"));
        let long = estimate_entropy_bits(&pwd("abcdabcd"));
        assert!((long - 2.0 * short).abs() < 1e-9);
    }
}
