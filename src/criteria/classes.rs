//! Character class detection - uppercase, lowercase, digits, special symbols.

use secrecy::{ExposeSecret, SecretString};

/// The authoritative special-symbol set. Only characters from this set count
/// as "special"; anything else outside the alphanumeric ranges (spaces,
/// accented letters, emoji) does not.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// True iff the password contains at least one uppercase letter.
pub fn has_uppercase(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_uppercase())
}

/// True iff the password contains at least one lowercase letter.
pub fn has_lowercase(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_lowercase())
}

/// True iff the password contains at least one decimal digit.
pub fn has_digit(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

/// True iff the password contains at least one character from
/// [`SPECIAL_CHARACTERS`].
pub fn has_special(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARACTERS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pwd(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_has_uppercase() {
        assert!(has_uppercase(&pwd("aBc")));
        assert!(!has_uppercase(&pwd("abc123!")));
    }

    #[test]
    fn test_has_lowercase() {
        assert!(has_lowercase(&pwd("ABc")));
        assert!(!has_lowercase(&pwd("ABC123!")));
    }

    #[test]
    fn test_has_digit() {
        assert!(has_digit(&pwd("abc1")));
        assert!(!has_digit(&pwd("abcdef!")));
    }

    #[test]
    fn test_has_special() {
        assert!(has_special(&pwd("abc!")));
        assert!(has_special(&pwd("a{b}c")));
        assert!(!has_special(&pwd("abc123")));
    }

    #[test]
    fn test_special_excludes_chars_outside_the_set() {
        // Space, hyphen and accented letters are not in the set
        assert!(!has_special(&pwd("a b c")));
        assert!(!has_special(&pwd("a-b_c")));
        assert!(!has_special(&pwd("café")));
    }

    #[test]
    fn test_empty_password_matches_nothing() {
        let empty = pwd("");
        assert!(!has_uppercase(&empty));
        assert!(!has_lowercase(&empty));
        assert!(!has_digit(&empty));
        assert!(!has_special(&empty));
    }
}
