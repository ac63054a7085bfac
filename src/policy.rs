//! Evaluation policy - which criteria are mandatory and the length threshold.

/// Immutable configuration for one evaluation.
///
/// A `Policy` is plain data passed by reference into each call; evaluating
/// different passwords under different policies concurrently needs no
/// coordination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    /// Minimum password length in characters.
    pub min_length: usize,
    /// Require at least one uppercase letter.
    pub require_uppercase: bool,
    /// Require at least one lowercase letter.
    pub require_lowercase: bool,
    /// Require at least one decimal digit.
    pub require_numbers: bool,
    /// Require at least one special character.
    pub require_special: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_numbers: true,
            require_special: true,
        }
    }
}

impl Policy {
    /// Starts a builder from the default policy.
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }
}

/// Builder for [`Policy`].
#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    policy: Policy,
}

impl PolicyBuilder {
    /// Sets the minimum password length.
    pub fn min_length(mut self, len: usize) -> Self {
        self.policy.min_length = len;
        self
    }

    /// Enables or disables the uppercase requirement.
    pub fn require_uppercase(mut self, required: bool) -> Self {
        self.policy.require_uppercase = required;
        self
    }

    /// Enables or disables the lowercase requirement.
    pub fn require_lowercase(mut self, required: bool) -> Self {
        self.policy.require_lowercase = required;
        self
    }

    /// Enables or disables the digit requirement.
    pub fn require_numbers(mut self, required: bool) -> Self {
        self.policy.require_numbers = required;
        self
    }

    /// Enables or disables the special-character requirement.
    pub fn require_special(mut self, required: bool) -> Self {
        self.policy.require_special = required;
        self
    }

    /// Builds the policy.
    pub fn build(self) -> Policy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = Policy::default();
        assert_eq!(policy.min_length, 8);
        assert!(policy.require_uppercase);
        assert!(policy.require_lowercase);
        assert!(policy.require_numbers);
        assert!(policy.require_special);
    }

    #[test]
    fn test_builder() {
        let policy = Policy::builder()
            .min_length(12)
            .require_special(false)
            .build();
        assert_eq!(policy.min_length, 12);
        assert!(!policy.require_special);
        assert!(policy.require_uppercase);
    }
}
