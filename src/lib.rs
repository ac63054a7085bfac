//! Password strength evaluation library
//!
//! Scores a password against a configurable policy (minimum length plus
//! mandatory character classes), produces targeted remediation feedback,
//! estimates entropy, suggests random passwords and can cross-reference the
//! Have I Been Pwned breach corpus.
//!
//! # Features
//!
//! - `breach` (default): Remote breach lookup over the k-anonymity range API
//! - `async`: Timeout/cancellation plumbing for the breach client
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_CHECKER_BLACKLIST_PATH`: Custom path to the common-password list
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_checker::{evaluate_password_strength, Policy, Verdict};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abc123!@".to_string().into());
//! let report = evaluate_password_strength(&password, &Policy::default());
//!
//! assert_eq!(report.verdict, Verdict::Strong);
//! assert!(report.feedback.is_empty());
//! println!("Entropy: {:.1} bits", report.entropy_bits);
//! ```

// Internal modules
mod blacklist;
mod classifier;
mod criteria;
mod entropy;
mod evaluator;
mod policy;
mod suggest;

#[cfg(feature = "breach")]
mod breach;

// Public API
pub use blacklist::{Blacklist, BlacklistError, BLACKLIST_PATH_ENV};
pub use classifier::Verdict;
pub use criteria::classes::{has_digit, has_lowercase, has_special, has_uppercase};
pub use criteria::{evaluate_criteria, CriteriaResult, Criterion, SPECIAL_CHARACTERS};
pub use entropy::estimate_entropy_bits;
pub use evaluator::{evaluate_password_strength, StrengthReport};
pub use policy::{Policy, PolicyBuilder};
pub use suggest::{
    suggest_default_password, suggest_password, SuggestError, DEFAULT_SUGGESTION_LENGTH,
};

#[cfg(feature = "breach")]
pub use breach::{check_breached_tx, BreachChecker, BreachError, BreachStatus, HibpClient};
