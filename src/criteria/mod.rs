//! Password evaluation criteria
//!
//! Each criterion checks one independent property of the password. The
//! evaluator runs all of them against a [`Policy`] and collects the outcome
//! into a [`CriteriaResult`].

pub mod classes;
mod length;

pub use classes::SPECIAL_CHARACTERS;

use secrecy::SecretString;

use crate::policy::Policy;

/// One independently-checkable password property, in the fixed evaluation
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Numbers,
    SpecialCharacters,
}

impl Criterion {
    /// All criteria in evaluation order.
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Numbers,
        Criterion::SpecialCharacters,
    ];

    /// Stable name of the criterion.
    pub fn name(self) -> &'static str {
        match self {
            Criterion::Length => "length",
            Criterion::Uppercase => "uppercase",
            Criterion::Lowercase => "lowercase",
            Criterion::Numbers => "numbers",
            Criterion::SpecialCharacters => "special_characters",
        }
    }
}

/// Outcome of running every criterion against one password.
///
/// A criterion the policy does not require is reported as satisfied
/// regardless of the password's actual content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriteriaResult {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub special_characters: bool,
}

impl CriteriaResult {
    /// Number of criteria evaluated per password.
    pub const TOTAL: usize = Criterion::ALL.len();

    /// Looks up a single criterion outcome.
    pub fn get(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Length => self.length,
            Criterion::Uppercase => self.uppercase,
            Criterion::Lowercase => self.lowercase,
            Criterion::Numbers => self.numbers,
            Criterion::SpecialCharacters => self.special_characters,
        }
    }

    /// Iterates the outcomes in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        Criterion::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Count of satisfied criteria (0..=TOTAL).
    pub fn passed(&self) -> usize {
        self.iter().filter(|&(_, ok)| ok).count()
    }
}

/// Evaluates every criterion for `password` under `policy`.
///
/// Total over all string input; the empty password is valid and simply fails
/// every required criterion.
pub fn evaluate_criteria(password: &SecretString, policy: &Policy) -> CriteriaResult {
    CriteriaResult {
        length: length::meets_min_length(password, policy),
        uppercase: !policy.require_uppercase || classes::has_uppercase(password),
        lowercase: !policy.require_lowercase || classes::has_lowercase(password),
        numbers: !policy.require_numbers || classes::has_digit(password),
        special_characters: !policy.require_special || classes::has_special(password),
    }
}
