//! Strength classification - reduces a criteria map to a verdict plus feedback.

use crate::criteria::{CriteriaResult, Criterion};
use crate::policy::Policy;

/// Three-tier strength verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verdict {
    Weak,
    Moderate,
    Strong,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Weak => write!(f, "weak"),
            Verdict::Moderate => write!(f, "moderate"),
            Verdict::Strong => write!(f, "strong"),
        }
    }
}

/// Classifies a criteria outcome into a [`Verdict`].
///
/// Thresholds are relative to [`CriteriaResult::TOTAL`] so the mapping stays
/// correct if criteria are ever added: all satisfied is Strong, exactly one
/// short is Moderate, anything below is Weak.
pub fn classify(criteria: &CriteriaResult) -> Verdict {
    let score = criteria.passed();
    if score == CriteriaResult::TOTAL {
        Verdict::Strong
    } else if score >= CriteriaResult::TOTAL - 1 {
        Verdict::Moderate
    } else {
        Verdict::Weak
    }
}

/// Produces one remediation message per failed criterion, in evaluation
/// order. Empty exactly when the verdict is Strong.
pub fn feedback(criteria: &CriteriaResult, policy: &Policy) -> Vec<String> {
    criteria
        .iter()
        .filter(|&(_, ok)| !ok)
        .map(|(criterion, _)| message_for(criterion, policy))
        .collect()
}

fn message_for(criterion: Criterion, policy: &Policy) -> String {
    match criterion {
        Criterion::Length => format!(
            "Password must be at least {} characters long.",
            policy.min_length
        ),
        Criterion::Uppercase => "Add at least one uppercase letter.".to_string(),
        Criterion::Lowercase => "Add at least one lowercase letter.".to_string(),
        Criterion::Numbers => "Include at least one number.".to_string(),
        Criterion::SpecialCharacters => {
            "Add at least one special character (!@#$%^&*...).".to_string()
        }
    }
}
