//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::classifier::{self, Verdict};
use crate::criteria::{evaluate_criteria, CriteriaResult};
use crate::entropy::estimate_entropy_bits;
use crate::policy::Policy;

/// Result of evaluating one password under one policy.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthReport {
    /// Per-criterion outcome, in evaluation order.
    pub criteria: CriteriaResult,
    /// Three-tier classification of the criteria outcome.
    pub verdict: Verdict,
    /// One remediation message per failed criterion, in evaluation order.
    pub feedback: Vec<String>,
    /// Estimated bit-strength under a uniform-alphabet model.
    pub entropy_bits: f64,
}

impl StrengthReport {
    /// True when every criterion is satisfied.
    pub fn is_strong(&self) -> bool {
        self.verdict == Verdict::Strong
    }
}

/// Evaluates password strength and returns a detailed report.
///
/// Pure and total: any input string (including empty) yields a deterministic
/// report, and concurrent calls need no coordination. The breach lookup is a
/// separate collaborator behind the `BreachChecker` capability and never
/// blocks this path.
pub fn evaluate_password_strength(password: &SecretString, policy: &Policy) -> StrengthReport {
    let criteria = evaluate_criteria(password, policy);
    let verdict = classifier::classify(&criteria);
    let feedback = classifier::feedback(&criteria, policy);
    let entropy_bits = estimate_entropy_bits(password);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        %verdict,
        passed = criteria.passed(),
        entropy_bits,
        "password evaluated"
    );

    StrengthReport {
        criteria,
        verdict,
        feedback,
        entropy_bits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pwd(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_strong_password() {
        let report = evaluate_password_strength(&pwd("Abc123!@"), &Policy::default());
        assert_eq!(report.verdict, Verdict::Strong);
        assert!(report.is_strong());
        assert!(report.feedback.is_empty());
        assert!(report.entropy_bits > 0.0);
    }

    #[test]
    fn test_moderate_password() {
        let report = evaluate_password_strength(&pwd("Abc12345"), &Policy::default());
        assert_eq!(report.verdict, Verdict::Moderate);
        assert_eq!(report.criteria.passed(), 4);
        assert_eq!(report.feedback.len(), 1);
    }

    #[test]
    fn test_weak_password() {
        let report = evaluate_password_strength(&pwd("abc"), &Policy::default());
        assert_eq!(report.verdict, Verdict::Weak);
        assert_eq!(report.criteria.passed(), 2);
        assert_eq!(report.feedback.len(), 4);
    }

    #[test]
    fn test_empty_password() {
        let report = evaluate_password_strength(&pwd(""), &Policy::default());
        assert_eq!(report.verdict, Verdict::Weak);
        assert_eq!(report.criteria.passed(), 0);
        assert_eq!(report.feedback.len(), CriteriaResult::TOTAL);
        assert_eq!(report.entropy_bits, 0.0);
    }

    #[test]
    fn test_relaxed_policy_upgrades_verdict() {
        let policy = Policy::builder().require_special(false).build();
        let report = evaluate_password_strength(&pwd("Abc12345"), &policy);
        assert_eq!(report.verdict, Verdict::Strong);
        assert!(report.feedback.is_empty());
    }

    #[test]
    fn test_entropy_ignores_policy() {
        // Entropy reflects detected classes, not requirements
        let relaxed = Policy::builder().require_special(false).build();
        let a = evaluate_password_strength(&pwd("Abc12345"), &relaxed);
        let b = evaluate_password_strength(&pwd("Abc12345"), &Policy::default());
        assert_eq!(a.entropy_bits, b.entropy_bits);
        let charset = (26 + 26 + 10) as f64;
        assert!((a.entropy_bits - 8.0 * charset.log2()).abs() < 1e-9);
    }

    #[test]
    fn test_suggested_passwords_evaluate_strong() {
        // 12 random symbols from the 72-symbol alphabet miss a class only
        // with negligible probability, but the contract does not promise it,
        // so only check the invariants that always hold.
        let suggested = crate::suggest::suggest_password(12).unwrap();
        assert_eq!(suggested.chars().count(), 12);
        let report = evaluate_password_strength(&pwd(&suggested), &Policy::default());
        assert!(report.criteria.length);
        assert!(report.entropy_bits > 0.0);
    }
}
