//! Error types shared by the evaluation core and its front ends.

use std::fmt;

use thiserror::Error;

/// A single broken quantum-number constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// n must be at least 1.
    PrincipalNotPositive,
    /// n is above the largest supported value.
    PrincipalTooLarge { max: i64 },
    /// l must not be negative.
    AzimuthalNegative,
    /// l must be strictly below n.
    AzimuthalNotBelowPrincipal,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::PrincipalNotPositive => f.write_str("n must be a positive integer"),
            Violation::PrincipalTooLarge { max } => write!(f, "n must not exceed {max}"),
            Violation::AzimuthalNegative => f.write_str("l must not be negative"),
            Violation::AzimuthalNotBelowPrincipal => f.write_str("l must be smaller than n"),
        }
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error)]
pub enum RadialError {
    /// Well-formed integers outside `n > 0, 0 <= l < n`.
    #[error("invalid quantum numbers (n={n}, l={l}): {}", join_violations(.violations))]
    InvalidQuantumNumbers {
        n: i64,
        l: i64,
        violations: Vec<Violation>,
    },

    /// Text that is not an integer or an orbital label.
    #[error("malformed input '{input}': expected an integer or an orbital label such as 2p")]
    MalformedInput { input: String },

    #[error("invalid sampling configuration for '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("a comparison needs at least one quantum state")]
    EmptyComparison,

    #[error("a comparison holds at most {max} quantum states, got {count}")]
    TooManyStates { count: usize, max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("chart rendering failed: {0}")]
    Plot(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RadialError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_quantum_numbers_lists_every_violation() {
        let err = RadialError::InvalidQuantumNumbers {
            n: 0,
            l: -1,
            violations: vec![Violation::PrincipalNotPositive, Violation::AzimuthalNegative],
        };
        let msg = err.to_string();
        assert!(msg.contains("n=0, l=-1"));
        assert!(msg.contains("n must be a positive integer"));
        assert!(msg.contains("l must not be negative"));
    }

    #[test]
    fn test_principal_bound_message() {
        let err = RadialError::InvalidQuantumNumbers {
            n: 5_000_000_000,
            l: 0,
            violations: vec![Violation::PrincipalTooLarge { max: 500 }],
        };
        assert!(err.to_string().contains("n must not exceed 500"));
    }

    #[test]
    fn test_too_many_states_message() {
        let err = RadialError::TooManyStates { count: 4, max: 3 };
        assert_eq!(err.to_string(), "a comparison holds at most 3 quantum states, got 4");
    }
}
