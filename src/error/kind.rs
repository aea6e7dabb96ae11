//! Machine-readable error kinds.
//!
//! Kinds are organized by category:
//! - Validation: malformed request input, rejected before the solver runs
//! - Computation: well-formed input with a negative computed outcome
//! - Internal: defensive faults in the engine itself

/// Machine-readable error kind carried in the API error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorKind(&'static str);

impl ErrorKind {
    // ===== Validation =====

    /// Amount out of range, non-finite, or wrong precision.
    pub const INVALID_AMOUNT: Self = Self("INVALID_AMOUNT");

    /// Denomination non-positive, non-finite, duplicate, or not accepted.
    pub const INVALID_DENOMINATION: Self = Self("INVALID_DENOMINATION");

    /// No denominations supplied.
    pub const EMPTY_DENOMINATION_SET: Self = Self("EMPTY_DENOMINATION_SET");

    // ===== Computation =====

    /// No exact combination of the denominations sums to the amount.
    pub const INFEASIBLE: Self = Self("INFEASIBLE");

    // ===== Internal =====

    /// Unexpected engine fault.
    pub const INTERNAL_ERROR: Self = Self("INTERNAL_ERROR");

    /// Get the kind as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Get the category of this kind.
    #[must_use]
    pub fn category(self) -> ErrorCategory {
        match self.0 {
            "INFEASIBLE" => ErrorCategory::Computation,
            "INTERNAL_ERROR" => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorKind> for &'static str {
    fn from(kind: ErrorKind) -> Self {
        kind.0
    }
}

/// Error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed request input.
    Validation,
    /// Valid input, negative computed outcome.
    Computation,
    /// Engine fault.
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Computation => write!(f, "computation"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_strings() {
        assert_eq!(ErrorKind::INVALID_AMOUNT.as_str(), "INVALID_AMOUNT");
        assert_eq!(
            ErrorKind::EMPTY_DENOMINATION_SET.as_str(),
            "EMPTY_DENOMINATION_SET"
        );
        assert_eq!(ErrorKind::INFEASIBLE.as_str(), "INFEASIBLE");
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            ErrorKind::INVALID_AMOUNT.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            ErrorKind::INVALID_DENOMINATION.category(),
            ErrorCategory::Validation
        );
        assert_eq!(ErrorKind::INFEASIBLE.category(), ErrorCategory::Computation);
        assert_eq!(ErrorKind::INTERNAL_ERROR.category(), ErrorCategory::Internal);
    }
}
