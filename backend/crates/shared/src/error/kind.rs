//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum: the three-way taxonomy every failure
//! in the backend falls into, and the HTTP status each class is reported
//! with.
//!
//! The API contract reports business rejections inside a 200-class
//! response body (`{"success": false, ...}`); only genuine server faults
//! surface as HTTP 500. The taxonomy therefore carries the *meaning* of
//! a failure, not a full HTTP status palette.

use serde::Serialize;

/// Failure classification
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Domain;
/// assert_eq!(kind.status_code(), 200);
/// assert!(!kind.is_internal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Missing or malformed input. Recoverable by the caller, no state
    /// change on the server.
    Validation,
    /// Business-rule rejection: duplicate account, unknown account,
    /// wrong credentials, locked account. Reported with a specific
    /// message; never retried automatically.
    Domain,
    /// Server fault: store unavailable, hashing failure, signing
    /// failure. Logged in full, reported generically.
    Internal,
}

impl ErrorKind {
    /// HTTP status the failure is reported with
    ///
    /// Validation and domain rejections ride in a 200 response body with
    /// `success: false`; internal faults are a 500.
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::Validation | ErrorKind::Domain => 200,
            ErrorKind::Internal => 500,
        }
    }

    /// User-facing name of the classification
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Validation",
            ErrorKind::Domain => "Domain",
            ErrorKind::Internal => "Internal",
        }
    }

    /// Whether this is a server fault that must be logged at error level
    #[inline]
    pub const fn is_internal(&self) -> bool {
        matches!(self, ErrorKind::Internal)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::Validation.status_code(), 200);
        assert_eq!(ErrorKind::Domain.status_code(), 200);
        assert_eq!(ErrorKind::Internal.status_code(), 500);
    }

    #[test]
    fn test_is_internal() {
        assert!(!ErrorKind::Validation.is_internal());
        assert!(!ErrorKind::Domain.is_internal());
        assert!(ErrorKind::Internal.is_internal());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorKind::Domain.to_string(), "Domain");
    }
}
