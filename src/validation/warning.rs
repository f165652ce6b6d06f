//! Diagnostic types for validation results.

use std::fmt;

use crate::types::TypeCode;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Drift between a generated table and a live context for one name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mismatch<'a> {
    pub name: &'a str,
    /// Code the generated tables hold.
    pub expected: TypeCode,
    /// Value the context exposes, `None` when it has no such constant.
    pub actual: Option<u32>,
}

impl fmt::Display for Mismatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.actual {
            Some(actual) => write!(
                f,
                "{}: expected {} ({}), context has {} ({})",
                self.name,
                self.expected,
                self.expected.hex(),
                actual,
                TypeCode(actual).hex()
            ),
            None => write!(
                f,
                "{}: expected {} ({}), context has no such constant",
                self.name,
                self.expected,
                self.expected.hex()
            ),
        }
    }
}

/// Owned form of [`Mismatch`] kept inside a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MismatchRecord {
    pub name: String,
    pub expected: TypeCode,
    pub actual: Option<u32>,
}

impl MismatchRecord {
    pub fn as_mismatch(&self) -> Mismatch<'_> {
        Mismatch {
            name: &self.name,
            expected: self.expected,
            actual: self.actual,
        }
    }
}

impl From<Mismatch<'_>> for MismatchRecord {
    fn from(m: Mismatch<'_>) -> Self {
        Self {
            name: m.name.to_string(),
            expected: m.expected,
            actual: m.actual,
        }
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Machine-readable diagnostic code (e.g. "gltypes::validate::type-info").
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,
    /// The name/code pair that failed, for table mismatches.
    pub mismatch: Option<MismatchRecord>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            help: None,
            mismatch: None,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            help: None,
            mismatch: None,
        }
    }

    /// Add help text to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Attach the mismatch this diagnostic reports.
    pub fn with_mismatch(mut self, mismatch: Mismatch<'_>) -> Self {
        self.mismatch = Some(mismatch.into());
        self
    }
}

/// Collects diagnostics from validation checks.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add an error diagnostic.
    pub fn error(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.push(Diagnostic::error(code, message));
    }

    /// Add a warning diagnostic.
    pub fn warning(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.push(Diagnostic::warning(code, message));
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    /// Check if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }

    /// Count errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Count warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Check if there are no diagnostics at all.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Iterate over diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Distinct mismatches, sorted by name.
    ///
    /// A constant that drifted shows up once even when both tables caught it.
    pub fn mismatches(&self) -> Vec<Mismatch<'_>> {
        let mut mismatches: Vec<Mismatch<'_>> = self
            .diagnostics
            .iter()
            .filter_map(|d| d.mismatch.as_ref().map(MismatchRecord::as_mismatch))
            .collect();
        mismatches.sort();
        mismatches.dedup();
        mismatches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = ValidationResult::new();
        assert!(result.is_ok());
        assert!(!result.has_errors());
        assert!(!result.has_warnings());
        assert_eq!(result.error_count(), 0);
        assert_eq!(result.warning_count(), 0);
        assert!(result.mismatches().is_empty());
    }

    #[test]
    fn test_error_diagnostic() {
        let mut result = ValidationResult::new();
        result.error("gltypes::test", "something broke");

        assert!(result.has_errors());
        assert!(!result.has_warnings());
        assert!(!result.is_ok());
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn test_merge() {
        let mut a = ValidationResult::new();
        a.error("gltypes::a", "error a");

        let mut b = ValidationResult::new();
        b.warning("gltypes::b", "warning b");

        a.merge(b);
        assert_eq!(a.error_count(), 1);
        assert_eq!(a.warning_count(), 1);
    }

    #[test]
    fn test_mismatches_are_deduplicated() {
        let m = Mismatch {
            name: "FLOAT_MAT3",
            expected: TypeCode(0x8B5B),
            actual: None,
        };
        let mut result = ValidationResult::new();
        result.push(Diagnostic::error("gltypes::a", "a").with_mismatch(m));
        result.push(Diagnostic::error("gltypes::b", "b").with_mismatch(m));

        assert_eq!(result.error_count(), 2);
        assert_eq!(result.mismatches(), vec![m]);
    }

    #[test]
    fn test_mismatch_display() {
        let missing = Mismatch {
            name: "FLOAT_MAT3",
            expected: TypeCode(0x8B5B),
            actual: None,
        };
        assert_eq!(
            missing.to_string(),
            "FLOAT_MAT3: expected 35675 (0x8B5B), context has no such constant"
        );

        let wrong = Mismatch {
            actual: Some(0x8B5C),
            ..missing
        };
        assert_eq!(
            wrong.to_string(),
            "FLOAT_MAT3: expected 35675 (0x8B5B), context has 35676 (0x8B5C)"
        );
    }
}
