//! Diagnostic types emitted by the analysis.
//!
//! Diagnostics are append-only output: nothing in the analyzer references a
//! diagnostic back, and re-running against an unchanged file set yields an
//! identical sequence.

use serde::Serialize;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A broken import or an unanalyzable file.
    Error,
    /// Analysis degraded for a file but the run continued.
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One finding attached to a file, and optionally to a symbol and the module
/// key an import resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Project-relative path of the file the finding belongs to.
    pub file: String,
    pub message: String,
    /// The symbol an unresolved import asked for, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// The canonical key the import resolved to, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Line of the offending statement (1-indexed), when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Diagnostic {
    /// A file whose text was rejected by every parser backend.
    pub fn parse_failure(file: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            severity: Severity::Error,
            file: file.into(),
            message: format!("cannot parse with any backend: {}", error),
            symbol: None,
            module: None,
            line: None,
        }
    }

    /// Extraction gave up on an otherwise-successful parse tree; the file
    /// contributes empty declarations.
    pub fn traversal_fault(file: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            severity: Severity::Warning,
            file: file.into(),
            message: format!("declarations skipped: {}", error),
            symbol: None,
            module: None,
            line: None,
        }
    }

    /// A relative import resolved to a key with no module record behind it.
    pub fn module_not_found(
        file: impl Into<String>,
        specifier: &str,
        resolved: &str,
        line: usize,
    ) -> Self {
        Self {
            severity: Severity::Error,
            file: file.into(),
            message: format!("module '{}' not found (resolved: {})", specifier, resolved),
            symbol: None,
            module: Some(resolved.to_string()),
            line: Some(line),
        }
    }

    /// A named import whose target module exists but does not export it.
    pub fn symbol_not_exported(
        file: impl Into<String>,
        symbol: &str,
        specifier: &str,
        resolved: &str,
        line: usize,
    ) -> Self {
        Self {
            severity: Severity::Error,
            file: file.into(),
            message: format!(
                "imports '{}' from '{}' (resolved: {}) which is not exported",
                symbol, specifier, resolved
            ),
            symbol: Some(symbol.to_string()),
            module: Some(resolved.to_string()),
            line: Some(line),
        }
    }

    /// A relative specifier that walked past the project root.
    pub fn unresolvable_path(
        file: impl Into<String>,
        error: impl std::fmt::Display,
        line: usize,
    ) -> Self {
        Self {
            severity: Severity::Error,
            file: file.into(),
            message: format!("unresolvable import: {}", error),
            symbol: None,
            module: None,
            line: Some(line),
        }
    }

    /// Returns true for error-severity findings.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "{}: {}:{}: {}",
                self.severity, self.file, line, self.message
            ),
            None => write!(f, "{}: {}: {}", self.severity, self.file, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display() {
        assert_eq!(format!("{}", Severity::Error), "error");
        assert_eq!(format!("{}", Severity::Warning), "warning");
    }

    #[test]
    fn test_symbol_not_exported_fields() {
        let diag = Diagnostic::symbol_not_exported("b.js", "bar", "./a.js", "a.js", 3);
        assert!(diag.is_error());
        assert_eq!(diag.symbol.as_deref(), Some("bar"));
        assert_eq!(diag.module.as_deref(), Some("a.js"));
        assert_eq!(diag.line, Some(3));
        assert_eq!(
            format!("{}", diag),
            "error: b.js:3: imports 'bar' from './a.js' (resolved: a.js) which is not exported"
        );
    }

    #[test]
    fn test_module_not_found_fields() {
        let diag = Diagnostic::module_not_found("b.js", "./missing", "missing.js", 1);
        assert!(diag.is_error());
        assert!(diag.symbol.is_none());
        assert_eq!(diag.module.as_deref(), Some("missing.js"));
    }

    #[test]
    fn test_traversal_fault_is_warning() {
        let diag = Diagnostic::traversal_fault("a.js", "boom");
        assert!(!diag.is_error());
        assert_eq!(
            format!("{}", diag),
            "warning: a.js: declarations skipped: boom"
        );
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let diag = Diagnostic::parse_failure("a.js", "no backend");
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["severity"], "error");
        assert!(json.get("symbol").is_none());
        assert!(json.get("line").is_none());
    }
}
