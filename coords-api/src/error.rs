//! Interop error reports
//!
//! Maps the closed `CoordinateError` surface onto the (domain, code)
//! convention used by boundaries that classify errors by string domain plus
//! numeric code. Ships a CLI-friendly rendering, a one-line rendering, and
//! a JSON rendering (hand-built, no serde).

use coords_core::{CoordinateError, ERROR_DOMAIN};

/// Structured construction-error report
///
/// Downstream surfaces (CLI, FFI shims, web handlers) format it to taste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    /// Stable error domain
    pub domain: &'static str,
    /// Stable numeric code within the domain
    pub code: i32,
    /// Variant name (for programmatic handling)
    pub kind: &'static str,
    /// Human-readable message
    pub message: String,
}

impl From<CoordinateError> for ErrorReport {
    fn from(err: CoordinateError) -> Self {
        Self {
            domain: ERROR_DOMAIN,
            code: err.code(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for ErrorReport {
    /// Default CLI-friendly format
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}:{}] {}: {}",
            self.domain, self.code, self.kind, self.message
        )
    }
}

impl ErrorReport {
    /// Render as a JSON object
    ///
    /// Built by hand, no serde.
    pub fn to_json(&self) -> String {
        format!(
            r#"{{"domain":"{}","code":{},"kind":"{}","message":"{}"}}"#,
            self.domain,
            self.code,
            escape_json(self.kind),
            escape_json(&self.message)
        )
    }

    /// Short format (terminal one-liner)
    pub fn to_short(&self) -> String {
        format!("{}: {}", self.kind, self.message)
    }
}

/// Minimal JSON string escaping
fn escape_json(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
