//! Severity-tagged messages anchored to a source range.

use silt_ir::SourceRange;
use std::fmt;
use std::sync::Arc;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic recorded against a document.
///
/// `filename` is shared with the owning [`SourceDocument`](crate::SourceDocument),
/// so a message renders on its own after the document is gone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub code: ErrorCode,
    pub severity: Severity,
    pub text: String,
    pub range: SourceRange,
    pub filename: Arc<str>,
}

impl Message {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// `file:line:col severity[CODE]: text`
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {}[{}]: {}",
            self.filename, self.range.start, self.severity, self.code, self.text
        )
    }
}

#[cfg(test)]
mod tests;
