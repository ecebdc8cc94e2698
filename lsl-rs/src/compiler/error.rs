//! Error types raised while building and resolving expression trees.

/// A diagnostic for the script author, tagged with the source line.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct CompileError {
    pub line: usize,
    pub message: String,
}

impl CompileError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }

    /// The standard "`'<entry>' is not a value`" diagnostic.
    pub fn not_a_value(line: usize, entry: &str) -> Self {
        Self::new(line, format!("'{entry}' is not a value"))
    }
}

/// An operation was requested on a literal kind that does not support it.
///
/// This is a caller bug, not a script error: the grammar never routes a unary
/// minus to a string or char literal.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported operation: {0}")]
pub struct UnsupportedOperation(pub &'static str);

// ── Tests ─────────────────────────────────────────────────────────────────────
