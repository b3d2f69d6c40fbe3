// error.rs - Error types for pattern compilation.
//
// Matching itself never fails: a missing match is an outcome, not an
// error. Only compiling an expression can go wrong.

use std::fmt;

/// Error returned when an expression cannot be compiled into a [`Pattern`].
///
/// [`Pattern`]: crate::pattern::Pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Syntax error in the expression.
    Syntax { message: String },
    /// The compiled program exceeded the configured size limit.
    CompiledTooBig { limit: usize },
    /// Other error reported by the engine.
    Other(String),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Syntax { message } => write!(f, "syntax error: {}", message),
            PatternError::CompiledTooBig { limit } => {
                write!(f, "compiled pattern exceeds size limit of {} bytes", limit)
            }
            PatternError::Other(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for PatternError {}

impl From<regex::Error> for PatternError {
    fn from(err: regex::Error) -> Self {
        match err {
            regex::Error::Syntax(message) => PatternError::Syntax { message },
            regex::Error::CompiledTooBig(limit) => PatternError::CompiledTooBig { limit },
            other => PatternError::Other(other.to_string()),
        }
    }
}
