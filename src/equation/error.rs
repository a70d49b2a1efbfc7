use std::fmt;

/// Error types for the equation parsing and compilation pipeline.
///
/// All of these are fatal to compiling the one equation they occurred in and
/// must be reported before anything is registered for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum EquationError {
    /// brace/comma structure is inconsistent or a branch ended up empty
    MalformedEquation(String),
    /// more than two brace groups were closed
    TooManyBranches,
    /// the expression grammar rejected a sub-expression
    Syntax(String),
    /// wrong argument count for a library function
    Arity {
        name: &'static str,
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EquationError::MalformedEquation(msg) => write!(f, "malformed equation: {}", msg),
            EquationError::TooManyBranches => {
                write!(f, "malformed equation: more than two brace groups")
            }
            EquationError::Syntax(msg) => write!(f, "syntax error: {}", msg),
            EquationError::Arity {
                name,
                expected,
                got,
            } => write!(
                f,
                "function '{}' takes {} argument(s), got {}",
                name, expected, got
            ),
        }
    }
}

impl std::error::Error for EquationError {}
