use std::fmt::Arguments;

use crate::compiler::CompilerError;

#[derive(Debug, Clone, PartialEq)]
pub enum VMError {
    CompileError(CompilerError),
    RuntimeError(String),
}

impl std::fmt::Display for VMError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CompileError(e) => write!(f, "{e}"),
            Self::RuntimeError(e) => write!(f, "{e}"),
        }
    }
}

impl From<CompilerError> for VMError {
    fn from(error: CompilerError) -> Self {
        Self::CompileError(error)
    }
}

/// Formats a runtime failure as `"<message>\n[line N] in script\n"` and
/// leaves the caller to reset the stack — there's only ever one frame,
/// so there's no call chain to walk.
pub(super) fn runtime_error(line: i32, arguments: Arguments) -> VMError {
    VMError::RuntimeError(format!("{arguments}\n[line {line}] in script\n"))
}
