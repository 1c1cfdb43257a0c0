//! Execution errors

use thiserror::Error;

use crate::token::Token;

/// Result of evaluating a single operator or block.
pub type EvalResult<T = ()> = std::result::Result<T, EvalError>;

/// Errors raised while executing a token block.
///
/// All variants except [`EvalError::Fatal`] are block-local: the dispatch
/// loop reports them and abandons the rest of the current block, and the
/// enclosing block carries on.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum EvalError {
    #[error("'{op}' needs {needs} value(s) on the stack, found {found} at pos {pos}")]
    StackUnderflow {
        op: char,
        needs: usize,
        found: usize,
        pos: usize,
    },

    #[error("not enough bits for output at pos {pos}")]
    InsufficientBits { pos: usize },

    #[error("unknown token '{ch}' at pos {pos}")]
    UnrecognizedToken { ch: char, pos: usize },

    #[error("invalid boolean token {token:?}")]
    InvalidLiteral { token: Token },

    #[error("fatal: {0}")]
    Fatal(String),
}

impl EvalError {
    /// Recoverable errors abort only the block they occur in; `Fatal`
    /// unwinds the whole run.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, EvalError::Fatal(_))
    }
}
