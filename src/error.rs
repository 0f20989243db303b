use thiserror::Error;

/// Returned by `peek` and `peek_pop` when the stack holds no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot peek: stack is empty")]
pub struct EmptyStackError;
