use std::ops::Range;

use thiserror::Error;

/// The lexer could not classify a byte sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized token at byte {}: {snippet:?}", .span.start)]
pub struct LexError {
    pub span: Range<usize>,
    pub snippet: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MinifyError {
    /// The input is not lexically valid Zig. Nothing is emitted; the partial
    /// buffer is dropped rather than flushed.
    #[error("lexically invalid input: {0}")]
    InvalidSource(#[from] LexError),

    /// Boundary-layer bound, checked before any lexing happens.
    #[error("input is {len} bytes, over the {max} byte limit")]
    InputTooLarge { len: usize, max: usize },
}
