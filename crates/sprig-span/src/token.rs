use std::fmt;

use text_size::{TextRange, TextSize};
use triomphe::Arc;

/// Payload of a [`Token`]: where it starts and what it spells.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct TokenData {
    pub offset: TextSize,
    pub lexeme: Box<str>,
}

/// An immutable lexical unit produced by a scanner.
///
/// Cloning a token is cheap and keeps its identity: syntax nodes reference tokens,
/// they never own a private copy. Two tokens scanned independently from the same
/// text are *equal* (see [`Token::is_equal`]) but not *identical* (see [`Token::ptr_eq`]).
#[derive(Clone)]
pub struct Token(Arc<TokenData>);

impl Token {
    pub fn new(offset: TextSize, lexeme: impl Into<Box<str>>) -> Self {
        Self(Arc::new(TokenData { offset, lexeme: lexeme.into() }))
    }

    pub fn offset(&self) -> TextSize {
        self.0.offset
    }

    pub fn len(&self) -> TextSize {
        TextSize::of(&*self.0.lexeme)
    }

    pub fn is_empty(&self) -> bool {
        self.0.lexeme.is_empty()
    }

    /// Offset one past the last character of the token.
    pub fn end(&self) -> TextSize {
        self.offset() + self.len()
    }

    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset(), self.len())
    }

    pub fn lexeme(&self) -> &str {
        &self.0.lexeme
    }

    pub fn data(&self) -> &TokenData {
        &self.0
    }

    /// Returns `true` if both handles point at the very same scanned token.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Token equality: same offset, same length and same text.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0 == *other.0
    }

    /// Compares text only, so `+` at offset 1 and `+` at offset 2 match.
    pub fn same_lexeme(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0.lexeme == other.0.lexeme
    }

    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", self.lexeme(), self.range())
    }
}
