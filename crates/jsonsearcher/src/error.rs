use core::fmt;

use crate::ValueType;

/// Failure to decode the input into a JSON document.
#[derive(Debug)]
pub struct DecodeError {
    source: serde_json::Error,
}

/// The category of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The input is not valid JSON, or nests deeper than the decoder allows.
    Syntax,
    /// The input ended before a complete JSON value was read.
    Eof,
    /// Reading the input failed.
    Io,
}

impl DecodeError {
    pub(crate) fn new(source: serde_json::Error) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn kind(&self) -> DecodeErrorKind {
        match self.source.classify() {
            // Any valid JSON fits a `serde_json::Value`, data errors do not occur
            serde_json::error::Category::Syntax | serde_json::error::Category::Data => {
                DecodeErrorKind::Syntax
            }
            serde_json::error::Category::Eof => DecodeErrorKind::Eof,
            serde_json::error::Category::Io => DecodeErrorKind::Io,
        }
    }

    /// One-based line at which decoding stopped. Zero for I/O failures.
    #[must_use]
    pub fn line(&self) -> usize {
        self.source.line()
    }

    /// One-based column at which decoding stopped. Zero for I/O failures.
    #[must_use]
    pub fn column(&self) -> usize {
        self.source.column()
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid JSON document: {}", self.source)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// A typed accessor was called on a result of a different type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMismatch {
    /// The type the accessor requires.
    pub expected: ValueType,
    /// The type of the result, `None` if nothing was found.
    pub found: Option<ValueType>,
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.found {
            Some(found) => write!(f, "Expected {} result, found {}", self.expected, found),
            None => write!(f, "Expected {} result, found nothing", self.expected),
        }
    }
}

impl std::error::Error for TypeMismatch {}
