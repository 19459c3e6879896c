//! Ubiquitous types for error management.

use std::io::Error as IoError;

use thiserror::Error;

use crate::record::Format;

#[derive(Debug, Error)]
/// The main error type for the `seqrecord` crate.
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("unexpected end of input in {0} record started at line {1}")]
    TruncatedRecord(Format, usize),
    #[error("invalid `{0}` field on line {1}")]
    MalformedField(&'static str, usize, #[source] InvalidValue),
    #[error("unknown controlled vocabulary `{0}`")]
    UnknownVocabulary(String),
}

impl Error {
    pub fn malformed<S: Into<String>>(field: &'static str, line: usize, value: S) -> Self {
        Error::MalformedField(field, line, InvalidValue(value.into()))
    }
}

/// The main result type for the `seqrecord` crate.
pub type Result<T> = std::result::Result<T, Error>;

// ---------------------------------------------------------------------------

#[derive(Default, Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid value: {0:?}")]
/// The error type for types with constrained values.
pub struct InvalidValue(pub String);

impl<S: Into<String>> From<S> for InvalidValue {
    fn from(s: S) -> Self {
        InvalidValue(s.into())
    }
}
