use thiserror::Error;

/// Faults found while interpreting an otherwise well-formed server reply.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("missing field `{0}` in server reply")]
    MissingField(&'static str),
    #[error("field `{0}` has no value at index {1}")]
    MissingEntry(&'static str, usize),
    #[error("malformed field `{0}`: {1}")]
    MalformedField(&'static str, String),
}
