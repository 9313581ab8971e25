//! XML-RPC document encoding and decoding.
//!
//! Covers the subset of XML-RPC that Robot Framework remote servers speak:
//! `methodCall` and `methodResponse` documents with `int`/`i4`/`i8`,
//! `boolean`, `double`, `string` (typed or bare text), `base64`, `nil`,
//! `dateTime.iso8601`, `array` and `struct` values.

mod decode;
mod encode;

use shapecall_types::{Fault, Value};
use thiserror::Error;

pub use decode::{decode_call, decode_response};
pub use encode::{encode_call, encode_response};

/// A decoded `methodResponse`.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    /// The single return value from `<params>`.
    Success(Value),
    /// The `<fault>` struct's `faultCode` and `faultString`.
    Fault(Fault),
}

impl MethodResponse {
    /// Convert into the transport result shape.
    pub fn into_result(self) -> Result<Value, Fault> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Fault(fault) => Err(fault),
        }
    }
}

/// Errors from encoding or decoding an XML-RPC document.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The document is not well-formed XML.
    #[error("xml syntax error: {0}")]
    Syntax(String),

    /// An element appeared where a different one was required.
    #[error("expected <{expected}>, found <{found}>")]
    Unexpected {
        /// Element name required at this position.
        expected: &'static str,
        /// Element name actually present.
        found: String,
    },

    /// A required child element is absent.
    #[error("missing <{0}> element")]
    Missing(&'static str),

    /// A scalar element's text does not parse as its declared type.
    #[error("invalid <{tag}> content: {text:?}")]
    InvalidScalar {
        /// The scalar's tag name.
        tag: String,
        /// The offending text.
        text: String,
    },

    /// A `<value>` holds an element that is not a known XML-RPC type.
    #[error("unknown value type <{0}>")]
    UnknownType(String),

    /// A `<fault>` value lacks an integer `faultCode` or a string `faultString`.
    #[error("malformed fault: {0}")]
    MalformedFault(String),

    /// The document nests elements deeper than the decoder accepts.
    #[error("document nested deeper than {0} elements")]
    TooDeep(usize),

    /// A double is NaN or infinite, which `<double>` cannot carry.
    #[error("cannot encode non-finite double {0}")]
    NonFiniteDouble(String),
}

/// Syntax errors are parse errors and unencodable arguments are invalid
/// params; everything else parsed but had the wrong structure.
impl From<CodecError> for Fault {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Syntax(_) => Fault::parse(err.to_string()),
            CodecError::NonFiniteDouble(_) => Fault::invalid_params(err.to_string()),
            _ => Fault::invalid_response(err.to_string()),
        }
    }
}
