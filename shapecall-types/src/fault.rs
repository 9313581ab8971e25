//! Transport-reported fault.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A fault reported by a transport: the remote side rejected the call, the
/// procedure does not exist, or the request never completed.
///
/// Faults raised by the remote endpoint carry its own code and message
/// verbatim. Transports that fail before a response arrives use the
/// interoperability codes below.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[error("fault {code}: {message}")]
pub struct Fault {
    /// Numeric fault code.
    pub code: i32,
    /// Human-readable fault description.
    pub message: String,
}

impl Fault {
    /// Response could not be parsed.
    pub const PARSE_ERROR: i32 = -32700;
    /// Response parsed but did not have the expected structure.
    pub const INVALID_RESPONSE: i32 = -32600;
    /// Connection, HTTP status or timeout failure.
    pub const TRANSPORT_ERROR: i32 = -32300;
    /// Arguments the transport cannot put on the wire. Raised before sending.
    pub const INVALID_PARAMS: i32 = -32602;
    /// The remote procedure ran and reported its own failure.
    pub const APPLICATION_ERROR: i32 = -32500;

    /// Create a fault with the given code and message.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Shorthand for a [`Fault::TRANSPORT_ERROR`] fault.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(Self::TRANSPORT_ERROR, message)
    }

    /// Shorthand for a [`Fault::PARSE_ERROR`] fault.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(Self::PARSE_ERROR, message)
    }

    /// Shorthand for a [`Fault::INVALID_RESPONSE`] fault.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(Self::INVALID_RESPONSE, message)
    }

    /// Shorthand for a [`Fault::INVALID_PARAMS`] fault.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(Self::INVALID_PARAMS, message)
    }

    /// Shorthand for a [`Fault::APPLICATION_ERROR`] fault.
    pub fn application(message: impl Into<String>) -> Self {
        Self::new(Self::APPLICATION_ERROR, message)
    }

    /// Whether the fault was produced locally by the transport rather than
    /// reported by the remote endpoint.
    #[must_use]
    pub fn is_transport_level(&self) -> bool {
        matches!(
            self.code,
            Self::PARSE_ERROR
                | Self::INVALID_RESPONSE
                | Self::TRANSPORT_ERROR
                | Self::INVALID_PARAMS
        )
    }
}
