//! # shapecall-types: values, faults and the transport seam
//!
//! Shared vocabulary for shape-directed remote calls:
//!
//! | Type | What it is |
//! |------|-----------|
//! | [`Value`] | Closed union of everything a remote call can carry |
//! | [`Fault`] | A transport-reported failure (`code` + `message`) |
//! | [`RemoteCallRequest`] | Procedure name plus positional and named arguments |
//! | [`Transport`] | The request/response channel a dispatcher is given |
//!
//! The transport is always injected by the caller. Nothing in this crate
//! holds global state or opens connections.

#![deny(missing_docs)]

pub mod fault;
pub mod transport;
pub mod value;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use fault::Fault;
pub use transport::{RemoteCallRequest, Transport};
pub use value::{Mapping, Value};
