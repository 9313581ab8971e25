//! Type-directed dispatch over a remote-procedure transport.
//!
//! [`Dispatcher::dispatch`] runs a strict pipeline:
//!
//! 1. classify the value with [`shapecall_classify::classify`]
//! 2. synthesize a [`ProcedureName`] from the shape
//! 3. send the value as the single positional argument, named arguments
//!    passed through
//! 4. return the transport's payload unmodified, or its fault as
//!    [`DispatchError::RemoteFault`]
//!
//! A naming mismatch on the remote side is a hard failure. There is no
//! retry and no alternate-name fallback.

#![deny(missing_docs)]

pub mod dispatcher;
pub mod error;
pub mod name;

pub use dispatcher::{Dispatcher, build_request, resolve};
pub use error::DispatchError;
pub use name::{NAME_SUFFIX, ProcedureName};

pub use shapecall_classify::{is_mapping, is_sequence};
