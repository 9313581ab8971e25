#![deny(missing_docs)]
//! XML-RPC transport for Robot Framework remote keyword libraries.
//!
//! [`RemoteLibrary`] implements [`shapecall_types::Transport`] over HTTP:
//! a dispatched procedure name becomes the keyword passed to
//! `run_keyword`, and capability listing maps to
//! `get_library_information`.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`codec`] | `methodCall` / `methodResponse` encoding and decoding |
//! | [`keyword`] | Typed `run_keyword` and library-information results |
//! | [`config`] | [`RemoteConfig`] |
//!
//! Failures never panic. Server faults pass through verbatim; everything
//! else becomes a [`shapecall_types::Fault`] with one of the
//! interoperability codes.

mod client;
pub mod codec;
pub mod config;
mod error;
pub mod keyword;

pub use client::RemoteLibrary;
pub use codec::{CodecError, MethodResponse};
pub use config::{DEFAULT_BASE_URL, RemoteConfig};
pub use keyword::{
    KeywordFailure, KeywordInfo, KeywordResult, KeywordStatus, LibraryInformation,
    ResultFormatError,
};
