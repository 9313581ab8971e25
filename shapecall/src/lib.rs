#![deny(missing_docs)]
//! # shapecall: umbrella crate
//!
//! One import surface for shape-directed dispatch: classify a list or dict
//! by its element kind, synthesize the remote procedure name for that
//! shape, and invoke it through a [`Transport`](prelude::Transport).
//! Member crates are re-exported behind feature flags, plus a `prelude`
//! for the happy path.
//!
//! ```no_run
//! use shapecall::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let dispatcher = Dispatcher::new(RemoteLibrary::new().library("TestKeywords"));
//! // The keyword's return value; a `FAIL` result arrives as a fault.
//! let returned = dispatcher.dispatch(&Value::list([1, 2, 3]), None).await?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "core")]
pub use shapecall_classify;
#[cfg(feature = "core")]
pub use shapecall_dispatch;
#[cfg(feature = "core")]
pub use shapecall_types;
#[cfg(feature = "xmlrpc")]
pub use shapecall_xmlrpc;

/// Happy-path imports for dispatching values.
pub mod prelude {
    #[cfg(feature = "core")]
    pub use shapecall_types::{Fault, Mapping, RemoteCallRequest, Transport, Value};

    #[cfg(feature = "core")]
    pub use shapecall_classify::{ContainerKind, ElementKind, ShapeDescriptor, classify};

    #[cfg(feature = "core")]
    pub use shapecall_dispatch::{DispatchError, Dispatcher, ProcedureName};

    #[cfg(feature = "xmlrpc")]
    pub use shapecall_xmlrpc::{
        KeywordFailure, KeywordResult, LibraryInformation, RemoteConfig, RemoteLibrary,
    };
}
