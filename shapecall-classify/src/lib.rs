//! Shape classification for dispatchable values.
//!
//! A value is dispatchable when it is a sequence or a mapping whose
//! elements (for a mapping, whose values) are **all** of one of four kinds.
//! Kinds are tried in the fixed order of [`ElementKind::CHECK_ORDER`]:
//!
//! | Order | Kind | Label |
//! |-------|------|-------|
//! | 1 | [`ElementKind::Integer`] | `Int32` |
//! | 2 | [`ElementKind::Boolean`] | `Boolean` |
//! | 3 | [`ElementKind::FloatingPoint`] | `Double` |
//! | 4 | [`ElementKind::String`] | `String` |
//!
//! Everything here is pure. Failures are returned as [`ClassifyError`].

#![deny(missing_docs)]

pub mod classify;
pub mod error;
pub mod kind;

pub use classify::{classify, classify_container, classify_element_kind, is_mapping, is_sequence};
pub use error::{ClassifyError, ElementFailure};
pub use kind::{ContainerKind, ElementKind, ShapeDescriptor};
