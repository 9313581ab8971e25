//! Dispatch failures.

use shapecall_classify::{ClassifyError, ElementFailure};
use shapecall_types::Fault;
use thiserror::Error;

/// The one error a failed dispatch produces.
///
/// The first two variants are raised locally before any transport
/// interaction. [`DispatchError::RemoteFault`] carries the transport's fault
/// unchanged. None of them are retried.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// The value is neither a sequence nor a mapping.
    #[error("unsupported value type: {found} is neither a list nor a dict")]
    UnsupportedValueType {
        /// Variant name of the rejected value.
        found: &'static str,
    },

    /// The container is empty or its elements do not share a supported kind.
    #[error("unsupported element type: {reason}")]
    UnsupportedElementType {
        /// Which of the two failure cases applies.
        reason: ElementFailure,
    },

    /// The transport reported a fault.
    #[error("remote fault {}: {}", .0.code, .0.message)]
    RemoteFault(Fault),
}

impl DispatchError {
    /// The transport fault, if this is [`DispatchError::RemoteFault`].
    #[must_use]
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Self::RemoteFault(fault) => Some(fault),
            _ => None,
        }
    }

    /// Whether the error was raised before the transport was touched.
    #[must_use]
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::RemoteFault(_))
    }
}

impl From<ClassifyError> for DispatchError {
    fn from(err: ClassifyError) -> Self {
        match err {
            ClassifyError::UnsupportedValueType { found } => Self::UnsupportedValueType { found },
            ClassifyError::UnsupportedElementType { reason } => {
                Self::UnsupportedElementType { reason }
            }
        }
    }
}

impl From<Fault> for DispatchError {
    fn from(fault: Fault) -> Self {
        Self::RemoteFault(fault)
    }
}
