//! Classification failures.

use std::fmt;

use thiserror::Error;

/// Why a container's elements could not be given a single kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementFailure {
    /// The container has no elements to infer a kind from.
    Empty,
    /// No supported kind is shared by every element.
    Mixed,
}

impl fmt::Display for ElementFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("container is empty"),
            Self::Mixed => f.write_str("elements do not share a supported kind"),
        }
    }
}

/// A value that has no shape descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The value is neither a sequence nor a mapping.
    #[error("unsupported value type: {found} is neither a list nor a dict")]
    UnsupportedValueType {
        /// Variant name of the rejected value.
        found: &'static str,
    },

    /// The container is empty, or its elements are not uniformly one of the
    /// four supported kinds.
    #[error("unsupported element type: {reason}")]
    UnsupportedElementType {
        /// Which of the two failure cases applies.
        reason: ElementFailure,
    },
}
