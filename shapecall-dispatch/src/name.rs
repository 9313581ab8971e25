//! Procedure-name synthesis.
//!
//! ```text
//! ProcedureName  ::= ContainerLabel ElementLabel " ParameterType"
//! ContainerLabel ::= "List" | "Dictionary"
//! ElementLabel   ::= "Int32" | "Boolean" | "Double" | "String"
//! ```
//!
//! The grammar is wire-visible: existing remote libraries register their
//! keywords under exactly these names.

use std::fmt;

use shapecall_classify::ShapeDescriptor;

/// Suffix shared by every synthesized name, including the leading space.
pub const NAME_SUFFIX: &str = " ParameterType";

/// The remote procedure matching a [`ShapeDescriptor`]. Recomputed on every
/// dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProcedureName(String);

impl ProcedureName {
    /// Build the name for `shape`.
    #[must_use]
    pub fn for_shape(shape: ShapeDescriptor) -> Self {
        Self(format!(
            "{}{}{NAME_SUFFIX}",
            shape.container.label(),
            shape.element.label()
        ))
    }

    /// Borrow the name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProcedureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ProcedureName> for String {
    fn from(name: ProcedureName) -> Self {
        name.0
    }
}

impl AsRef<str> for ProcedureName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
