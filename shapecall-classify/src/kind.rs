//! Container and element kinds, and the descriptor that pairs them.

use std::fmt;

use shapecall_types::Value;

/// The two dispatchable container shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Ordered, indexable, non-keyed collection.
    Sequence,
    /// Collection keyed by strings.
    Mapping,
}

impl ContainerKind {
    /// Wire label used as the first half of a procedure name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sequence => "List",
            Self::Mapping => "Dictionary",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four element kinds a container can be uniformly made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Whole numbers.
    Integer,
    /// `true` / `false`.
    Boolean,
    /// Floating-point numbers.
    FloatingPoint,
    /// Text.
    String,
}

impl ElementKind {
    /// The order kinds are tried in. The first kind every element satisfies
    /// wins. Booleans and integers are disjoint in [`Value`], so no outcome
    /// depends on it today; do not rearrange it.
    pub const CHECK_ORDER: [Self; 4] = [
        Self::Integer,
        Self::Boolean,
        Self::FloatingPoint,
        Self::String,
    ];

    /// Wire label used as the second half of a procedure name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Integer => "Int32",
            Self::Boolean => "Boolean",
            Self::FloatingPoint => "Double",
            Self::String => "String",
        }
    }

    /// Whether `value` is of this kind.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::Integer, Value::Integer(_))
                | (Self::Boolean, Value::Boolean(_))
                | (Self::FloatingPoint, Value::Double(_))
                | (Self::String, Value::String(_))
        )
    }

    const fn robot_name(self) -> &'static str {
        match self {
            Self::Integer => "int",
            Self::Boolean => "boolean",
            Self::FloatingPoint => "double",
            Self::String => "string",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The dispatch-relevant shape of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeDescriptor {
    /// Outer container.
    pub container: ContainerKind,
    /// Kind shared by every element (for a mapping, every value).
    pub element: ElementKind,
}

impl ShapeDescriptor {
    /// Pair a container with an element kind.
    #[must_use]
    pub const fn new(container: ContainerKind, element: ElementKind) -> Self {
        Self { container, element }
    }

    /// Robot Framework's type string for this shape, e.g. `list[int]` or
    /// `dict[string, double]`.
    #[must_use]
    pub fn robot_type(&self) -> String {
        match self.container {
            ContainerKind::Sequence => format!("list[{}]", self.element.robot_name()),
            ContainerKind::Mapping => format!("dict[string, {}]", self.element.robot_name()),
        }
    }
}
