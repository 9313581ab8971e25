//! The ordered predicate chain from a value to its shape.

use shapecall_types::Value;

use crate::error::{ClassifyError, ElementFailure};
use crate::kind::{ContainerKind, ElementKind, ShapeDescriptor};

/// Container shape of `value`, or `None` for anything that is not a
/// container (scalars, nil, binary).
#[must_use]
pub fn classify_container(value: &Value) -> Option<ContainerKind> {
    match value {
        Value::List(_) => Some(ContainerKind::Sequence),
        Value::Dict(_) => Some(ContainerKind::Mapping),
        _ => None,
    }
}

/// Whether `value` is a sequence.
#[must_use]
pub fn is_sequence(value: &Value) -> bool {
    classify_container(value) == Some(ContainerKind::Sequence)
}

/// Whether `value` is a mapping.
#[must_use]
pub fn is_mapping(value: &Value) -> bool {
    classify_container(value) == Some(ContainerKind::Mapping)
}

/// The first kind in [`ElementKind::CHECK_ORDER`] that **every** element
/// satisfies.
///
/// Fails when there are no elements or when no kind is shared by all of
/// them. Nested containers, nil and binary values never satisfy a kind.
pub fn classify_element_kind<'a, I>(elements: I) -> Result<ElementKind, ClassifyError>
where
    I: IntoIterator<Item = &'a Value>,
    I::IntoIter: Clone,
{
    let elements = elements.into_iter();
    if elements.clone().next().is_none() {
        return Err(ClassifyError::UnsupportedElementType {
            reason: ElementFailure::Empty,
        });
    }

    ElementKind::CHECK_ORDER
        .into_iter()
        .find(|kind| elements.clone().all(|element| kind.matches(element)))
        .ok_or(ClassifyError::UnsupportedElementType {
            reason: ElementFailure::Mixed,
        })
}

/// Classify `value` into a [`ShapeDescriptor`].
///
/// For a mapping the values are scanned; keys are strings by construction.
pub fn classify(value: &Value) -> Result<ShapeDescriptor, ClassifyError> {
    let (container, element) = match value {
        Value::List(items) => (ContainerKind::Sequence, classify_element_kind(items)?),
        Value::Dict(map) => (ContainerKind::Mapping, classify_element_kind(map.values())?),
        other => {
            return Err(ClassifyError::UnsupportedValueType {
                found: other.kind_name(),
            });
        }
    };
    Ok(ShapeDescriptor::new(container, element))
}
