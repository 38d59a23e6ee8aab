//! Class assignment for a single property.

use super::value::PropValue;
use crate::compile::{Binding, CompiledProperty};

/// Returns the class tokens a prop value activates for one property.
///
/// For every condition the value applies under:
///
/// - a static class for the exact value yields that class
/// - otherwise a variable binding yields the condition's scoping class, so
///   the rule reading the variable is active
/// - otherwise (static-only property, value not enumerated) nothing
///
/// Conditions the property wasn't compiled for are skipped.
pub fn assign_classes<'c>(
    property: &'c CompiledProperty,
    default_condition: &str,
    value: &PropValue,
) -> Vec<&'c str> {
    value
        .by_condition(default_condition)
        .filter_map(|(condition, raw)| {
            let entry = property.condition(condition)?;
            match entry.bind(raw)? {
                Binding::Class(class) => Some(class.class_name.as_str()),
                Binding::Variable(binding) => Some(binding.class_name.as_str()),
            }
        })
        .collect()
}
