//! Compilation of dynamic properties.

use indexmap::IndexMap;

use super::entry::{CompiledProperty, ConditionEntry, VariableBinding};
use super::ident::IdentAllocator;
use crate::config::{ConditionSpec, DynamicScale};
use crate::util::css_property_name;

/// Compiles a dynamic property into one variable binding per condition.
///
/// Each condition gets a custom property and a class whose rule sets the
/// real property to `var(<custom property>)`. A token scale is recorded on
/// the result for value translation but doesn't add bindings: there is one
/// variable per condition however many aliases the scale has.
pub fn compile_dynamic(
    property: &str,
    scale: &DynamicScale,
    conditions: &IndexMap<String, ConditionSpec>,
    idents: &mut IdentAllocator,
) -> CompiledProperty {
    let mut compiled = CompiledProperty::new(property, css_property_name(property));

    for condition in conditions.keys() {
        let binding = VariableBinding {
            class_name: idents.class_name(&[property, condition.as_str()]),
            var_name: idents.var_name(&[property, condition.as_str()]),
        };
        compiled.conditions.insert(
            condition.clone(),
            ConditionEntry {
                dynamic: Some(binding),
                ..Default::default()
            },
        );
    }

    compiled.tokens = scale.token_map().cloned();

    tracing::trace!(
        property,
        conditions = compiled.conditions.len(),
        tokens = compiled.tokens.as_ref().map_or(0, |t| t.len()),
        "compiled dynamic property"
    );
    compiled
}
