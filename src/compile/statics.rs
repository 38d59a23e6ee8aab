//! Compilation of static properties.

use indexmap::IndexMap;

use super::entry::{CompiledProperty, ConditionEntry, StaticClass};
use super::ident::IdentAllocator;
use crate::config::{ConditionSpec, StaticScale};
use crate::util::css_property_name;

/// Compiles a static property into one class per condition and value.
///
/// Each class sets the real property to the literal value, scoped to its
/// condition. Values outside the scale get no class.
pub fn compile_static(
    property: &str,
    scale: &StaticScale,
    conditions: &IndexMap<String, ConditionSpec>,
    idents: &mut IdentAllocator,
) -> CompiledProperty {
    let mut compiled = CompiledProperty::new(property, css_property_name(property));
    let entries = scale.entries();

    for condition in conditions.keys() {
        let mut entry = ConditionEntry::default();
        for (key, value) in &entries {
            let class = StaticClass {
                class_name: idents.class_name(&[property, condition.as_str(), key.as_str()]),
                value: (*value).to_string(),
            };
            entry.statics.insert(key.clone(), class);
        }
        compiled.conditions.insert(condition.clone(), entry);
    }

    tracing::trace!(
        property,
        conditions = compiled.conditions.len(),
        values = entries.len(),
        "compiled static property"
    );
    compiled
}
