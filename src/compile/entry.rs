//! Compiled descriptors: what a property turns into under each condition.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The CSS variable a dynamic property writes under one condition, and the
/// class whose rule reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableBinding {
    /// Class scoping `property: var(<var_name>)` to the condition.
    pub class_name: String,
    /// Custom property carrying the runtime value.
    pub var_name: String,
}

/// One pre-baked class of a static property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticClass {
    /// Class setting the property to `value` under the condition.
    pub class_name: String,
    /// Literal CSS value written in the class body.
    pub value: String,
}

/// Everything a property compiles to under one condition.
///
/// A property configured as both dynamic and static carries both a
/// [`VariableBinding`] and a static class table here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionEntry {
    /// Variable binding, for dynamic properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic: Option<VariableBinding>,

    /// Lookup key to class, for static properties.
    ///
    /// Keys are literal values for array scales and `$alias` for alias scales.
    #[serde(default, rename = "static", skip_serializing_if = "IndexMap::is_empty")]
    pub statics: IndexMap<String, StaticClass>,
}

/// How one condition of a property resolves a given value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding<'a> {
    /// The value has its own pre-baked class.
    Class(&'a StaticClass),
    /// The value is injected through the property's variable.
    Variable(&'a VariableBinding),
}

impl ConditionEntry {
    /// Merges `other` into this entry, `other` winning on overlapping keys.
    ///
    /// The compiler merges the static pass into the dynamic pass, so static
    /// classes override dynamic ones for the same condition and value.
    pub fn merge(mut self, other: ConditionEntry) -> ConditionEntry {
        if other.dynamic.is_some() {
            self.dynamic = other.dynamic;
        }
        self.statics.extend(other.statics);
        self
    }

    /// Picks the binding for `value` under this condition.
    ///
    /// A static class for the exact value takes precedence; otherwise the
    /// variable binding is used. Returns `None` for a static-only property
    /// whose value isn't enumerated.
    pub fn bind(&self, value: &str) -> Option<Binding<'_>> {
        if let Some(class) = self.statics.get(value) {
            return Some(Binding::Class(class));
        }
        self.dynamic.as_ref().map(Binding::Variable)
    }
}

/// A property compiled across every condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledProperty {
    /// Property name as configured (`paddingLeft`).
    pub name: String,

    /// CSS property the generated rules set (`padding-left`).
    pub css_property: String,

    /// Condition name to compiled entry, in condition order.
    pub conditions: IndexMap<String, ConditionEntry>,

    /// Alias to token map used to translate `$alias` in dynamic values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<IndexMap<String, String>>,
}

impl CompiledProperty {
    /// Creates a property with no compiled conditions yet.
    pub fn new(name: impl Into<String>, css_property: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            css_property: css_property.into(),
            conditions: IndexMap::new(),
            tokens: None,
        }
    }

    /// Returns the compiled entry for a condition.
    pub fn condition(&self, name: &str) -> Option<&ConditionEntry> {
        self.conditions.get(name)
    }

    /// Whether any condition carries a variable binding.
    pub fn is_dynamic(&self) -> bool {
        self.conditions.values().any(|entry| entry.dynamic.is_some())
    }

    /// Whether any condition carries static classes.
    pub fn is_static(&self) -> bool {
        self.conditions.values().any(|entry| !entry.statics.is_empty())
    }

    /// Merges the compiled `other` pass into this one, condition by condition.
    ///
    /// See [`ConditionEntry::merge`] for the precedence on overlapping keys.
    /// Conditions only present in `other` are appended in its order.
    pub fn merge(mut self, other: CompiledProperty) -> CompiledProperty {
        for (condition, entry) in other.conditions {
            match self.conditions.get_mut(&condition) {
                Some(existing) => *existing = std::mem::take(existing).merge(entry),
                None => {
                    self.conditions.insert(condition, entry);
                }
            }
        }
        if other.tokens.is_some() {
            self.tokens = other.tokens;
        }
        self
    }
}
