//! Resolution of sprinkle props into classes and inline variables.
//!
//! This module provides the per-render half of the system:
//!
//! - [`PropValue`]: a bare or per-condition prop value
//! - [`assign_classes`]: class tokens for one property and value
//! - [`assign_inline_vars`]: variable overrides for one property and value
//! - [`get_box_props`]: both, accumulated over a whole props collection
//!
//! # Resolution Rules
//!
//! Props are visited in the order given. Each configured prop applies the
//! descriptors [`CompiledConfig::lookup`] returns, in order, so a shorthand
//! behaves exactly like setting its properties one after the other: a later
//! property overwrites the variable an earlier one wrote.
//!
//! Class tokens are concatenated without deduplication. Unknown prop names,
//! unknown conditions and values a static scale doesn't enumerate are
//! dropped silently: resolution never fails.

mod classes;
mod value;
mod vars;

pub use classes::assign_classes;
pub use value::PropValue;
pub use vars::{assign_inline_vars, translate_tokens};

use std::borrow::Borrow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::compile::CompiledConfig;

/// The outcome of resolving a props collection.
///
/// Serializes as `{"className": "...", "style": {...}}`, with `style`
/// omitted when no variable was written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxProps {
    /// Space-separated class tokens.
    pub class_name: String,

    /// Variable name to value; `None` when nothing was written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<IndexMap<String, String>>,
}

impl BoxProps {
    /// Iterates over the individual class tokens.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class_name.split_whitespace()
    }
}

/// Resolves `props` against a compiled config.
///
/// # Example
///
/// ```rust
/// use rainbow_sprinkles::{get_box_props, CompiledConfig, ConditionSpec, DynamicScale, PropValue, SprinklesConfig};
///
/// let config = SprinklesConfig::new("default")
///     .condition("default", ConditionSpec::new())
///     .condition("hover", ConditionSpec::new().selector("&:hover"))
///     .dynamic("color", DynamicScale::Unrestricted);
/// let compiled = CompiledConfig::build(&config).unwrap();
///
/// let props = [("color", PropValue::conditional([("hover", "blue")]))];
/// let resolved = get_box_props(&compiled, props);
///
/// assert_eq!(resolved.class_name, "color-hover");
/// assert_eq!(resolved.style.unwrap()["--color-hover"], "blue");
/// ```
pub fn get_box_props<I, K, V>(config: &CompiledConfig, props: I) -> BoxProps
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Borrow<PropValue>,
{
    let mut class_names: Vec<&str> = Vec::new();
    let mut style: IndexMap<String, String> = IndexMap::new();

    for (name, value) in props {
        let Some(descriptors) = config.lookup(name.as_ref()) else {
            continue;
        };
        let value = value.borrow();
        for property in descriptors {
            class_names.extend(assign_classes(property, &config.default_condition, value));
            style.extend(assign_inline_vars(property, &config.default_condition, value));
        }
    }

    BoxProps {
        class_name: class_names.join(" "),
        style: (!style.is_empty()).then_some(style),
    }
}

/// Resolves a JSON props object against a compiled config.
///
/// Values that aren't strings, numbers or condition objects are ignored,
/// as is anything that isn't an object.
pub fn get_box_props_json(config: &CompiledConfig, props: &serde_json::Value) -> BoxProps {
    let Some(object) = props.as_object() else {
        return BoxProps::default();
    };
    get_box_props(
        config,
        object
            .iter()
            .filter(|(name, _)| config.is_configured(name))
            .filter_map(|(name, value)| PropValue::from_json(value).map(|value| (name, value))),
    )
}
