//! # Rainbow Sprinkles - Atomic CSS for conditional style props
//!
//! `rainbow-sprinkles` compiles a declarative description of style properties
//! into atomic classes and CSS variables, then resolves style props against
//! the compiled result at every render.
//!
//! ## Concepts
//!
//! - **Conditions**: named contexts (breakpoints, pseudo-states) a value can
//!   target. One of them is the default, used for bare values.
//! - **Dynamic properties**: any value is accepted and injected at runtime
//!   through one CSS variable per condition.
//! - **Static properties**: a finite set of values, each pre-baked into one
//!   class per condition.
//! - **Shorthands**: aliases applying several properties in order.
//!
//! ## Two Phases
//!
//! 1. [`CompiledConfig::build`] turns a [`SprinklesConfig`] into class and
//!    variable bindings once. The result is serializable, and
//!    [`CompiledConfig::rules`] lists the rules a stylesheet must contain.
//! 2. [`get_box_props`] resolves a props collection into a class name and
//!    inline variable overrides, as many times as needed.
//!
//! [`RainbowSprinkles`] bundles both, along with the [`PropertySet`] used
//! to split arbitrary props into sprinkle props and the rest.
//!
//! ## Quick Start
//!
//! ```rust
//! use rainbow_sprinkles::{ConditionSpec, DynamicScale, PropValue, RainbowSprinkles, SprinklesConfig};
//!
//! let config = SprinklesConfig::new("default")
//!     .condition("default", ConditionSpec::new())
//!     .condition("hover", ConditionSpec::new().selector("&:hover"))
//!     .dynamic("color", DynamicScale::Unrestricted)
//!     .static_values("display", ["block", "flex"]);
//!
//! let sprinkles = RainbowSprinkles::new(&config).unwrap();
//!
//! let resolved = sprinkles.get_box_props([
//!     ("color", PropValue::from("red")),
//!     ("display", PropValue::from("flex")),
//! ]);
//! assert_eq!(resolved.class_name, "color-default display-default-flex");
//! assert_eq!(resolved.style.unwrap()["--color-default"], "red");
//!
//! // Values outside a static scale are dropped, never an error
//! let resolved = sprinkles.get_box_props([("display", PropValue::from("grid"))]);
//! assert_eq!(resolved.class_name, "");
//! assert!(resolved.style.is_none());
//! ```
//!
//! ## Loading Configs
//!
//! Configs deserialize from JSON or YAML with [`SprinklesConfig::from_json_str`],
//! [`SprinklesConfig::from_yaml_str`] and [`SprinklesConfig::from_path`].
//! Structural mistakes (a default condition that doesn't exist, shorthands
//! pointing at unknown properties or at each other) are reported as a
//! [`ConfigError`] before anything is compiled.

pub mod compile;
pub mod config;
mod extract;
pub mod resolve;
mod sprinkles;
mod util;

pub use compile::{
    Binding, CompiledConfig, CompiledProperty, ConditionEntry, StaticClass, StyleRule,
    VariableBinding,
};
pub use config::{ConditionSpec, ConfigError, DynamicScale, SprinklesConfig, StaticScale};
pub use extract::{ExtractedProps, PropertySet};
pub use resolve::{
    assign_classes, assign_inline_vars, get_box_props, get_box_props_json, translate_tokens,
    BoxProps, PropValue,
};
pub use sprinkles::RainbowSprinkles;
pub use util::css_property_name;

/// Validates and compiles `config` into a [`RainbowSprinkles`] bundle.
///
/// Shorthand for [`RainbowSprinkles::new`].
pub fn create_rainbow_sprinkles(config: &SprinklesConfig) -> Result<RainbowSprinkles, ConfigError> {
    RainbowSprinkles::new(config)
}
