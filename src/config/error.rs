//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a sprinkles configuration is malformed.
///
/// These are programmer errors in the config: they are raised while the
/// config is validated or compiled, never while props are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No conditions were configured.
    #[error("at least one condition must be configured")]
    NoConditions,

    /// `defaultCondition` names a condition that isn't configured.
    #[error("default condition '{name}' is not one of the configured conditions")]
    UnknownDefaultCondition { name: String },

    /// A shorthand lists a name that is neither a property nor a shorthand.
    #[error("shorthand '{shorthand}' references undefined property '{target}'")]
    UnknownShorthandTarget { shorthand: String, target: String },

    /// Shorthands reference each other in a loop.
    #[error("cycle detected in shorthands: {}", path.join(" -> "))]
    ShorthandCycle { path: Vec<String> },

    /// A shorthand reuses the name of a dynamic or static property.
    #[error("shorthand '{name}' has the same name as a configured property")]
    ShorthandShadowsProperty { name: String },

    /// The config file could not be read.
    #[error("failed to read config \"{}\": {message}", path.display())]
    Read { path: PathBuf, message: String },

    /// The config file extension doesn't map to a known format.
    #[error("unsupported config format \"{}\" (expected .json, .yaml or .yml)", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The config document could not be deserialized.
    #[error("invalid {format} config: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },
}
