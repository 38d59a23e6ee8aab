//! Conditions: named contexts under which a property may take a different value.

use serde::{Deserialize, Serialize};

/// How a condition scopes its rules in the generated stylesheet.
///
/// The compiler only carries this through to the compiled config; turning it
/// into selectors and at-rules is left to whatever emits the stylesheet.
/// An empty spec means the rule applies unconditionally.
///
/// ```yaml
/// conditions:
///   mobile: {}
///   desktop:
///     "@media": "screen and (min-width: 1024px)"
///   hover:
///     selector: "&:hover"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSpec {
    /// Media query the rule is nested in.
    #[serde(
        rename = "@media",
        alias = "media",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub media: Option<String>,

    /// Feature query the rule is nested in.
    #[serde(
        rename = "@supports",
        alias = "supports",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub supports: Option<String>,

    /// Selector template, `&` standing for the generated class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

impl ConditionSpec {
    /// A condition that applies without any scoping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scopes the condition to a media query.
    pub fn media(mut self, query: impl Into<String>) -> Self {
        self.media = Some(query.into());
        self
    }

    /// Scopes the condition to a feature query.
    pub fn supports(mut self, query: impl Into<String>) -> Self {
        self.supports = Some(query.into());
        self
    }

    /// Scopes the condition to a selector such as `&:hover`.
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Whether the condition applies unconditionally.
    pub fn is_unscoped(&self) -> bool {
        self.media.is_none() && self.supports.is_none() && self.selector.is_none()
    }
}
