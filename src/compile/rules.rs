//! Flattened rule view of a compiled config, for stylesheet emission.

use std::borrow::Cow;

use super::CompiledConfig;
use crate::config::ConditionSpec;

/// One atomic rule: a class setting one CSS property under one condition.
///
/// Turning rules into actual CSS text (selectors, at-rules, escaping) is
/// up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule<'a> {
    /// Class the rule is attached to.
    pub class_name: &'a str,
    /// Condition the rule is scoped to.
    pub condition: &'a str,
    /// How the condition scopes the rule.
    pub scope: &'a ConditionSpec,
    /// CSS property being set (`padding-left`).
    pub property: &'a str,
    /// Value: `var(--...)` for dynamic bindings, the literal for static classes.
    pub value: Cow<'a, str>,
}

impl CompiledConfig {
    /// Lists every rule the compiled config needs in a stylesheet.
    ///
    /// Rules come property by property, then condition by condition; within
    /// a condition the variable rule comes before the static classes. Later
    /// conditions therefore win source order for equal specificity.
    pub fn rules(&self) -> Vec<StyleRule<'_>> {
        let mut rules = Vec::new();

        for property in self.properties.values() {
            for (condition, entry) in &property.conditions {
                let Some(scope) = self.conditions.get(condition) else {
                    continue;
                };

                if let Some(binding) = &entry.dynamic {
                    rules.push(StyleRule {
                        class_name: &binding.class_name,
                        condition,
                        scope,
                        property: &property.css_property,
                        value: Cow::Owned(format!("var({})", binding.var_name)),
                    });
                }

                for class in entry.statics.values() {
                    rules.push(StyleRule {
                        class_name: &class.class_name,
                        condition,
                        scope,
                        property: &property.css_property,
                        value: Cow::Borrowed(class.value.as_str()),
                    });
                }
            }
        }

        rules
    }
}

#[cfg(test)]
mod tests {
    use crate::compile::CompiledConfig;
    use crate::config::{ConditionSpec, DynamicScale, SprinklesConfig};

    #[test]
    fn test_rules_cover_every_binding() {
        let config = SprinklesConfig::new("base")
            .condition("base", ConditionSpec::new())
            .condition("wide", ConditionSpec::new().media("(min-width: 800px)"))
            .dynamic("backgroundColor", DynamicScale::Unrestricted)
            .static_values("display", ["none", "grid"]);
        let compiled = CompiledConfig::build(&config).unwrap();

        let rules = compiled.rules();
        // 2 conditions x (1 dynamic + 2 static)
        assert_eq!(rules.len(), 6);

        let first = &rules[0];
        assert_eq!(first.class_name, "backgroundColor-base");
        assert_eq!(first.property, "background-color");
        assert_eq!(first.value, "var(--backgroundColor-base)");
        assert!(first.scope.is_unscoped());

        let last = rules.last().unwrap();
        assert_eq!(last.class_name, "display-wide-grid");
        assert_eq!(last.condition, "wide");
        assert_eq!(last.value, "grid");
        assert_eq!(last.scope.media.as_deref(), Some("(min-width: 800px)"));
    }

    #[test]
    fn test_mixed_property_emits_variable_then_classes() {
        let config = SprinklesConfig::new("base")
            .condition("base", ConditionSpec::new())
            .dynamic("gap", DynamicScale::Unrestricted)
            .static_aliases("gap", [("sm", "4px")]);
        let compiled = CompiledConfig::build(&config).unwrap();

        let classes: Vec<&str> = compiled.rules().iter().map(|r| r.class_name).collect();
        assert_eq!(classes, vec!["gap-base", "gap-base-sm"]);
    }
}
