//! Inline CSS variable assignment for dynamic properties.

use std::borrow::Cow;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::value::PropValue;
use crate::compile::{Binding, CompiledProperty};
use crate::config::ALIAS_PREFIX;

/// `$alias` or `-$alias` inside a value. Aliases may contain dashes but
/// don't end with one, so `$a-$b` reads as `$a` followed by `-$b`.
static ALIAS_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(-)?\$([\w-]*\w)").expect("alias reference pattern is valid"));

/// Computes the variable overrides a prop value writes for one property.
///
/// For every condition the value applies under, the condition's binding is
/// chosen with [`ConditionEntry::bind`](crate::compile::ConditionEntry::bind).
/// Variable bindings map the variable name to the value, with `$alias`
/// references translated through the property's token scale. Conditions
/// bound to a static class, conditions the property wasn't compiled for,
/// and unenumerated values of static-only properties contribute nothing.
pub fn assign_inline_vars(
    property: &CompiledProperty,
    default_condition: &str,
    value: &PropValue,
) -> IndexMap<String, String> {
    let mut vars = IndexMap::new();
    for (condition, raw) in value.by_condition(default_condition) {
        let Some(entry) = property.condition(condition) else {
            continue;
        };
        if let Some(Binding::Variable(binding)) = entry.bind(raw) {
            let resolved = translate_tokens(raw, property.tokens.as_ref());
            vars.insert(binding.var_name.clone(), resolved.into_owned());
        }
    }
    vars
}

/// Replaces `$alias` references in `value` with their tokens.
///
/// `-$alias` becomes `calc(<token> * -1)`. References to aliases missing
/// from the scale are left as written.
///
/// # Example
///
/// ```rust
/// use indexmap::IndexMap;
/// use rainbow_sprinkles::translate_tokens;
///
/// let mut tokens = IndexMap::new();
/// tokens.insert("gray".to_string(), "var(--gray)".to_string());
///
/// assert_eq!(translate_tokens("1px solid $gray", Some(&tokens)), "1px solid var(--gray)");
/// assert_eq!(translate_tokens("$blue", Some(&tokens)), "$blue");
/// ```
pub fn translate_tokens<'a>(
    value: &'a str,
    tokens: Option<&IndexMap<String, String>>,
) -> Cow<'a, str> {
    let Some(tokens) = tokens else {
        return Cow::Borrowed(value);
    };
    if !value.contains(ALIAS_PREFIX) {
        return Cow::Borrowed(value);
    }

    ALIAS_REFERENCE.replace_all(value, |caps: &Captures| match tokens.get(&caps[2]) {
        Some(token) if caps.get(1).is_some() => format!("calc({} * -1)", token),
        Some(token) => token.clone(),
        None => caps[0].to_string(),
    })
}
