//! Merging of compiled passes and shorthand expansion.
//!
//! # Precedence
//!
//! A property may be declared both as dynamic and as static. The two passes
//! are merged condition by condition with the static pass applied last, so
//! on an overlapping condition the static class table sits next to the
//! variable binding and [`ConditionEntry::bind`](super::ConditionEntry::bind)
//! prefers a matching static class over the variable. Values the static
//! scale doesn't enumerate still fall back to the variable.

use indexmap::IndexMap;

use super::entry::CompiledProperty;
use crate::config::ConfigError;

/// Merges the dynamic and static passes into one descriptor per property.
///
/// Properties keep the order of the dynamic pass, followed by properties
/// that are only static, in the order of the static pass.
pub fn merge_properties(
    dynamic: IndexMap<String, CompiledProperty>,
    statics: IndexMap<String, CompiledProperty>,
) -> IndexMap<String, CompiledProperty> {
    let mut merged = dynamic;
    for (name, compiled) in statics {
        match merged.get_mut(&name) {
            Some(existing) => *existing = std::mem::take(existing).merge(compiled),
            None => {
                merged.insert(name, compiled);
            }
        }
    }
    merged
}

/// Expands every shorthand to the ordered list of properties it sets.
///
/// Nested shorthands are expanded in place, so `{a: [x, inner], inner:
/// [y, z]}` expands `a` to `[x, y, z]`. Order is kept because later
/// properties overwrite earlier ones on shared conditions when resolved.
///
/// # Errors
///
/// - [`ConfigError::UnknownShorthandTarget`] if a target is neither a
///   property nor a shorthand
/// - [`ConfigError::ShorthandCycle`] if a shorthand expands into itself
pub fn expand_shorthands<F>(
    shorthands: &IndexMap<String, Vec<String>>,
    is_property: F,
) -> Result<IndexMap<String, Vec<String>>, ConfigError>
where
    F: Fn(&str) -> bool,
{
    let mut expanded = IndexMap::with_capacity(shorthands.len());
    for name in shorthands.keys() {
        let mut path = vec![name.clone()];
        let mut targets = Vec::new();
        expand_into(name, shorthands, &is_property, &mut path, &mut targets)?;
        expanded.insert(name.clone(), targets);
    }
    Ok(expanded)
}

fn expand_into<F>(
    name: &str,
    shorthands: &IndexMap<String, Vec<String>>,
    is_property: &F,
    path: &mut Vec<String>,
    out: &mut Vec<String>,
) -> Result<(), ConfigError>
where
    F: Fn(&str) -> bool,
{
    let Some(targets) = shorthands.get(name) else {
        return Ok(());
    };

    for target in targets {
        if is_property(target) {
            out.push(target.clone());
            continue;
        }

        if !shorthands.contains_key(target) {
            return Err(ConfigError::UnknownShorthandTarget {
                shorthand: name.to_string(),
                target: target.clone(),
            });
        }

        if path.contains(target) {
            let mut cycle = path.clone();
            cycle.push(target.clone());
            return Err(ConfigError::ShorthandCycle { path: cycle });
        }

        path.push(target.clone());
        expand_into(target, shorthands, is_property, path, out)?;
        path.pop();
    }
    Ok(())
}
