//! Deterministic class and variable naming.
//!
//! Identifiers are built from their components (property, condition and,
//! for static classes, value), each made identifier-safe:
//!
//! 1. A leading `$` alias marker is dropped
//! 2. Non-ASCII text is transliterated with `deunicode`
//! 3. Anything outside `[A-Za-z0-9_-]` becomes `-`, runs of `-` collapse
//!
//! Sanitizing can map two different inputs to one name (`1.5` and `1-5`), so
//! every identifier goes through an [`IdentAllocator`] that reserves it and
//! appends `-2`, `-3`, ... on a clash. The allocator is driven in document
//! order, so compiling the same config twice yields the same identifiers.

use std::collections::HashSet;

use deunicode::deunicode;

use crate::config::ALIAS_PREFIX;

/// Reserves the identifiers generated during one compilation.
#[derive(Debug, Clone, Default)]
pub struct IdentAllocator {
    prefix: String,
    taken: HashSet<String>,
}

impl IdentAllocator {
    /// Creates an allocator that prepends `prefix` to every identifier.
    pub fn new(prefix: Option<&str>) -> Self {
        Self {
            prefix: prefix
                .unwrap_or_default()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect(),
            taken: HashSet::new(),
        }
    }

    /// Reserves a class name built from `parts`.
    pub fn class_name(&mut self, parts: &[&str]) -> String {
        let mut base = join(&self.prefix, parts);
        if base.starts_with(|c: char| c.is_ascii_digit()) {
            base.insert(0, '_');
        }
        self.reserve(base)
    }

    /// Reserves a CSS custom property name (`--...`) built from `parts`.
    pub fn var_name(&mut self, parts: &[&str]) -> String {
        let base = format!("--{}", join(&self.prefix, parts));
        self.reserve(base)
    }

    /// Number of identifiers reserved so far.
    pub fn len(&self) -> usize {
        self.taken.len()
    }

    /// Whether nothing has been reserved.
    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }

    fn reserve(&mut self, base: String) -> String {
        if self.taken.insert(base.clone()) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}-{}", base, n);
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

fn join(prefix: &str, parts: &[&str]) -> String {
    let body = parts
        .iter()
        .map(|part| sanitize(part))
        .collect::<Vec<_>>()
        .join("-");
    format!("{}{}", prefix, body)
}

/// Makes one identifier component safe to use in a class name.
pub fn sanitize(component: &str) -> String {
    let component = component.strip_prefix(ALIAS_PREFIX).unwrap_or(component);
    let ascii = deunicode(component);

    let mut out = String::with_capacity(ascii.len());
    for c in ascii.chars() {
        let c = if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            c
        } else {
            '-'
        };
        if c == '-' && (out.is_empty() || out.ends_with('-')) {
            continue;
        }
        out.push(c);
    }

    while out.ends_with('-') {
        out.pop();
    }

    if out.is_empty() {
        out.push('_');
    }
    out
}
