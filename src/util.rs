//! Utility functions for property names.

use heck::ToKebabCase;

/// Vendor prefixes recognized in camelCase property names.
const VENDOR_PREFIXES: &[&str] = &["Webkit", "Moz", "ms", "Ms", "O"];

/// Converts a configured property name to the CSS property it sets.
///
/// camelCase names are converted to kebab-case, and a leading vendor
/// prefix gains its leading dash. Names that already contain a dash
/// (kebab-case or custom properties) are returned unchanged.
///
/// # Example
///
/// ```rust
/// use rainbow_sprinkles::css_property_name;
///
/// assert_eq!(css_property_name("backgroundColor"), "background-color");
/// assert_eq!(css_property_name("WebkitLineClamp"), "-webkit-line-clamp");
/// assert_eq!(css_property_name("margin-top"), "margin-top");
/// ```
pub fn css_property_name(name: &str) -> String {
    if name.contains('-') || !name.chars().any(|c| c.is_ascii_uppercase()) {
        return name.to_string();
    }

    for prefix in VENDOR_PREFIXES {
        if let Some(rest) = name.strip_prefix(prefix) {
            if rest.starts_with(|c: char| c.is_ascii_uppercase()) {
                return format!("-{}-{}", prefix.to_ascii_lowercase(), rest.to_kebab_case());
            }
        }
    }

    name.to_kebab_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(css_property_name("paddingLeft"), "padding-left");
        assert_eq!(css_property_name("borderTopLeftRadius"), "border-top-left-radius");
    }

    #[test]
    fn test_single_word() {
        assert_eq!(css_property_name("color"), "color");
        assert_eq!(css_property_name("gap"), "gap");
    }

    #[test]
    fn test_vendor_prefixes() {
        assert_eq!(css_property_name("WebkitTransform"), "-webkit-transform");
        assert_eq!(css_property_name("MozAppearance"), "-moz-appearance");
        assert_eq!(css_property_name("msFlexAlign"), "-ms-flex-align");
    }

    #[test]
    fn test_vendor_lookalike_is_not_prefixed() {
        assert_eq!(css_property_name("Opacity"), "opacity");
        assert_eq!(css_property_name("OverflowX"), "overflow-x");
    }

    #[test]
    fn test_kebab_and_custom_properties_unchanged() {
        assert_eq!(css_property_name("font-size"), "font-size");
        assert_eq!(css_property_name("--brandColor"), "--brandColor");
    }
}
