use rainbow_sprinkles::{
    create_rainbow_sprinkles, ConditionSpec, DynamicScale, PropValue, RainbowSprinkles,
    SprinklesConfig,
};
use serde_json::json;

fn sprinkles() -> RainbowSprinkles {
    let config = SprinklesConfig::new("default")
        .condition("default", ConditionSpec::new())
        .condition("hover", ConditionSpec::new().selector("&:hover"))
        .condition("desktop", ConditionSpec::new().media("(min-width: 1024px)"))
        .dynamic("color", DynamicScale::Unrestricted)
        .dynamic(
            "paddingLeft",
            DynamicScale::tokens([("1x", "var(--space-1x)"), ("2x", "var(--space-2x)")]),
        )
        .dynamic(
            "paddingRight",
            DynamicScale::tokens([("1x", "var(--space-1x)"), ("2x", "var(--space-2x)")]),
        )
        .static_values("display", ["block", "flex"])
        .shorthand("px", ["paddingLeft", "paddingRight"]);
    create_rainbow_sprinkles(&config).unwrap()
}

#[test]
fn test_dynamic_bare_value_uses_default_condition() {
    let resolved = sprinkles().get_box_props([("color", PropValue::from("red"))]);

    assert_eq!(resolved.class_name, "color-default");
    let style = resolved.style.unwrap();
    assert_eq!(style.len(), 1);
    assert_eq!(style["--color-default"], "red");
}

#[test]
fn test_dynamic_conditional_value_skips_default() {
    let resolved =
        sprinkles().get_box_props([("color", PropValue::conditional([("hover", "blue")]))]);

    assert_eq!(resolved.class_name, "color-hover");
    let style = resolved.style.unwrap();
    assert_eq!(style.len(), 1);
    assert_eq!(style["--color-hover"], "blue");
    assert!(!style.contains_key("--color-default"));
}

#[test]
fn test_static_value_in_scale() {
    let resolved = sprinkles().get_box_props([("display", PropValue::from("flex"))]);
    assert_eq!(resolved.class_name, "display-default-flex");
    assert_eq!(resolved.style, None);
}

#[test]
fn test_static_value_outside_scale() {
    let resolved = sprinkles().get_box_props([("display", PropValue::from("grid"))]);
    assert_eq!(resolved.class_name, "");
    assert_eq!(resolved.style, None);
}

#[test]
fn test_shorthand_matches_explicit_properties() {
    let sprinkles = sprinkles();
    let value = PropValue::conditional([("default", "$1x"), ("desktop", "$2x")]);

    let via_shorthand = sprinkles.get_box_props([("px", value.clone())]);
    let explicit = sprinkles.get_box_props([
        ("paddingLeft", value.clone()),
        ("paddingRight", value),
    ]);

    assert_eq!(via_shorthand, explicit);
    let style = via_shorthand.style.unwrap();
    assert_eq!(style["--paddingLeft-default"], "var(--space-1x)");
    assert_eq!(style["--paddingRight-desktop"], "var(--space-2x)");
}

#[test]
fn test_negative_token() {
    let resolved = sprinkles().get_box_props([("paddingLeft", PropValue::from("-$2x"))]);
    assert_eq!(
        resolved.style.unwrap()["--paddingLeft-default"],
        "calc(var(--space-2x) * -1)"
    );
}

#[test]
fn test_resolution_is_idempotent() {
    let sprinkles = sprinkles();
    let props = [
        ("color", PropValue::conditional([("default", "red"), ("hover", "blue")])),
        ("display", PropValue::from("block")),
        ("px", PropValue::from("$1x")),
    ];

    let first = sprinkles.get_box_props(props.clone());
    let second = sprinkles.get_box_props(props);
    assert_eq!(first, second);
}

#[test]
fn test_unknown_props_contribute_nothing() {
    let sprinkles = sprinkles();
    let with_unknown = sprinkles.get_box_props([
        ("color", PropValue::from("red")),
        ("title", PropValue::from("hello")),
        ("margin", PropValue::from("4px")),
    ]);
    let without = sprinkles.get_box_props([("color", PropValue::from("red"))]);
    assert_eq!(with_unknown, without);
}

#[test]
fn test_json_props_match_typed_props() {
    let sprinkles = sprinkles();
    let from_json = sprinkles.get_box_props_json(&json!({
        "color": {"hover": "blue"},
        "display": "flex",
        "px": 4,
        "id": "card"
    }));
    let typed = sprinkles.get_box_props([
        ("color", PropValue::conditional([("hover", "blue")])),
        ("display", PropValue::from("flex")),
        ("px", PropValue::from(4)),
    ]);
    assert_eq!(from_json, typed);
}

#[test]
fn test_box_props_snapshot() {
    let resolved = sprinkles().get_box_props([
        ("color", PropValue::from("red")),
        ("display", PropValue::conditional([("desktop", "block")])),
    ]);

    insta::assert_json_snapshot!(resolved, @r###"
    {
      "className": "color-default display-desktop-block",
      "style": {
        "--color-default": "red"
      }
    }
    "###);
}

#[test]
fn test_extract_then_resolve() {
    let sprinkles = sprinkles();
    let props = json!({
        "color": "red",
        "onClick": "handler",
        "px": "$2x"
    });
    let object = props.as_object().unwrap().clone();

    let split = sprinkles.extract(object);
    assert_eq!(split.other_props.len(), 1);
    assert!(split.other_props.contains_key("onClick"));

    let resolved = sprinkles.get_box_props_json(&serde_json::Value::Object(
        split.sprinkle_props.into_iter().collect(),
    ));
    assert_eq!(
        resolved.class_name,
        "color-default paddingLeft-default paddingRight-default"
    );
}
