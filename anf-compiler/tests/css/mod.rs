//! Style generation against article style maps.

use crate::common::sample_article;
use anf_compiler::article::StyleObject;
use anf_compiler::generate_style;
use insta::assert_snapshot;
use proptest::prelude::*;
use serde_json::{json, Value};

#[test]
fn test_font_example() {
    let style = json!({"fontName": "Georgia", "fontSize": 12});
    assert_snapshot!(
        generate_style(style.as_object().unwrap()),
        @"{font-family: Georgia;font-size: 12;}"
    );
}

#[test]
fn test_role_keyed_lookup() {
    let article = sample_article();
    let title = &article.components[0].children()[0];
    let style = article.text_style_for(title).unwrap();
    assert_snapshot!(
        generate_style(style),
        @"{font-family: Georgia-Bold;font-size: 48;text-color: #FFFFFF;}"
    );
}

#[test]
fn test_declared_style_lookup() {
    let article = sample_article();
    let section = &article.components[2];
    let style = article.style_for(section).unwrap();
    assert_snapshot!(generate_style(style), @"{background-color: #F4F4F4;opacity: 1;}");
}

fn style_entries() -> impl Strategy<Value = Vec<(String, Value)>> {
    proptest::collection::vec(
        (
            "[a-z][a-zA-Z]{0,10}",
            prop_oneof![
                "[a-z#0-9]{1,8}".prop_map(Value::from),
                (0i64..10_000).prop_map(Value::from),
            ],
        ),
        0..8,
    )
}

proptest! {
    #[test]
    fn prop_one_group_per_entry_in_key_order(entries in style_entries()) {
        let mut style = StyleObject::new();
        for (key, value) in entries {
            style.insert(key, value);
        }

        let body = generate_style(&style);
        let wrapped = body.starts_with('{') && body.ends_with('}');
        prop_assert!(wrapped, "body not wrapped in braces: {}", body);

        let groups: Vec<&str> = body[1..body.len() - 1]
            .split(';')
            .filter(|group| !group.is_empty())
            .collect();
        prop_assert_eq!(groups.len(), style.len());

        for (group, (key, _)) in groups.iter().zip(style.iter()) {
            let property = anf_compiler::common::css_property_name(key);
            let prefix = format!("{property}: ");
            let matches_key = group.starts_with(&prefix);
            prop_assert!(
                matches_key,
                "group {} does not start with {}",
                group,
                prefix
            );
        }
    }
}
