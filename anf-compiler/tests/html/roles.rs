//! Role table behaviour seen through whole conversions.

use crate::common::article_json;
use anf_compiler::{compile_json, CompilerOptions, ElementMappings};

fn convert(components: &str, mappings: ElementMappings) -> String {
    let options = CompilerOptions::default().with_mappings(mappings);
    compile_json(&article_json(components), options).unwrap().html
}

#[test]
fn test_header_example() {
    let mappings = ElementMappings::new()
        .with("div", ["header"])
        .with("span", Vec::<String>::new())
        .with("p", Vec::<String>::new());
    let html = convert(r#"[{"role": "header", "text": "Hi"}]"#, mappings);
    assert!(html.contains("<div class=\"header\">Hi</div>"));
}

#[test]
fn test_custom_semantic_tags() {
    let mappings = ElementMappings::default()
        .with("p", ["body", "intro"])
        .with("h1", ["title"])
        .with("figcaption", ["caption"]);
    let html = convert(
        r#"[
            {"role": "title", "text": "T"},
            {"role": "intro", "text": "I"},
            {"role": "caption", "text": "C"},
            {"role": "pullquote", "text": "Q"}
        ]"#,
        mappings,
    );
    assert!(html.contains(
        "<h1 class=\"title\">T</h1><p class=\"intro\">I</p>\
         <figcaption class=\"caption\">C</figcaption><span class=\"pullquote\">Q</span>"
    ));
}

#[test]
fn test_images_ignore_the_table() {
    let mappings = ElementMappings::new().with("figure", ["photo"]);
    let html = convert(r#"[{"role": "photo", "URL": "a/b.png"}]"#, mappings);
    assert!(html.contains(
        "<img class=\"photo\" src=\"b.png\" alt=\"\">"
    ));
}

#[test]
fn test_conflicting_roles_take_the_last_entry() {
    let mappings = ElementMappings::new()
        .with("div", ["quote"])
        .with("blockquote", ["quote"]);
    let html = convert(r#"[{"role": "quote", "text": "Q"}]"#, mappings);
    assert!(html.contains("<blockquote class=\"quote\">Q</blockquote>"));
}
