//! Export tests for whole articles (ANF JSON → HTML)

use crate::common::{article_json, sample_article, SAMPLE_JSON};
use anf_compiler::html::dom::{attribute, child_elements, tag_name};
use anf_compiler::{compile_json, Compiler, CompilerOptions};

const SCAFFOLD_BODY: &str =
    "<!-- Begin Apple News HTML Document --><!--<script></script>-->";

fn body_of(json: &str) -> String {
    let article = anf_compiler::ArticleDocument::from_json(json).unwrap();
    let mut compiler = Compiler::with_article(article, CompilerOptions::default());
    compiler.process().unwrap();
    compiler.dom().body_html().unwrap()
}

// ============================================================================
// WHOLE DOCUMENT
// ============================================================================

#[test]
fn test_sample_document() {
    let output = compile_json(SAMPLE_JSON, CompilerOptions::default()).unwrap();

    let expected = concat!(
        "<!DOCTYPE html><html lang=\"en-GB\"><head><meta charset=\"utf-8\">",
        "<title>Lighthouses of the North Coast</title></head><body>",
        "<!-- Begin Apple News HTML Document --><!--<script></script>-->",
        "<div class=\"header\"><span class=\"title\">Lighthouses of the North Coast</span>",
        "<img class=\"photo\" src=\"beam_01.jpg\" alt=\"The beam at dusk\"></div>",
        "<span class=\"byline\">by A. Keeper</span>",
        "<div class=\"section\"><span class=\"heading2\">The tour</span>",
        "<span class=\"body\">Five towers, one road &amp; a lot of wind.</span>",
        "<img class=\"figure\" src=\"map.png\" alt=\"\"></div>",
        "<div class=\"divider\"></div>",
        "</body></html>"
    );
    assert_eq!(output.html, expected);
}

#[test]
fn test_sample_stylesheet() {
    let output = compile_json(SAMPLE_JSON, CompilerOptions::default()).unwrap();

    assert_eq!(
        output.css,
        concat!(
            ".header {background-color: #002B45;}\n",
            ".title {font-family: Georgia-Bold;font-size: 48;text-color: #FFFFFF;}\n",
            ".section {background-color: #F4F4F4;opacity: 1;}\n",
            ".body {font-family: Georgia;font-size: 18;line-height: 26;}\n",
        )
    );
}

#[test]
fn test_top_level_order_is_preserved() {
    let mut compiler = Compiler::with_article(sample_article(), CompilerOptions::default());
    compiler.process().unwrap();

    let roles: Vec<String> = child_elements(compiler.dom().body())
        .iter()
        .filter_map(|el| attribute(el, "class"))
        .collect();
    assert_eq!(roles, vec!["header", "byline", "section", "divider"]);
}

#[test]
fn test_nested_structure() {
    let mut compiler = Compiler::with_article(sample_article(), CompilerOptions::default());
    compiler.process().unwrap();

    let top = child_elements(compiler.dom().body());
    let section = &top[2];
    let children = child_elements(section);
    let tags: Vec<String> = children.iter().filter_map(tag_name).collect();
    assert_eq!(tags, vec!["span", "span", "img"]);
}

// ============================================================================
// EDGE CASES
// ============================================================================

#[test]
fn test_no_components() {
    assert_eq!(body_of(&article_json("[]")), SCAFFOLD_BODY);
}

#[test]
fn test_text_is_not_sanitized_beyond_escaping() {
    let body = body_of(&article_json(
        r#"[{"role": "body", "text": "<b>bold</b> & \"quoted\""}]"#,
    ));
    assert_eq!(
        body,
        format!(
            "{SCAFFOLD_BODY}<span class=\"body\">&lt;b&gt;bold&lt;/b&gt; &amp; \"quoted\"</span>"
        )
    );
}

#[test]
fn test_image_url_without_filename_passes_through() {
    let body = body_of(&article_json(
        r#"[{"role": "photo", "URL": "https://example.com/render?id=12"}]"#,
    ));
    assert!(body.contains("src=\"https://example.com/render?id=12\""));
}

#[test]
fn test_deeply_nested() {
    let body = body_of(&article_json(
        r#"[{"role": "container", "components": [
            {"role": "container", "components": [
                {"role": "container", "components": [{"role": "body", "text": "deep"}]}
            ]}
        ]}]"#,
    ));
    assert!(body.ends_with(
        "<div class=\"container\"><div class=\"container\"><div class=\"container\">\
         <span class=\"body\">deep</span></div></div></div>"
    ));
}

#[test]
fn test_malformed_article_is_rejected() {
    let err = compile_json(r#"{"title": "No version"}"#, CompilerOptions::default()).unwrap_err();
    assert!(matches!(err, anf_compiler::CompileError::ArticleData(_)));
}
