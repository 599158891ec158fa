//! Shared fixtures for integration tests.

use anf_compiler::ArticleDocument;

/// Sample article: nested containers, photos, named and role-keyed styles.
pub const SAMPLE_JSON: &str = include_str!("../fixtures/sample.json");

pub fn sample_article() -> ArticleDocument {
    ArticleDocument::from_json(SAMPLE_JSON).expect("sample fixture to deserialize")
}

/// Minimal valid article JSON wrapping the given components array.
pub fn article_json(components: &str) -> String {
    format!(
        r#"{{"version": "1.0", "title": "Test", "layout": {{"columns": 7, "width": 1024}}, "components": {components}}}"#
    )
}

#[test]
fn sample_fixture_loads() {
    let article = sample_article();
    assert_eq!(article.components.len(), 4);
    assert_eq!(article.language(), "en-GB");
}
