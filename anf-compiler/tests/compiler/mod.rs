//! Run-state behaviour of the compiler.

use crate::common::sample_article;
use anf_compiler::debug::ErrorStackValue;
use anf_compiler::{ArticleDocument, CompileError, Compiler, CompilerOptions, DebugLog, Mode};

#[test]
fn test_untouched_compiler_exposes_the_scaffold() {
    let compiler = Compiler::with_article(sample_article(), CompilerOptions::default());
    let html = compiler.html().unwrap();
    assert!(html.contains("<title></title>"));
    assert!(!html.contains("class=\"header\""));
}

#[test]
fn test_process_twice_does_not_duplicate() {
    let mut compiler = Compiler::with_article(sample_article(), CompilerOptions::default());
    compiler.process().unwrap();
    let first = compiler.html().unwrap();

    assert!(compiler.process().is_ok());
    let second = compiler.html().unwrap();
    assert_eq!(first, second);
    assert_eq!(second.matches("class=\"byline\"").count(), 1);
}

#[test]
fn test_reset_reproduces_output_byte_for_byte() {
    let mut compiler = Compiler::with_article(sample_article(), CompilerOptions::default());
    compiler.process().unwrap();
    let first = compiler.html().unwrap();

    compiler.reset();
    compiler.process().unwrap();
    assert_eq!(compiler.html().unwrap(), first);
}

#[test]
fn test_two_compilers_agree() {
    let mut a = Compiler::with_article(sample_article(), CompilerOptions::default());
    let mut b = Compiler::with_article(sample_article(), CompilerOptions::debug());
    a.process().unwrap();
    b.process().unwrap();
    assert_eq!(a.html().unwrap(), b.html().unwrap());
}

#[test]
fn test_missing_article_leaves_dom_untouched() {
    let mut compiler = Compiler::new(CompilerOptions::default());
    let before = compiler.html().unwrap();

    let err = compiler.process().unwrap_err();
    assert_eq!(
        err,
        CompileError::ArticleData("Article data has not been loaded.".to_string())
    );
    assert_eq!(compiler.html().unwrap(), before);
}

#[test]
fn test_load_after_construction() {
    let mut compiler = Compiler::new(CompilerOptions::default());
    compiler.load(sample_article());
    compiler.process().unwrap();
    assert!(compiler.html().unwrap().contains("class=\"byline\""));
}

#[test]
fn test_debug_mode_records_failures() {
    let mut compiler = Compiler::new(CompilerOptions::default()).with_debug_log(DebugLog::new());
    assert_eq!(compiler.mode(), Mode::Debug);

    assert!(compiler.process().is_err());
    assert!(compiler.process().is_err());
    assert_eq!(compiler.debug_log().unwrap().number_of_errors(), 2);

    let dumped = compiler.debug_log_mut().unwrap().dump_errors(true);
    assert!(dumped
        .iter()
        .all(|value| matches!(value, ErrorStackValue::Error(CompileError::ArticleData(_)))));
    assert_eq!(compiler.debug_log().unwrap().number_of_errors(), 0);
}

#[test]
fn test_embedded_stylesheet_matches_css() {
    let options = CompilerOptions::default().with_embedded_styles();
    let mut compiler = Compiler::with_article(sample_article(), options);
    compiler.process().unwrap();

    let css = compiler.css().unwrap().to_css();
    assert!(compiler
        .html()
        .unwrap()
        .contains(&format!("<style>{css}</style>")));
}

#[test]
fn test_embedding_nothing_adds_no_style_element() {
    let options = CompilerOptions::default().with_embedded_styles();
    let mut compiler = Compiler::with_article(ArticleDocument::new("Plain", vec![]), options);
    compiler.process().unwrap();
    assert!(!compiler.html().unwrap().contains("<style>"));
}
