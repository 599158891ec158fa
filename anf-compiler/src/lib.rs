//! Apple News Format to HTML
//!
//!     This crate turns an Apple News Format article (a tree of role-tagged components plus
//!     named style objects) into an HTML document and a matching CSS stylesheet.
//!
//!     It is a pure lib: it never touches the filesystem, stdout or the environment. The
//!     `anf` binary (anf-cli) is the shell around it.
//!
//! Architecture
//!
//!     .
//!     ├── error.rs                # CompileError
//!     ├── article                 # Article model, deserialized from ANF JSON
//!     │   ├── nodes.rs            # Component tree (closed enum, shape decided on load)
//!     │   └── styles.rs           # Style objects and style references
//!     ├── common                  # String helpers (case conversion, filenames)
//!     ├── html                    # DOM scaffold, role table, component walker
//!     ├── css                     # Style object → CSS rule body, article stylesheet
//!     ├── debug.rs                # Debug-mode logger and error stack
//!     ├── compiler.rs             # One conversion run
//!     └── lib.rs
//!
//! Core Algorithms
//!
//!     The walker (html/walker.rs) converts one component into one element and attaches it
//!     under a parent handle, recursing into containers with the new element as parent. Tags
//!     come from the role table (html/elements.rs); every element is classed by its role.
//!
//!     The style generator (css/mod.rs) converts camel-cased ANF properties into CSS property
//!     names by prefixing every uppercase letter with `-`, then renames `name` to `family`
//!     (`fontName` → `font-family`). Values are not unit-converted.
//!
//! Testing
//!
//!     Unit tests live next to each module. Integration tests are under tests/, grouped by
//!     area, with shared fixtures in tests/common.
//!
pub mod article;
pub mod common;
pub mod compiler;
pub mod css;
pub mod debug;
pub mod error;
pub mod html;

pub use article::{ArticleDocument, Component};
pub use compiler::{Compiler, CompilerOptions, Mode};
pub use css::{generate_style, Stylesheet};
pub use debug::DebugLog;
pub use error::CompileError;
pub use html::{ElementMapping, ElementMappings, HtmlDocument};

/// Output of a one-shot compilation.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledArticle {
    pub html: String,
    pub css: String,
}

/// Compile an article in one go: HTML document plus stylesheet.
pub fn compile(
    article: ArticleDocument,
    options: CompilerOptions,
) -> Result<CompiledArticle, CompileError> {
    let mut compiler = Compiler::with_article(article, options);
    compiler.process()?;

    Ok(CompiledArticle {
        html: compiler.html()?,
        css: compiler.css()?.to_css(),
    })
}

/// Parse ANF JSON and compile it.
pub fn compile_json(
    source: &str,
    options: CompilerOptions,
) -> Result<CompiledArticle, CompileError> {
    compile(ArticleDocument::from_json(source)?, options)
}
