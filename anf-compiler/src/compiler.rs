//! Conversion runs.
//!
//! A [`Compiler`] owns one article, one generated document and a run-state
//! flag. `process` converts the article once; calling it again is a no-op
//! until `reset` swaps in a fresh scaffold.
//!
//! ```ignore
//! let mut compiler = Compiler::with_article(article, CompilerOptions::default());
//! compiler.process()?;
//! let html = compiler.html()?;
//! ```

use crate::article::ArticleDocument;
use crate::css::Stylesheet;
use crate::debug::DebugLog;
use crate::error::CompileError;
use crate::html::{ComponentWalker, ElementMappings, HtmlDocument};
use std::fmt;
use std::time::Instant;

/// Knobs for a compiler instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompilerOptions {
    /// Instantiate a [`DebugLog`] and report timing and skipped runs
    pub debug: bool,
    /// Append the article stylesheet to `<head>` as a `<style>` element
    pub embed_styles: bool,
    /// Role → tag table
    pub mappings: ElementMappings,
}

impl CompilerOptions {
    pub fn debug() -> Self {
        Self {
            debug: true,
            ..Default::default()
        }
    }

    pub fn with_embedded_styles(mut self) -> Self {
        self.embed_styles = true;
        self
    }

    pub fn with_mappings(mut self, mappings: ElementMappings) -> Self {
        self.mappings = mappings;
        self
    }
}

/// Which mode a compiler runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Debug,
    Production,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Debug => "debug",
            Mode::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct Compiler {
    options: CompilerOptions,
    article: Option<ArticleDocument>,
    document: HtmlDocument,
    processed: bool,
    debug_log: Option<DebugLog>,
    runs: usize,
}

impl Compiler {
    /// A compiler with no article loaded.
    pub fn new(options: CompilerOptions) -> Self {
        let debug_log = options.debug.then(DebugLog::new);
        Self {
            options,
            article: None,
            document: HtmlDocument::scaffold(),
            processed: false,
            debug_log,
            runs: 0,
        }
    }

    pub fn with_article(article: ArticleDocument, options: CompilerOptions) -> Self {
        let mut compiler = Self::new(options);
        compiler.load(article);
        compiler
    }

    /// Use `debug_log` as the debug collaborator. Turns debug mode on.
    pub fn with_debug_log(mut self, debug_log: DebugLog) -> Self {
        self.options.debug = true;
        self.debug_log = Some(debug_log);
        self
    }

    /// Store the article to convert. Does not touch the run state: a
    /// processed compiler keeps skipping until [`Self::reset`].
    pub fn load(&mut self, article: ArticleDocument) {
        self.article = Some(article);
    }

    /// Remove the article; later `process` calls fail.
    pub fn unload(&mut self) -> Option<ArticleDocument> {
        self.article.take()
    }

    /// Convert every top-level component into the document body.
    ///
    /// Fails when no article is loaded. Does nothing when the current
    /// document has already been processed.
    pub fn process(&mut self) -> Result<(), CompileError> {
        let process_id = format!("run-{}", self.runs + 1);

        let Some(article) = self.article.as_ref() else {
            let err = CompileError::article_not_loaded();
            if let Some(debug_log) = self.debug_log.as_mut() {
                debug_log.error(&err, Some(&process_id));
                debug_log.add_error(err.clone());
            }
            return Err(err);
        };

        if self.processed {
            if let Some(debug_log) = self.debug_log.as_mut() {
                debug_log.log(
                    "Article already processed, skipping. Reset the compiler to convert it again.",
                    Some(&process_id),
                );
            }
            return Ok(());
        }

        let started = Instant::now();
        self.runs += 1;

        if let Some(debug_log) = self.debug_log.as_mut() {
            for role in self.options.mappings.conflicts() {
                debug_log.log(
                    format!("Role '{role}' is mapped to more than one tag; the last mapping wins"),
                    Some(&process_id),
                );
            }
        }

        self.document.set_title(&article.title);
        self.document.set_language(article.language());

        let walker = ComponentWalker::new(&self.options.mappings);
        for component in &article.components {
            walker.attach(component, &self.document, None);
        }

        if self.options.embed_styles {
            let stylesheet = Stylesheet::from_article(article);
            if !stylesheet.is_empty() {
                self.document.append_style(&stylesheet.to_css());
            }
        }

        self.processed = true;

        if let Some(debug_log) = self.debug_log.as_mut() {
            debug_log.log(
                format!(
                    "Article processing finished in {}ms",
                    started.elapsed().as_millis()
                ),
                Some(&process_id),
            );
        }

        Ok(())
    }

    /// Discard the generated document and start over from a fresh scaffold.
    pub fn reset(&mut self) {
        self.document = HtmlDocument::scaffold();
        self.processed = false;
    }

    pub fn is_processed(&self) -> bool {
        self.processed
    }

    /// The generated document serialized to a string.
    pub fn html(&self) -> Result<String, CompileError> {
        self.document.to_html()
    }

    /// The generated document.
    pub fn dom(&self) -> &HtmlDocument {
        &self.document
    }

    /// Stylesheet for the loaded article.
    pub fn css(&self) -> Result<Stylesheet, CompileError> {
        self.article
            .as_ref()
            .map(Stylesheet::from_article)
            .ok_or_else(CompileError::article_not_loaded)
    }

    pub fn mode(&self) -> Mode {
        if self.options.debug {
            Mode::Debug
        } else {
            Mode::Production
        }
    }

    pub fn debug(&self) -> bool {
        self.options.debug
    }

    /// Switch debug mode. Turning it on creates a [`DebugLog`] if there is
    /// none; turning it off drops it.
    pub fn set_debug(&mut self, debug: bool) {
        self.options.debug = debug;
        if debug {
            self.debug_log.get_or_insert_with(DebugLog::new);
        } else {
            self.debug_log = None;
        }
    }

    pub fn debug_log(&self) -> Option<&DebugLog> {
        self.debug_log.as_ref()
    }

    pub fn debug_log_mut(&mut self) -> Option<&mut DebugLog> {
        self.debug_log.as_mut()
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(CompilerOptions::default())
    }
}
