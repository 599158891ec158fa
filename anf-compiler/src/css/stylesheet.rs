//! Stylesheet for a whole article.
//!
//! Generated elements are classed by role, so rules are keyed by role. A
//! role's style is looked up explicitly through
//! [`ArticleDocument::style_for`] and [`ArticleDocument::text_style_for`]: the
//! component's declared style reference first, then the style named after the
//! role. The first component seen with a given role decides that role's rules.

use super::generate_style;
use crate::article::{ArticleDocument, Component, StyleObject};
use std::collections::HashSet;
use std::fmt;

/// A single `selector {body}` rule.
#[derive(Debug, Clone, PartialEq)]
pub struct CssRule {
    pub selector: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    rules: Vec<CssRule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect component and text style rules for every role in the article.
    pub fn from_article(article: &ArticleDocument) -> Self {
        let mut sheet = Self::new();
        let mut seen = HashSet::new();
        sheet.collect(article, &article.components, &mut seen);
        sheet
    }

    fn collect<'a>(
        &mut self,
        article: &'a ArticleDocument,
        components: &'a [Component],
        seen: &mut HashSet<&'a str>,
    ) {
        for component in components {
            let role = component.role();
            if !role.is_empty() && seen.insert(role) {
                let selector = format!(".{role}");
                if let Some(style) = article.style_for(component) {
                    self.push(&selector, style);
                }
                if let Some(style) = article.text_style_for(component) {
                    self.push(&selector, style);
                }
            }
            self.collect(article, component.children(), seen);
        }
    }

    /// Append a rule for `selector`.
    pub fn push(&mut self, selector: &str, style: &StyleObject) {
        self.rules.push(CssRule {
            selector: selector.to_string(),
            body: generate_style(style),
        });
    }

    pub fn rules(&self) -> &[CssRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// One rule per line.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{} {}", rule.selector, rule.body)?;
        }
        Ok(())
    }
}
