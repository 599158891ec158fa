//! In-memory model of an Apple News Format article.
//!
//! Only the parts the compiler reads are modelled; unknown fields in the JSON
//! source are ignored.

pub mod nodes;
pub mod styles;

pub use nodes::{Component, Container, Image, TextBlock};
pub use styles::{StyleMap, StyleObject, StyleRef};

use crate::error::CompileError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Root of an article.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDocument {
    #[serde(default)]
    pub identifier: Option<String>,
    pub title: String,
    pub version: String,
    #[serde(default)]
    pub language: Option<String>,
    pub layout: Layout,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    pub components: Vec<Component>,
    #[serde(default)]
    pub component_styles: StyleMap,
    #[serde(default)]
    pub component_text_styles: StyleMap,
}

/// Column grid the article was designed against.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Layout {
    pub columns: u32,
    pub width: u32,
    #[serde(default)]
    pub margin: Option<u32>,
    #[serde(default)]
    pub gutter: Option<u32>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            columns: 7,
            width: 1024,
            margin: None,
            gutter: None,
        }
    }
}

impl ArticleDocument {
    /// Article with the given top-level components and no styles.
    pub fn new(title: impl Into<String>, components: Vec<Component>) -> Self {
        Self {
            identifier: None,
            title: title.into(),
            version: "1.0".to_string(),
            language: None,
            layout: Layout::default(),
            metadata: Map::new(),
            components,
            component_styles: StyleMap::new(),
            component_text_styles: StyleMap::new(),
        }
    }

    /// Deserialize an article from its JSON source.
    pub fn from_json(source: &str) -> Result<Self, CompileError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Component style for a component: its declared `style`, or else the
    /// style named after its role.
    pub fn style_for<'a>(&'a self, component: &'a Component) -> Option<&'a StyleObject> {
        match component.style() {
            Some(style) => style.resolve(&self.component_styles),
            None => styles::lookup(&self.component_styles, component.role()),
        }
    }

    /// Text style for a component, resolved the same way as [`Self::style_for`].
    pub fn text_style_for<'a>(&'a self, component: &'a Component) -> Option<&'a StyleObject> {
        match component.text_style() {
            Some(style) => style.resolve(&self.component_text_styles),
            None => styles::lookup(&self.component_text_styles, component.role()),
        }
    }

    /// Language tag for the document root.
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or("en")
    }
}
