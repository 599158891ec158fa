//! Style objects and references to them.

use serde::Deserialize;
use serde_json::{Map, Value};

/// A component or text style: CSS-like property name to value, in source order.
pub type StyleObject = Map<String, Value>;

/// Named styles declared at the article level (`componentStyles`,
/// `componentTextStyles`). Entries that are not objects are ignored on lookup.
pub type StyleMap = Map<String, Value>;

/// How a component points at its style.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StyleRef {
    /// Name of an entry in the article's style map
    Named(String),
    /// Style declared in place on the component
    Inline(StyleObject),
}

impl StyleRef {
    /// Resolve against a style map. Inline styles resolve to themselves.
    pub fn resolve<'a>(&'a self, styles: &'a StyleMap) -> Option<&'a StyleObject> {
        match self {
            StyleRef::Named(name) => lookup(styles, name),
            StyleRef::Inline(style) => Some(style),
        }
    }
}

/// Look up a named style.
pub fn lookup<'a>(styles: &'a StyleMap, name: &str) -> Option<&'a StyleObject> {
    styles.get(name).and_then(Value::as_object)
}
