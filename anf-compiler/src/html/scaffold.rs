//! The empty HTML shell every conversion run starts from.
//!
//! ```html
//! <!DOCTYPE html>
//! <html lang="en">
//!   <head><meta charset="utf-8"><title></title></head>
//!   <body><!-- Begin Apple News HTML Document --><!--<script></script>--></body>
//! </html>
//! ```

use super::dom::{
    append, create_comment, create_doctype, create_element, serialize_children, set_attribute,
    set_text,
};
use crate::error::CompileError;
use markup5ever_rcdom::{Handle, RcDom};

/// Marker comment placed at the top of the body.
pub const BODY_MARKER: &str = " Begin Apple News HTML Document ";

/// A generated HTML document with direct handles to its landmark elements.
pub struct HtmlDocument {
    dom: RcDom,
    root: Handle,
    head: Handle,
    title: Handle,
    body: Handle,
}

impl HtmlDocument {
    /// Build a fresh, empty scaffold.
    pub fn scaffold() -> Self {
        let dom = RcDom::default();

        let root = create_element("html", vec![("lang", "en")]);
        let head = create_element("head", vec![]);
        let title = create_element("title", vec![]);
        let body = create_element("body", vec![]);

        append(&head, create_element("meta", vec![("charset", "utf-8")]));
        append(&head, title.clone());

        append(&body, create_comment(BODY_MARKER));
        append(&body, create_comment("<script></script>"));

        append(&root, head.clone());
        append(&root, body.clone());

        append(&dom.document, create_doctype("html"));
        append(&dom.document, root.clone());

        Self {
            dom,
            root,
            head,
            title,
            body,
        }
    }

    /// The underlying DOM.
    pub fn dom(&self) -> &RcDom {
        &self.dom
    }

    pub fn body(&self) -> &Handle {
        &self.body
    }

    pub fn set_title(&self, title: &str) {
        set_text(&self.title, title);
    }

    pub fn set_language(&self, language: &str) {
        set_attribute(&self.root, "lang", language);
    }

    /// Append a `<style>` element to the head.
    pub fn append_style(&self, css: &str) {
        let style = create_element("style", vec![]);
        set_text(&style, css);
        append(&self.head, style);
    }

    /// Serialize the whole document, doctype included.
    pub fn to_html(&self) -> Result<String, CompileError> {
        serialize_children(&self.dom.document)
    }

    /// Serialize only the contents of `<body>`.
    pub fn body_html(&self) -> Result<String, CompileError> {
        serialize_children(&self.body)
    }
}

impl Default for HtmlDocument {
    fn default() -> Self {
        Self::scaffold()
    }
}
