//! Component tree → DOM conversion.
//!
//! Each component becomes exactly one element, appended to the parent it is
//! walked under:
//!
//! | Component  | Element                     | Attributes                          | Content            |
//! |------------|-----------------------------|-------------------------------------|--------------------|
//! | Container  | tag resolved from role      | `class` = role                      | walked children    |
//! | Image      | `img`                       | `class` = role, `src`, `alt`        | none               |
//! | TextBlock  | tag resolved from role      | `class` = role                      | text               |
//!
//! `src` is the filename at the end of the component URL; `alt` is the caption
//! or empty. Children are attached live and in input order.

use super::dom::{append, create_element, create_text};
use super::elements::ElementMappings;
use super::scaffold::HtmlDocument;
use crate::article::{Component, Container, Image, TextBlock};
use crate::common::extract_file_name;
use markup5ever_rcdom::Handle;

/// Walks components into a DOM using a role table.
pub struct ComponentWalker<'a> {
    mappings: &'a ElementMappings,
}

impl<'a> ComponentWalker<'a> {
    pub fn new(mappings: &'a ElementMappings) -> Self {
        Self { mappings }
    }

    /// Convert `component` and attach it under `parent`, or under the
    /// document body when no parent is given. Returns the created element.
    pub fn attach(
        &self,
        component: &Component,
        document: &HtmlDocument,
        parent: Option<&Handle>,
    ) -> Handle {
        self.walk(component, parent.unwrap_or(document.body()))
    }

    /// Convert `component`, recursively, appending the result to `parent`.
    pub fn walk(&self, component: &Component, parent: &Handle) -> Handle {
        let node = match component {
            Component::Container(container) => self.container_element(container),
            Component::Image(image) => image_element(image),
            Component::Text(block) => self.text_element(block),
        };
        append(parent, node.clone());

        for child in component.children() {
            self.walk(child, &node);
        }

        node
    }

    fn container_element(&self, container: &Container) -> Handle {
        create_element(
            self.mappings.resolve(&container.role),
            vec![("class", container.role.as_str())],
        )
    }

    fn text_element(&self, block: &TextBlock) -> Handle {
        let element = create_element(
            self.mappings.resolve(&block.role),
            vec![("class", block.role.as_str())],
        );
        if !block.text.is_empty() {
            append(&element, create_text(&block.text));
        }
        element
    }
}

fn image_element(image: &Image) -> Handle {
    let src = extract_file_name(&image.url);
    create_element(
        "img",
        vec![
            ("class", image.role.as_str()),
            ("src", src.as_str()),
            ("alt", image.caption.as_deref().unwrap_or("")),
        ],
    )
}
