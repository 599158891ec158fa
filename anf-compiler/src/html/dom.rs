//! Small helpers over `markup5ever_rcdom` nodes.
//!
//! Nodes are built by hand rather than parsed: the compiler never re-parses its
//! own output, it attaches live handles.

use crate::error::CompileError;
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

/// Create an HTML element with attributes
pub fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    new_node(NodeData::Element {
        name: qual_name,
        attrs: RefCell::new(attributes),
        template_contents: Default::default(),
        mathml_annotation_xml_integration_point: false,
    })
}

/// Create a text node
pub fn create_text(text: &str) -> Handle {
    new_node(NodeData::Text {
        contents: RefCell::new(text.to_string().into()),
    })
}

/// Create a comment node
pub fn create_comment(text: &str) -> Handle {
    new_node(NodeData::Comment {
        contents: text.to_string().into(),
    })
}

/// Create a `<!DOCTYPE name>` node
pub fn create_doctype(name: &str) -> Handle {
    new_node(NodeData::Doctype {
        name: name.to_string().into(),
        public_id: String::new().into(),
        system_id: String::new().into(),
    })
}

fn new_node(data: NodeData) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data,
    })
}

/// Append `child` as the last child of `parent`.
pub fn append(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

/// Replace all children of `parent` with a single text node.
pub fn set_text(parent: &Handle, text: &str) {
    parent.children.borrow_mut().clear();
    if !text.is_empty() {
        append(parent, create_text(text));
    }
}

/// Set an attribute, overwriting any existing value. No-op on non-elements.
pub fn set_attribute(handle: &Handle, name: &str, value: &str) {
    if let NodeData::Element { ref attrs, .. } = handle.data {
        let mut attrs = attrs.borrow_mut();
        match attrs.iter_mut().find(|a| a.name.local.as_ref() == name) {
            Some(existing) => existing.value = value.to_string().into(),
            None => attrs.push(Attribute {
                name: QualName::new(None, ns!(), LocalName::from(name)),
                value: value.to_string().into(),
            }),
        }
    }
}

/// Value of an attribute on an element.
pub fn attribute(handle: &Handle, name: &str) -> Option<String> {
    match handle.data {
        NodeData::Element { ref attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| a.name.local.as_ref() == name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// Local tag name of an element.
pub fn tag_name(handle: &Handle) -> Option<String> {
    match handle.data {
        NodeData::Element { ref name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

/// Child elements, skipping text, comments and the like.
pub fn child_elements(handle: &Handle) -> Vec<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

/// Concatenated text of all descendant text nodes.
pub fn text_content(handle: &Handle) -> String {
    let mut out = String::new();
    collect_text(handle, &mut out);
    out
}

fn collect_text(handle: &Handle, out: &mut String) {
    if let NodeData::Text { ref contents } = handle.data {
        out.push_str(&contents.borrow());
    }
    for child in handle.children.borrow().iter() {
        collect_text(child, out);
    }
}

/// Get the first element with the given local name
pub fn find_first_element(handle: &Handle, name: &str) -> Option<Handle> {
    if let NodeData::Element { name: ref qname, .. } = handle.data {
        if qname.local.as_ref() == name {
            return Some(handle.clone());
        }
    }

    for child in handle.children.borrow().iter() {
        if let Some(found) = find_first_element(child, name) {
            return Some(found);
        }
    }

    None
}

/// Serialize a node and its subtree
pub fn serialize_node(handle: &Handle) -> Result<String, CompileError> {
    serialize_with_scope(handle, TraversalScope::IncludeNode)
}

/// Serialize only the children of a node
pub fn serialize_children(handle: &Handle) -> Result<String, CompileError> {
    serialize_with_scope(handle, TraversalScope::ChildrenOnly(None))
}

fn serialize_with_scope(handle: &Handle, scope: TraversalScope) -> Result<String, CompileError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: scope,
        ..Default::default()
    };

    let serializable = SerializableHandle::from(handle.clone());
    serialize(&mut output, &serializable, opts)
        .map_err(|e| CompileError::Serialization(format!("HTML serialization failed: {e}")))?;

    String::from_utf8(output)
        .map_err(|e| CompileError::Serialization(format!("UTF-8 conversion failed: {e}")))
}
