//! Component tree of an article.
//!
//! Apple News Format does not tag components with their shape: a container is
//! anything with a `components` array, a photo is anything with a `URL`. The
//! shape is decided here, once, while deserializing, so the rest of the crate
//! matches on a closed enum instead of sniffing fields.

use super::styles::StyleRef;
use serde::Deserialize;

/// One node in the article's content tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawComponent")]
pub enum Component {
    Container(Container),
    Image(Image),
    Text(TextBlock),
}

/// Groups child components under a single wrapping element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Container {
    pub role: String,
    pub identifier: Option<String>,
    pub style: Option<StyleRef>,
    pub components: Vec<Component>,
}

/// A photo, figure or any other component referencing media by URL.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Image {
    pub role: String,
    pub identifier: Option<String>,
    pub style: Option<StyleRef>,
    pub url: String,
    pub caption: Option<String>,
}

/// Literal text under a role (body, title, caption, ...).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextBlock {
    pub role: String,
    pub identifier: Option<String>,
    pub style: Option<StyleRef>,
    pub text_style: Option<StyleRef>,
    pub text: String,
}

impl Component {
    pub fn container(role: impl Into<String>, components: Vec<Component>) -> Self {
        Component::Container(Container {
            role: role.into(),
            components,
            ..Default::default()
        })
    }

    pub fn image(role: impl Into<String>, url: impl Into<String>, caption: Option<&str>) -> Self {
        Component::Image(Image {
            role: role.into(),
            url: url.into(),
            caption: caption.map(str::to_string),
            ..Default::default()
        })
    }

    pub fn text(role: impl Into<String>, text: impl Into<String>) -> Self {
        Component::Text(TextBlock {
            role: role.into(),
            text: text.into(),
            ..Default::default()
        })
    }

    /// Semantic role; drives both tag resolution and the class attribute.
    pub fn role(&self) -> &str {
        match self {
            Component::Container(c) => &c.role,
            Component::Image(i) => &i.role,
            Component::Text(t) => &t.role,
        }
    }

    /// The component style declared on this component, if any.
    pub fn style(&self) -> Option<&StyleRef> {
        match self {
            Component::Container(c) => c.style.as_ref(),
            Component::Image(i) => i.style.as_ref(),
            Component::Text(t) => t.style.as_ref(),
        }
    }

    /// The text style declared on this component. Only text blocks carry one.
    pub fn text_style(&self) -> Option<&StyleRef> {
        match self {
            Component::Text(t) => t.text_style.as_ref(),
            _ => None,
        }
    }

    /// Child components; empty for anything but a container.
    pub fn children(&self) -> &[Component] {
        match self {
            Component::Container(c) => &c.components,
            _ => &[],
        }
    }
}

/// Wire shape of a component before its variant is decided.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawComponent {
    role: String,
    #[serde(default)]
    identifier: Option<String>,
    #[serde(default)]
    style: Option<StyleRef>,
    #[serde(default)]
    text_style: Option<StyleRef>,
    #[serde(default)]
    components: Vec<Component>,
    #[serde(rename = "URL", default)]
    url: Option<String>,
    #[serde(default)]
    caption: Option<RawCaption>,
    #[serde(default)]
    text: Option<String>,
}

/// Captions are either plain strings or caption descriptors.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCaption {
    Text(String),
    Descriptor { text: String },
}

impl From<RawCaption> for String {
    fn from(caption: RawCaption) -> Self {
        match caption {
            RawCaption::Text(text) | RawCaption::Descriptor { text } => text,
        }
    }
}

impl From<RawComponent> for Component {
    fn from(raw: RawComponent) -> Self {
        if !raw.components.is_empty() {
            return Component::Container(Container {
                role: raw.role,
                identifier: raw.identifier,
                style: raw.style,
                components: raw.components,
            });
        }

        if let Some(url) = raw.url {
            return Component::Image(Image {
                role: raw.role,
                identifier: raw.identifier,
                style: raw.style,
                url,
                caption: raw.caption.map(String::from),
            });
        }

        Component::Text(TextBlock {
            role: raw.role,
            identifier: raw.identifier,
            style: raw.style,
            text_style: raw.text_style,
            text: raw.text.unwrap_or_default(),
        })
    }
}
