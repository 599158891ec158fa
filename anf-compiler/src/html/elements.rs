//! Role to tag resolution.
//!
//! Apple News roles describe what a component is (`header`, `caption`,
//! `pullquote`), not how to render it. The [`ElementMappings`] table lists,
//! per HTML tag, the roles that render as that tag; anything unlisted renders
//! as a `span`.

use serde::{Deserialize, Serialize};

/// Tag used for roles that no mapping claims.
pub const DEFAULT_TAG: &str = "span";

/// Roles rendered as `<div>` by default.
pub const DEFAULT_DIV_ROLES: &[&str] = &[
    "aside",
    "chapter",
    "collection_display",
    "container",
    "divider",
    "header",
    "horizontal_stack_display",
    "section",
];

/// One row of the table: a tag and the roles it renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementMapping {
    pub tag: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Ordered `tag → roles` table.
///
/// Roles should appear under one tag only. When a role is listed under more
/// than one tag, the entry inserted last wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementMappings(Vec<ElementMapping>);

impl ElementMappings {
    /// An empty table; every role resolves to [`DEFAULT_TAG`].
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builder form of [`Self::insert`].
    pub fn with<I, S>(mut self, tag: &str, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(tag, roles);
        self
    }

    /// Set the roles for a tag. An existing entry keeps its position.
    pub fn insert<I, S>(&mut self, tag: &str, roles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();
        match self.0.iter_mut().find(|m| m.tag == tag) {
            Some(existing) => existing.roles = roles,
            None => self.0.push(ElementMapping {
                tag: tag.to_string(),
                roles,
            }),
        }
    }

    /// Tag for a role, or [`DEFAULT_TAG`] when no entry lists it.
    pub fn resolve(&self, role: &str) -> &str {
        self.0
            .iter()
            .rev()
            .find(|m| m.roles.iter().any(|r| r == role))
            .map(|m| m.tag.as_str())
            .unwrap_or(DEFAULT_TAG)
    }

    pub fn roles_for(&self, tag: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|m| m.tag == tag)
            .map(|m| m.roles.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementMapping> {
        self.0.iter()
    }

    /// Roles listed under more than one tag, in first-seen order.
    pub fn conflicts(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let mut conflicts: Vec<&str> = Vec::new();

        for role in self.0.iter().flat_map(|m| m.roles.iter()) {
            if seen.contains(&role.as_str()) {
                if !conflicts.contains(&role.as_str()) {
                    conflicts.push(role);
                }
            } else {
                seen.push(role);
            }
        }

        conflicts
    }
}

impl Default for ElementMappings {
    fn default() -> Self {
        Self::new()
            .with("div", DEFAULT_DIV_ROLES.iter().copied())
            .with("span", Vec::<String>::new())
            .with("p", Vec::<String>::new())
    }
}

impl From<Vec<ElementMapping>> for ElementMappings {
    fn from(mappings: Vec<ElementMapping>) -> Self {
        Self(mappings)
    }
}
