//! HTML generation
//!
//! # Library Choice
//!
//! The output document is a `markup5ever_rcdom` tree serialized with
//! `html5ever`'s serializer:
//! - `markup5ever_rcdom`: reference-counted DOM tree, cheap to build by hand
//! - `html5ever`: WHATWG-conformant serialization (escaping, void elements,
//!   raw text for `<style>`)
//!
//! # Structure
//!
//! - [`scaffold`]: the fixed empty document every run starts from
//! - [`elements`]: role → tag table
//! - [`walker`]: component tree → DOM subtree
//! - [`dom`]: node construction and serialization helpers
//!
//! # Role Mapping Table
//!
//! | Role                                                   | Default tag |
//! |--------------------------------------------------------|-------------|
//! | `aside`, `chapter`, `collection_display`, `container`  | `div`       |
//! | `divider`, `header`, `horizontal_stack_display`        | `div`       |
//! | `section`                                              | `div`       |
//! | `photo`, `figure`, `image`, ... (anything with a URL)  | `img`       |
//! | everything else                                        | `span`      |
//!
//! Every generated element carries its role as its `class`, which is what the
//! generated stylesheet targets.

pub mod dom;
pub mod elements;
pub mod scaffold;
pub mod walker;

pub use elements::{ElementMapping, ElementMappings, DEFAULT_TAG};
pub use scaffold::HtmlDocument;
pub use walker::ComponentWalker;
