//! CSS generation from article style objects.
//!
//! A style object becomes a rule body: property names go through
//! [`css_property_name`], values are written as-is. No units are added and
//! nothing is validated, `fontSize: 12` is emitted as `font-size: 12`.

pub mod stylesheet;

pub use stylesheet::{CssRule, Stylesheet};

use crate::article::StyleObject;
use crate::common::css_property_name;
use serde_json::{Number, Value};

/// Render a style object as `{prop: value;prop: value;}`, in key order.
pub fn generate_style(style: &StyleObject) -> String {
    let mut body = String::from("{");

    for (property, value) in style {
        body.push_str(&css_property_name(property));
        body.push_str(": ");
        body.push_str(&css_value(value));
        body.push(';');
    }

    body.push('}');
    body
}

/// Stringify a style value.
///
/// Strings are verbatim, numbers lose a zero fractional part, anything else
/// is written as compact JSON.
pub fn css_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => format_number(n),
        other => other.to_string(),
    }
}

fn format_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => format!("{f}"),
        _ => n.to_string(),
    }
}
