//! Camel case to delimited lower case.
//!
//! Apple News style properties are camel cased (`fontSize`, `textColor`); CSS
//! wants `font-size`. The conversion is a plain prefix insertion: each ASCII
//! uppercase letter becomes `delimiter + lowercase`. There is no word
//! boundary detection, so `"AB"` becomes `"-a-b"`.

/// Delimiter used for CSS property names.
pub const DEFAULT_DELIMITER: &str = "-";

/// Replace each ASCII uppercase letter with `delimiter` followed by its lowercase form.
pub fn convert_case(input: &str, delimiter: &str) -> String {
    let mut output = String::with_capacity(input.len() + 4);

    for ch in input.chars() {
        if ch.is_ascii_uppercase() {
            output.push_str(delimiter);
            output.push(ch.to_ascii_lowercase());
        } else {
            output.push(ch);
        }
    }

    output
}

/// CSS property name for an article style property.
///
/// `name` segments become `family`, so `fontName` maps to `font-family`.
pub fn css_property_name(property: &str) -> String {
    let converted = convert_case(property, DEFAULT_DELIMITER);

    if !converted
        .split(DEFAULT_DELIMITER)
        .any(|segment| segment == "name")
    {
        return converted;
    }

    converted
        .split(DEFAULT_DELIMITER)
        .map(|segment| if segment == "name" { "family" } else { segment })
        .collect::<Vec<_>>()
        .join(DEFAULT_DELIMITER)
}
