//! String helpers shared by the HTML and CSS generators.

pub mod case;
pub mod filename;

pub use case::{convert_case, css_property_name, DEFAULT_DELIMITER};
pub use filename::extract_file_name;
