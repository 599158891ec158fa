//! Trailing filename extraction for media URLs.

use once_cell::sync::Lazy;
use regex::Regex;

static FILE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_-]+\.[A-Za-z0-9]+$").expect("valid filename pattern"));

/// Extract the filename at the end of a URL or path.
///
/// Returns the input unchanged when it does not end in something shaped like
/// `name.ext`.
///
/// ```ignore
/// assert_eq!(extract_file_name("https://example.com/assets/photo.jpg"), "photo.jpg");
/// ```
pub fn extract_file_name(input: &str) -> String {
    match FILE_NAME.find(input) {
        Some(found) => found.as_str().replace('/', ""),
        None => input.to_string(),
    }
}
