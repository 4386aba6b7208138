#![forbid(unsafe_code)]

//! Known web-font catalog.
//!
//! A fixed list of popular web font family names used for a simple
//! membership check. Detection is case-insensitive and substring-based, so
//! `"roboto condensed"` matches the catalog entry `"Roboto"`. On a match, a
//! specimen URL is constructed from the family stack; no network call is
//! made here.

/// Specimen URL template; the query slot takes a `+`-joined family name.
const CATALOG_URL_TEMPLATE: &str = "https://fonts.google.com/?query=";

/// Well-known web font family names.
pub const KNOWN_WEB_FONTS: &[&str] = &[
    "Roboto",
    "Open Sans",
    "Lato",
    "Montserrat",
    "Oswald",
    "Source Sans",
    "Raleway",
    "Poppins",
    "Noto Sans",
    "Noto Serif",
    "Merriweather",
    "Playfair Display",
    "Inter",
    "Nunito",
    "Ubuntu",
    "PT Sans",
    "Work Sans",
    "Fira Sans",
    "Quicksand",
    "Josefin Sans",
];

/// Check whether a primary family name refers to a known web font.
#[must_use]
pub fn is_known_web_font(primary_family: &str) -> bool {
    let haystack = primary_family.to_lowercase();
    KNOWN_WEB_FONTS
        .iter()
        .any(|entry| haystack.contains(&entry.to_lowercase()))
}

/// Build the catalog lookup URL for a family stack.
///
/// Takes the text before the first comma, trims it, and replaces internal
/// whitespace runs with `+`. Returns `None` when nothing remains.
#[must_use]
pub fn catalog_url(family_stack: &str) -> Option<String> {
    let first = family_stack.split(',').next().unwrap_or("").trim();
    if first.is_empty() {
        return None;
    }
    let query: Vec<&str> = first.split_whitespace().collect();
    Some(format!("{CATALOG_URL_TEMPLATE}{}", query.join("+")))
}
