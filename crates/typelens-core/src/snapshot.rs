#![forbid(unsafe_code)]

//! The immutable per-lookup record.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One captured record of a text selection's computed style.
///
/// Created when a selection settles, then either discarded (duplicate
/// suppression) or appended to the history log. Never mutated in place.
///
/// Field names serialize in camelCase to stay wire-compatible with the
/// persisted history format.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FontSnapshot {
    /// First entry of the computed family stack, quotes stripped.
    pub primary_family: String,
    /// Remaining stack entries re-joined with `", "`; empty when the stack
    /// has a single entry.
    pub fallback_family: String,
    /// The full computed family stack, quotes stripped.
    pub full_family_stack: String,
    /// Computed font size, unit-qualified (e.g. `16px`).
    pub font_size_px: String,
    /// Computed font weight (e.g. `400`, `700`).
    pub font_weight: String,
    /// Computed font style (e.g. `normal`, `italic`).
    pub font_style: String,
    /// Computed line height.
    pub line_height: String,
    /// Computed letter spacing.
    pub letter_spacing: String,
    /// Computed word spacing.
    pub word_spacing: String,
    /// Computed text transform.
    pub text_transform: String,
    /// Computed text decoration (full shorthand value).
    pub text_decoration: String,
    /// `#RRGGBB` uppercase, or the raw color uppercased on a parse miss.
    pub color_hex: String,
    /// The computed color exactly as the host reported it.
    pub color_rgb_raw: String,
    /// Whether the primary family matched the known web-font catalog.
    pub is_known_web_font: bool,
    /// Catalog lookup URL when the family is a known web font.
    pub web_font_catalog_url: Option<String>,
    /// Capture instant, milliseconds since the Unix epoch.
    pub captured_at_epoch_ms: u64,
    /// Host name of the page the selection was made on.
    pub source_host: String,
}

impl FontSnapshot {
    /// Whether the text transform carries a non-default value worth showing
    /// in the advanced section.
    #[must_use]
    pub fn has_transform(&self) -> bool {
        !self.text_transform.is_empty() && self.text_transform != "none"
    }

    /// Whether the text decoration carries a non-default value.
    ///
    /// Browsers expand the shorthand, so the computed default reads
    /// `none solid <color>` rather than a bare `none`.
    #[must_use]
    pub fn has_decoration(&self) -> bool {
        !self.text_decoration.is_empty()
            && self.text_decoration != "none"
            && !self.text_decoration.starts_with("none ")
    }

    /// First token of the decoration shorthand, for compact display.
    #[must_use]
    pub fn decoration_line(&self) -> &str {
        self.text_decoration
            .split_whitespace()
            .next()
            .unwrap_or_default()
    }
}
