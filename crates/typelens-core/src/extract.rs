#![forbid(unsafe_code)]

//! Selection-to-snapshot extraction.
//!
//! The host resolves the active selection's anchor to its nearest
//! element-bearing ancestor and reads that element's fully computed style
//! (resolved values, not author-declared ones). This module turns that raw
//! capture into a [`FontSnapshot`], or into nothing when there is nothing to
//! show.

use crate::catalog;
use crate::color;
use crate::geometry::RectF;
use crate::snapshot::FontSnapshot;

/// Computed style properties of the selection's element, as reported by the
/// host. All values are resolved strings straight from the style object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComputedTextStyle {
    pub font_family: String,
    pub font_size: String,
    pub font_weight: String,
    pub font_style: String,
    pub line_height: String,
    pub letter_spacing: String,
    pub word_spacing: String,
    pub text_transform: String,
    pub text_decoration: String,
    pub color: String,
}

/// A captured text selection: the selected text, the computed style of its
/// anchor element, where it was made, and its bounding rect in viewport
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// The raw selected text.
    pub text: String,
    /// Computed style of the nearest element-bearing ancestor.
    pub style: ComputedTextStyle,
    /// Host name of the page.
    pub source_host: String,
    /// Selection bounding rect; collapsed selections report a zero-size
    /// rect.
    pub anchor: RectF,
}

impl Selection {
    /// Whether the selection has any non-whitespace text.
    #[must_use]
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Produce a snapshot from a selection, or `None` when there is nothing to
/// show.
///
/// Empty/whitespace-only text and an empty computed font-family are the
/// same signal: no panel.
#[must_use]
pub fn snapshot(selection: &Selection, captured_at_epoch_ms: u64) -> Option<FontSnapshot> {
    if !selection.has_text() {
        return None;
    }

    let stack = strip_quotes(&selection.style.font_family);
    let mut families = stack.split(',').map(str::trim).filter(|f| !f.is_empty());
    let primary_family = families.next()?.to_owned();
    let fallback_family = families.collect::<Vec<_>>().join(", ");

    let is_known = catalog::is_known_web_font(&primary_family);
    let catalog_url = if is_known {
        catalog::catalog_url(&stack)
    } else {
        None
    };

    let style = &selection.style;
    Some(FontSnapshot {
        primary_family,
        fallback_family,
        full_family_stack: stack,
        font_size_px: style.font_size.clone(),
        font_weight: style.font_weight.clone(),
        font_style: style.font_style.clone(),
        line_height: style.line_height.clone(),
        letter_spacing: style.letter_spacing.clone(),
        word_spacing: style.word_spacing.clone(),
        text_transform: style.text_transform.clone(),
        text_decoration: style.text_decoration.clone(),
        color_hex: color::to_hex(&style.color),
        color_rgb_raw: style.color.clone(),
        is_known_web_font: is_known,
        web_font_catalog_url: catalog_url,
        captured_at_epoch_ms,
        source_host: selection.source_host.clone(),
    })
}

/// Strip single and double quotes from a family stack.
fn strip_quotes(family: &str) -> String {
    family.chars().filter(|c| *c != '\'' && *c != '"').collect()
}
