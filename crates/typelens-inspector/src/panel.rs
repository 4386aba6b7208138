#![forbid(unsafe_code)]

//! The panel view model.
//!
//! A [`PanelView`] is the data the host renders into the floating element:
//! fixed structural regions (header, quick actions, family block, property
//! grid, spacing grid, color block, and a conditional advanced section),
//! each copyable region carrying its exact copy payload. The host attaches
//! the payload as a string attribute and reports clicks back as
//! [`PanelRegion`] values.

use typelens_core::FontSnapshot;

/// Panel header title.
pub const PANEL_TITLE: &str = "TypeLens";

/// Panel header subtitle.
pub const PANEL_SUBTITLE: &str = "Click any property to copy \u{2022} Esc to close";

/// A clickable region of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRegion {
    /// Header close button.
    Close,
    /// Quick action: copy the primary family name.
    CopyFontAction,
    /// Quick action: copy the full CSS declaration block.
    CopyCssAction,
    /// Quick action: copy the hex color.
    CopyColorAction,
    /// Quick action: open the known-font catalog link.
    OpenCatalogAction,
    /// Primary family line in the font block.
    PrimaryFamily,
    /// Full family stack line (present when a fallback exists).
    FullStack,
    /// Property grid cells.
    FontSize,
    FontWeight,
    FontStyle,
    LineHeight,
    /// Spacing grid cells.
    LetterSpacing,
    WordSpacing,
    /// Color swatch block.
    ColorSwatch,
    /// Advanced section cells.
    TextTransform,
    TextDecoration,
}

/// One cell of a property grid.
///
/// `display` is what the cell shows; `copy` is the exact payload a click
/// places on the clipboard. They differ only where the display is
/// abbreviated (the decoration cell shows its first token).
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyCell {
    pub label: &'static str,
    pub display: String,
    pub copy: String,
}

impl PropertyCell {
    fn plain(label: &'static str, value: &str) -> Self {
        Self {
            label,
            display: value.to_owned(),
            copy: value.to_owned(),
        }
    }
}

/// The color block: swatch plus both representations.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBlock {
    /// Canonical hex form; also the copy payload and the swatch fill.
    pub hex: String,
    /// The raw computed color for reference display.
    pub rgb_raw: String,
}

/// Everything the host needs to render the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    /// Whether the dark theme class applies.
    pub theme_dark: bool,
    /// Primary family headline.
    pub primary_family: String,
    /// Full stack line, present only when a fallback exists. Its copy
    /// payload is the full stack itself.
    pub full_stack: Option<String>,
    /// Size / weight / style / line-height grid.
    pub properties: Vec<PropertyCell>,
    /// Letter / word spacing grid.
    pub spacing: Vec<PropertyCell>,
    /// Transform / decoration cells; empty when both carry defaults, in
    /// which case the section is not rendered.
    pub advanced: Vec<PropertyCell>,
    /// Color swatch block.
    pub color: ColorBlock,
    /// Catalog link for known web fonts.
    pub catalog_url: Option<String>,
    /// Ready-to-paste CSS declaration block.
    pub css_block: String,
}

impl PanelView {
    /// Build the view for a snapshot under the given theme.
    #[must_use]
    pub fn build(snapshot: &FontSnapshot, theme_dark: bool) -> Self {
        let mut advanced = Vec::new();
        if snapshot.has_transform() {
            advanced.push(PropertyCell::plain("Transform", &snapshot.text_transform));
        }
        if snapshot.has_decoration() {
            advanced.push(PropertyCell {
                label: "Decoration",
                display: snapshot.decoration_line().to_owned(),
                copy: snapshot.text_decoration.clone(),
            });
        }

        Self {
            theme_dark,
            primary_family: snapshot.primary_family.clone(),
            full_stack: (!snapshot.fallback_family.is_empty())
                .then(|| snapshot.full_family_stack.clone()),
            properties: vec![
                PropertyCell::plain("Size", &snapshot.font_size_px),
                PropertyCell::plain("Weight", &snapshot.font_weight),
                PropertyCell::plain("Style", &snapshot.font_style),
                PropertyCell::plain("Line Height", &snapshot.line_height),
            ],
            spacing: vec![
                PropertyCell::plain("Letter", &snapshot.letter_spacing),
                PropertyCell::plain("Word", &snapshot.word_spacing),
            ],
            advanced,
            color: ColorBlock {
                hex: snapshot.color_hex.clone(),
                rgb_raw: snapshot.color_rgb_raw.clone(),
            },
            catalog_url: snapshot.web_font_catalog_url.clone(),
            css_block: css_declaration_block(snapshot),
        }
    }

    /// The exact clipboard payload for a clicked region, or `None` for
    /// regions that are not copyable (close button, catalog link).
    #[must_use]
    pub fn copy_payload(&self, region: PanelRegion) -> Option<&str> {
        match region {
            PanelRegion::Close | PanelRegion::OpenCatalogAction => None,
            PanelRegion::CopyFontAction | PanelRegion::PrimaryFamily => {
                Some(&self.primary_family)
            }
            PanelRegion::FullStack => self.full_stack.as_deref(),
            PanelRegion::CopyCssAction => Some(&self.css_block),
            PanelRegion::CopyColorAction | PanelRegion::ColorSwatch => Some(&self.color.hex),
            PanelRegion::FontSize => self.cell_copy(&self.properties, "Size"),
            PanelRegion::FontWeight => self.cell_copy(&self.properties, "Weight"),
            PanelRegion::FontStyle => self.cell_copy(&self.properties, "Style"),
            PanelRegion::LineHeight => self.cell_copy(&self.properties, "Line Height"),
            PanelRegion::LetterSpacing => self.cell_copy(&self.spacing, "Letter"),
            PanelRegion::WordSpacing => self.cell_copy(&self.spacing, "Word"),
            PanelRegion::TextTransform => self.cell_copy(&self.advanced, "Transform"),
            PanelRegion::TextDecoration => self.cell_copy(&self.advanced, "Decoration"),
        }
    }

    fn cell_copy<'a>(&self, cells: &'a [PropertyCell], label: &str) -> Option<&'a str> {
        cells
            .iter()
            .find(|cell| cell.label == label)
            .map(|cell| cell.copy.as_str())
    }
}

/// Assemble the ready-to-paste declaration block for a snapshot.
#[must_use]
pub fn css_declaration_block(snapshot: &FontSnapshot) -> String {
    format!(
        "font-family: {};\nfont-size: {};\nfont-weight: {};\nfont-style: {};\nline-height: {};\nletter-spacing: {};\ncolor: {};",
        snapshot.full_family_stack,
        snapshot.font_size_px,
        snapshot.font_weight,
        snapshot.font_style,
        snapshot.line_height,
        snapshot.letter_spacing,
        snapshot.color_hex,
    )
}
