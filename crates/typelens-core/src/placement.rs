#![forbid(unsafe_code)]

//! Viewport-aware panel placement.
//!
//! Positions a measured panel near a selection anchor so it stays fully
//! inside the visible viewport, preferring placement above the anchor. A
//! deterministic, pure function of the anchor rect (viewport coordinates),
//! the measured panel size, and the viewport geometry; output is in
//! document coordinates.

use crate::geometry::{RectF, SizeF, Viewport};

/// Default inset between the panel and the viewport edges, in pixels.
pub const DEFAULT_PADDING: f64 = 12.0;

/// A computed panel position in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlacement {
    /// Panel left edge.
    pub x: f64,
    /// Panel top edge.
    pub y: f64,
    /// True when the panel was placed below the anchor; affects only a
    /// visual indicator, not further geometry.
    pub flipped: bool,
}

/// Compute where the panel goes, or `None` for a degenerate anchor.
///
/// A collapsed selection (zero-size anchor) means the panel must be hidden
/// rather than positioned at degenerate coordinates.
#[must_use]
pub fn place(anchor: RectF, panel: SizeF, viewport: Viewport, padding: f64) -> Option<PanelPlacement> {
    if anchor.is_empty() {
        return None;
    }

    // Horizontal: center on the anchor midpoint, clamp both edges into the
    // padded viewport.
    let x = clamp_low_priority(
        viewport.scroll_x + anchor.center_x() - panel.width / 2.0,
        viewport.scroll_x + padding,
        viewport.scroll_x + viewport.width - padding - panel.width,
    );

    let above_top = viewport.scroll_y + anchor.top() - panel.height - padding;
    let below_top = viewport.scroll_y + anchor.bottom() + padding;

    let (y, flipped) = if above_top >= viewport.scroll_y + padding {
        (above_top, false)
    } else if below_top + panel.height <= viewport.scroll_y + viewport.height - padding {
        (below_top, true)
    } else {
        // Neither side fits: center on the anchor and let the clamp below
        // pull the panel fully into the padded viewport.
        (
            viewport.scroll_y + anchor.center_y() - panel.height / 2.0,
            false,
        )
    };

    // Final safety pass; pins panels taller than the viewport to the
    // padding-inset top.
    let y = clamp_low_priority(
        y,
        viewport.scroll_y + padding,
        viewport.scroll_y + viewport.height - panel.height - padding,
    );

    Some(PanelPlacement { x, y, flipped })
}

/// Clamp into `[low, high]`, pinning to `low` when the interval is
/// inverted (panel larger than the padded viewport).
fn clamp_low_priority(value: f64, low: f64, high: f64) -> f64 {
    value.min(high).max(low)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PAD: f64 = DEFAULT_PADDING;

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 800.0)
    }

    #[test]
    fn prefers_above_when_there_is_room() {
        let anchor = RectF::new(400.0, 300.0, 120.0, 20.0);
        let panel = SizeF::new(300.0, 150.0);
        let p = place(anchor, panel, viewport(), PAD).unwrap();
        assert!(!p.flipped);
        assert_eq!(p.y, 300.0 - 150.0 - PAD);
        assert!(p.y >= PAD);
        // Centered on the anchor midpoint.
        assert_eq!(p.x, 400.0 + 60.0 - 150.0);
    }

    #[test]
    fn flips_below_when_above_does_not_fit() {
        let anchor = RectF::new(400.0, 100.0, 120.0, 20.0);
        let panel = SizeF::new(300.0, 150.0);
        let p = place(anchor, panel, viewport(), PAD).unwrap();
        assert!(p.flipped);
        assert_eq!(p.y, 120.0 + PAD);
        assert!(p.y + 150.0 <= 800.0 - PAD);
    }

    #[test]
    fn centers_and_clamps_when_neither_side_fits() {
        let anchor = RectF::new(400.0, 5.0, 120.0, 20.0);
        let panel = SizeF::new(300.0, 700.0);
        let p = place(anchor, panel, viewport(), PAD).unwrap();
        assert!(!p.flipped);
        assert!(p.y >= PAD);
        assert!(p.y <= 800.0 - 700.0 - PAD);
    }

    #[test]
    fn panel_taller_than_viewport_pins_to_padded_top() {
        let anchor = RectF::new(400.0, 300.0, 120.0, 20.0);
        let panel = SizeF::new(300.0, 900.0);
        let p = place(anchor, panel, viewport(), PAD).unwrap();
        assert_eq!(p.y, PAD);
    }

    #[test]
    fn horizontal_clamps_at_viewport_edges() {
        let panel = SizeF::new(300.0, 100.0);
        let left = place(RectF::new(0.0, 400.0, 10.0, 20.0), panel, viewport(), PAD).unwrap();
        assert_eq!(left.x, PAD);
        let right = place(RectF::new(990.0, 400.0, 10.0, 20.0), panel, viewport(), PAD).unwrap();
        assert_eq!(right.x, 1000.0 - PAD - 300.0);
    }

    #[test]
    fn scroll_offsets_shift_output_into_document_space() {
        let vp = Viewport::with_scroll(1000.0, 800.0, 50.0, 2000.0);
        let anchor = RectF::new(400.0, 300.0, 120.0, 20.0);
        let panel = SizeF::new(300.0, 150.0);
        let p = place(anchor, panel, vp, PAD).unwrap();
        assert_eq!(p.y, 2000.0 + 300.0 - 150.0 - PAD);
        assert_eq!(p.x, 50.0 + 400.0 + 60.0 - 150.0);
    }

    #[test]
    fn degenerate_anchor_hides_the_panel() {
        let panel = SizeF::new(300.0, 150.0);
        assert_eq!(place(RectF::default(), panel, viewport(), PAD), None);
        assert_eq!(
            place(RectF::new(10.0, 10.0, 0.0, 20.0), panel, viewport(), PAD),
            None
        );
    }

    proptest! {
        #[test]
        fn placement_always_lands_in_padded_viewport(
            ax in 0.0f64..1000.0,
            ay in 0.0f64..800.0,
            aw in 1.0f64..400.0,
            ah in 1.0f64..200.0,
            pw in 50.0f64..600.0,
            ph in 50.0f64..600.0,
            sx in 0.0f64..5000.0,
            sy in 0.0f64..5000.0,
        ) {
            let vp = Viewport::with_scroll(1000.0, 800.0, sx, sy);
            let p = place(RectF::new(ax, ay, aw, ah), SizeF::new(pw, ph), vp, PAD).unwrap();
            // Panel fits in the padded viewport whenever it can.
            prop_assert!(p.y >= sy + PAD - 1e-9);
            prop_assert!(p.x >= sx + PAD - 1e-9);
            if pw <= 1000.0 - 2.0 * PAD {
                prop_assert!(p.x + pw <= sx + 1000.0 - PAD + 1e-9);
            }
            if ph <= 800.0 - 2.0 * PAD {
                prop_assert!(p.y + ph <= sy + 800.0 - PAD + 1e-9);
            }
        }
    }
}
