//! Adaptive marker-color selection.
//!
//! Given the background pixel under a mark, picks a marker color that keeps
//! perceptual contrast against it while cycling the starting hue across
//! successive picks so clusters of marks on similar backgrounds do not all
//! come out the same.

use crate::color::{clamp_rgb, contrast_ratio, hsv_to_rgb, hue_distance, relative_luminance, rgb_to_hsv};
use crate::constants::{
    CURSOR_STEP, HUE_AVOID_DEG, MARKER_PALETTE_HUES, MARKER_SATURATION, SENTINEL_COLOR,
    VALUE_BRIGHT, VALUE_DARK,
};

/// Stateful marker-color picker for one annotation session.
///
/// The rotation cursor is the only state: it offsets where the hue walk
/// starts, advancing by [`CURSOR_STEP`] after every pick. Two sessions with
/// separate selectors never interfere.
#[derive(Debug, Clone, Default)]
pub struct MarkerColorSelector {
    cursor: usize,
}

impl MarkerColorSelector {
    /// Create a selector with the rotation cursor at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rotation cursor, an index into [`MARKER_PALETTE_HUES`].
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Pick a marker color for the given background pixel.
    ///
    /// Candidates are generated over two brightness tiers (the tier farther
    /// from the background luminance first) and the nine palette hues,
    /// skipping hues within [`HUE_AVOID_DEG`] of the background hue. Each
    /// candidate is scored by contrast ratio against the background, weighted
    /// by hue separation; ties resolve to the earliest-generated candidate.
    /// Channels are clamped to 8 bits only after scoring, so the boosted
    /// saturation influences the contrast term exactly as generated.
    pub fn pick(&mut self, bg: [u8; 3]) -> [u8; 3] {
        let bg = [bg[0] as f32, bg[1] as f32, bg[2] as f32];
        let bg_hsv = rgb_to_hsv(bg);
        let bg_lum = relative_luminance(bg);

        // Try the tier farthest from the background brightness first.
        let tiers = if bg_lum > 0.5 {
            [VALUE_DARK, VALUE_BRIGHT]
        } else {
            [VALUE_BRIGHT, VALUE_DARK]
        };

        let mut best: Option<([f32; 3], f32)> = None;
        for value in tiers {
            for i in 0..MARKER_PALETTE_HUES.len() {
                let hue = MARKER_PALETTE_HUES[(i + self.cursor) % MARKER_PALETTE_HUES.len()];
                let hue_diff = hue_distance(hue, bg_hsv.h);
                if hue_diff < HUE_AVOID_DEG {
                    continue;
                }

                let rgb = hsv_to_rgb(hue, MARKER_SATURATION, value);
                let score = contrast_ratio(rgb, bg) * (1.0 + hue_diff / 180.0);
                // Strictly greater keeps the first-generated candidate on ties.
                if best.is_none_or(|(_, s)| score > s) {
                    best = Some((rgb, score));
                }
            }
        }

        self.cursor = (self.cursor + CURSOR_STEP) % MARKER_PALETTE_HUES.len();

        match best {
            Some((rgb, _)) => clamp_rgb(rgb),
            None => SENTINEL_COLOR,
        }
    }
}
