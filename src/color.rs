//! Color conversions and perceptual contrast.
//!
//! All functions here are pure. RGB channels are carried as `f32` on the
//! 0-255 scale so that out-of-range intermediates from boosted-saturation
//! candidates survive until [`clamp_rgb`] is applied.

/// A color in HSV space. Hue in degrees `[0, 360)`, saturation and value
/// nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Linearize one sRGB channel given on the 0-255 scale.
pub fn srgb_to_linear(c: f32) -> f32 {
    let v = c / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance of an RGB color (channels on the 0-255 scale).
pub fn relative_luminance(rgb: [f32; 3]) -> f32 {
    0.2126 * srgb_to_linear(rgb[0])
        + 0.7152 * srgb_to_linear(rgb[1])
        + 0.0722 * srgb_to_linear(rgb[2])
}

/// WCAG contrast ratio between two colors. Symmetric, >= 1 for in-range
/// inputs.
pub fn contrast_ratio(a: [f32; 3], b: [f32; 3]) -> f32 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let l1 = la.max(lb);
    let l2 = la.min(lb);
    (l1 + 0.05) / (l2 + 0.05)
}

/// Convert RGB (channels on the 0-255 scale) to HSV.
///
/// Hue is defined as 0 when the color is achromatic (max == min).
pub fn rgb_to_hsv(rgb: [f32; 3]) -> Hsv {
    let r = rgb[0] / 255.0;
    let g = rgb[1] / 255.0;
    let b = rgb[2] / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let mut h = 0.0;
    if d != 0.0 {
        // Ties resolve to the earlier channel, R before G before B.
        if max == r {
            h = 60.0 * (((g - b) / d) % 6.0);
        } else if max == g {
            h = 60.0 * ((b - r) / d + 2.0);
        } else {
            h = 60.0 * ((r - g) / d + 4.0);
        }
    }
    if h < 0.0 {
        h += 360.0;
    }

    let s = if max == 0.0 { 0.0 } else { d / max };
    Hsv { h, s, v: max }
}

/// Convert HSV to RGB, returning rounded channel values on the 0-255 scale
/// WITHOUT clamping. Saturation above 1.0 can push a channel negative or
/// past 255; callers clamp via [`clamp_rgb`].
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [
        ((r + m) * 255.0).round(),
        ((g + m) * 255.0).round(),
        ((b + m) * 255.0).round(),
    ]
}

/// Clamp channel values to `[0, 255]` and narrow to 8 bits. Applied to every
/// color before it is stored or handed to a renderer.
pub fn clamp_rgb(rgb: [f32; 3]) -> [u8; 3] {
    [
        rgb[0].clamp(0.0, 255.0) as u8,
        rgb[1].clamp(0.0, 255.0) as u8,
        rgb[2].clamp(0.0, 255.0) as u8,
    ]
}

/// Circular distance between two hue angles in degrees, in `[0, 180]`.
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).abs();
    d.min(360.0 - d)
}
