// color.rs - Paint values handed to the drawing surface
//
// Canvas 2D takes CSS strings, so colours format themselves via Display.

use std::fmt;

// Purple band for particle fills
pub const HUE_MIN: f64 = 270.0;
pub const HUE_SPAN: f64 = 30.0;

// Shared violet used by outlines and links
pub const GLOW: (u8, u8, u8) = (181, 55, 242);
pub const GLOW_ALPHA: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// hue in degrees, saturation/lightness in percent
    Hsl { h: f64, s: f64, l: f64 },
    /// 8-bit channels, alpha in [0, 1]
    Rgba { r: u8, g: u8, b: u8, a: f64 },
}

impl Color {
    /// Particle fill for a unit sample `t` in [0, 1).
    pub fn purple(t: f64) -> Self {
        Color::Hsl { h: HUE_MIN + t * HUE_SPAN, s: 100.0, l: 50.0 }
    }

    pub fn glow(a: f64) -> Self {
        let (r, g, b) = GLOW;
        Color::Rgba { r, g, b, a }
    }

    pub fn black(a: f64) -> Self {
        Color::Rgba { r: 0, g: 0, b: 0, a }
    }

    #[cfg(test)]
    pub fn alpha(&self) -> f64 {
        match *self {
            Color::Hsl { .. } => 1.0,
            Color::Rgba { a, .. } => a,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Hsl { h, s, l } => write!(f, "hsl({}, {}%, {}%)", h, s, l),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_css() {
        assert_eq!(Color::purple(0.5).to_string(), "hsl(285, 100%, 50%)");
        assert_eq!(Color::glow(0.3).to_string(), "rgba(181, 55, 242, 0.3)");
        assert_eq!(Color::black(0.1).to_string(), "rgba(0, 0, 0, 0.1)");
    }

    #[test]
    fn purple_stays_in_band() {
        for t in [0.0, 0.25, 0.999_999] {
            let Color::Hsl { h, .. } = Color::purple(t) else { unreachable!() };
            assert!((HUE_MIN..HUE_MIN + HUE_SPAN).contains(&h));
        }
    }
}
