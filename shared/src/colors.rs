use std::fmt;

/// Opaque sRGB color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Fill used for a hovered region that has statistics.
pub const HIGHLIGHT: Rgb = Rgb::new(0xff, 0xcc, 0x00);

/// Luminance above which dark text is used on top of a fill.
pub const CONTRAST_THRESHOLD: f64 = 125.0;

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness on a 0..255 scale: `(299R + 587G + 114B) / 1000`.
    pub fn luminance(self) -> f64 {
        (self.r as f64 * 299.0 + self.g as f64 * 587.0 + self.b as f64 * 114.0) / 1000.0
    }

    /// Text color readable on top of this fill.
    pub fn contrast_text(self) -> TextColor {
        if self.luminance() > CONTRAST_THRESHOLD {
            TextColor::Black
        } else {
            TextColor::White
        }
    }

    pub fn css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    pub const fn css(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

/// Format RGBA as a CSS color string.
pub fn rgba_css(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({r},{g},{b},{a})")
}

/// Left-to-right CSS gradient through every stop, in order.
pub fn linear_gradient_css(stops: &[Rgb]) -> String {
    let joined = stops
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("linear-gradient(to right, {joined})")
}

#[cfg(test)]
mod tests {
    use super::{Rgb, TextColor, linear_gradient_css, rgba_css};

    #[test]
    fn displays_lowercase_hex() {
        assert_eq!(Rgb::new(255, 204, 0).to_string(), "#ffcc00");
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(Rgb::new(0, 0, 0).luminance(), 0.0);
        assert_eq!(Rgb::new(255, 255, 255).luminance(), 255.0);
    }

    #[test]
    fn luminance_exactly_at_threshold_uses_white() {
        // 299*125 + 587*125 + 114*125 = 125_000
        let gray = Rgb::new(125, 125, 125);
        assert_eq!(gray.luminance(), 125.0);
        assert_eq!(gray.contrast_text(), TextColor::White);
    }

    #[test]
    fn luminance_just_above_threshold_uses_black() {
        assert_eq!(Rgb::new(126, 125, 125).contrast_text(), TextColor::Black);
    }

    #[test]
    fn highlight_takes_dark_text() {
        assert_eq!(super::HIGHLIGHT.contrast_text(), TextColor::Black);
    }

    #[test]
    fn gradient_lists_stops_in_order() {
        let css = linear_gradient_css(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]);
        assert_eq!(css, "linear-gradient(to right, #000000, #ffffff)");
    }

    #[test]
    fn rgba_formats_alpha() {
        assert_eq!(rgba_css(0, 0, 0, 0.7), "rgba(0,0,0,0.7)");
    }
}
