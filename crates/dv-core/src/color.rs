//! Color tokens used by theme palettes and style variables.
//!
//! A token is one of:
//! - `#RRGGBB`
//! - `#RRGGBBAA`
//! - `#RRGGBB NN%` (alpha as a percentage, used by tint variables)

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Fraction of CIE Lab lightness removed per darken step (`panel-darken-2`
/// is two steps, 15 points of L*)
pub const DARKEN_STEP: f32 = 0.075;

/// Luminance below which white text reads better than black
const READABLE_TEXT_THRESHOLD: f64 = 0.5;

/// Matches `#RRGGBB`, an optional `AA` suffix, and an optional ` NN%` alpha
static COLOR_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9A-Fa-f]{6})([0-9A-Fa-f]{2})?(?:\s+(\d{1,3})%)?$")
        .expect("Invalid color token regex")
});

/// An sRGB color with optional alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: Option<u8>,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: None,
        }
    }

    /// Build from a packed `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Parse a color token
    pub fn parse(token: &str) -> Result<Self> {
        let trimmed = token.trim();
        let caps = COLOR_TOKEN_REGEX
            .captures(trimmed)
            .ok_or_else(|| Error::invalid_color(token))?;

        let hex = &caps[1];
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::invalid_color(token))
        };
        let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);

        let alpha = match (caps.get(2), caps.get(3)) {
            (Some(_), Some(_)) => return Err(Error::invalid_color(token)),
            (Some(a), None) => {
                Some(u8::from_str_radix(a.as_str(), 16).map_err(|_| Error::invalid_color(token))?)
            }
            (None, Some(pct)) => {
                let pct: u16 = pct.as_str().parse().map_err(|_| Error::invalid_color(token))?;
                if pct > 100 {
                    return Err(Error::invalid_color(token));
                }
                Some(((pct as f32) * 255.0 / 100.0).round() as u8)
            }
            (None, None) => None,
        };

        Ok(Self { r, g, b, alpha })
    }

    /// Check whether a string is a valid color token
    pub fn is_valid_token(token: &str) -> bool {
        Self::parse(token).is_ok()
    }

    /// Drop the alpha channel
    pub fn opaque(self) -> Self {
        Self::rgb(self.r, self.g, self.b)
    }

    /// Lower CIE Lab lightness by `amount * 100` points, keeping hue.
    ///
    /// Channels that fall out of gamut are clamped, so very dark colors
    /// reach black after a step or two.
    pub fn darken(self, amount: f32) -> Self {
        if amount <= 0.0 {
            return self;
        }
        let (l, a, b) = to_lab(self);
        let l = l - f64::from(amount.min(1.0)) * 100.0;
        let (r, g, b) = from_lab(l, a, b);
        Self {
            r,
            g,
            b,
            alpha: self.alpha,
        }
    }

    /// Darken by a whole number of [`DARKEN_STEP`]s
    pub fn darken_steps(self, steps: u8) -> Self {
        self.darken(DARKEN_STEP * steps as f32)
    }

    /// Composite this color over an opaque background.
    ///
    /// Colors without alpha are returned unchanged.
    pub fn blend_over(self, background: Color) -> Self {
        let Some(alpha) = self.alpha else {
            return self;
        };
        let a = alpha as f32 / 255.0;
        let mix = |fg: u8, bg: u8| ((fg as f32) * a + (bg as f32) * (1.0 - a)).round() as u8;
        Self::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }

    /// WCAG relative luminance, 0.0 (black) to 1.0 (white)
    pub fn luminance(self) -> f64 {
        fn linear(c: u8) -> f64 {
            let c = c as f64 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// Black or white, whichever reads better on top of this color
    pub fn readable_text(self) -> Self {
        if self.luminance() < READABLE_TEXT_THRESHOLD {
            Self::WHITE
        } else {
            Self::BLACK
        }
    }
}

fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

fn linear_to_srgb(c: f64) -> u8 {
    let c = if c > 0.003_130_8 {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * c
    };
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

/// sRGB to CIE Lab (D65 white point)
fn to_lab(color: Color) -> (f64, f64, f64) {
    let (r, g, b) = (
        srgb_to_linear(color.r),
        srgb_to_linear(color.g),
        srgb_to_linear(color.b),
    );
    let x = (0.4124 * r + 0.3576 * g + 0.1805 * b) / 0.95047;
    let y = 0.2126 * r + 0.7152 * g + 0.0722 * b;
    let z = (0.0193 * r + 0.1192 * g + 0.9505 * b) / 1.08883;

    let f = |t: f64| {
        if t > 0.008856 {
            t.cbrt()
        } else {
            7.787 * t + 16.0 / 116.0
        }
    };
    let (fx, fy, fz) = (f(x), f(y), f(z));
    (116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

fn from_lab(l: f64, a: f64, b: f64) -> (u8, u8, u8) {
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let inv = |t: f64| {
        if t > 0.206_893 {
            t.powi(3)
        } else {
            (t - 16.0 / 116.0) / 7.787
        }
    };
    let (x, y, z) = (inv(fx) * 0.95047, inv(fy), inv(fz) * 1.08883);

    let r = 3.2406 * x - 1.5372 * y - 0.4986 * z;
    let g = -0.9689 * x + 1.8758 * y + 0.0415 * z;
    let b = 0.0557 * x - 0.2040 * y + 1.0570 * z;
    (linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
}

/// WCAG contrast ratio between two colors, 1.0 to 21.0
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let (la, lb) = (a.luminance(), b.luminance());
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if let Some(a) = self.alpha {
            write!(f, "{:02X}", a)?;
        }
        Ok(())
    }
}
