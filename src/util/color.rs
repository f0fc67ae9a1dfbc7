//! RGB color values and the desaturation math behind hover dimming.
//!
//! Colors cross the host seam as `#rrggbb` strings (the convention of
//! canvas/WebGL graph data) and live inside the crate as packed RGB bytes.

use crate::error::GravaError;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Construct from channel values.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` or `#rgb` hex string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`GravaError::InvalidColor`] when the string is not a
    /// well-formed hex color.
    pub fn from_hex(s: &str) -> Result<Self, GravaError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| GravaError::InvalidColor(s.to_owned()))?;

        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16)
                .map_err(|_| GravaError::InvalidColor(s.to_owned()))
        };

        match digits.len() {
            6 => Ok(Self {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            // Short form: each digit doubles (#abc == #aabbcc)
            3 => {
                let wide = |hex: &str| channel(hex).map(|v| v * 16 + v);
                Ok(Self {
                    r: wide(&digits[0..1])?,
                    g: wide(&digits[1..2])?,
                    b: wide(&digits[2..3])?,
                })
            }
            _ => Err(GravaError::InvalidColor(s.to_owned())),
        }
    }

    /// Format as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Relative luminance in [0, 255], Rec. 601 weights.
    #[must_use]
    pub fn luma(self) -> f32 {
        0.299 * f32::from(self.r)
            + 0.587 * f32::from(self.g)
            + 0.114 * f32::from(self.b)
    }

    /// Pull the color toward its own gray value by `amount` in [0, 1].
    ///
    /// `0.0` is a no-op, `1.0` is fully gray. Luminance is preserved, so a
    /// desaturated palette keeps its light/dark structure — this is the
    /// "dim" primitive the style rules apply to non-neighbors.
    #[must_use]
    pub fn desaturate(self, amount: f32) -> Self {
        let gray = self.luma();
        let g = Self {
            r: channel_from_f32(gray),
            g: channel_from_f32(gray),
            b: channel_from_f32(gray),
        };
        self.mix(g, amount)
    }

    /// Linear per-channel blend toward `other` by `t` in [0, 1].
    #[must_use]
    pub fn mix(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| {
            channel_from_f32(f32::from(a) + (f32::from(b) - f32::from(a)) * t)
        };
        Self {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
        }
    }
}

/// Round and clamp a float channel back to u8.
fn channel_from_f32(v: f32) -> u8 {
    let v = v.round();
    if v <= 0.0 {
        0
    } else if v >= 255.0 {
        255
    } else {
        // Range checked above
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            v as u8
        }
    }
}
