//! Colour gradients for table cell styling

use std::fmt;

use serde::{Serialize, Serializer};

use crate::config::Colormap;

/// Text colour used on dark backgrounds.
pub const LIGHT_TEXT: &str = "#f1f1f1";
/// Text colour used on light backgrounds.
pub const DARK_TEXT: &str = "#000000";

/// Backgrounds darker than this relative luminance get light text.
const TEXT_COLOR_THRESHOLD: f64 = 0.408;

/// ColorBrewer `RdYlGn`, 11 stops from red to green.
const RD_YL_GN: [Rgb; 11] = [
    Rgb::new(0xa5, 0x00, 0x26),
    Rgb::new(0xd7, 0x30, 0x27),
    Rgb::new(0xf4, 0x6d, 0x43),
    Rgb::new(0xfd, 0xae, 0x61),
    Rgb::new(0xfe, 0xe0, 0x8b),
    Rgb::new(0xff, 0xff, 0xbf),
    Rgb::new(0xd9, 0xef, 0x8b),
    Rgb::new(0xa6, 0xd9, 0x6a),
    Rgb::new(0x66, 0xbd, 0x63),
    Rgb::new(0x1a, 0x98, 0x50),
    Rgb::new(0x00, 0x68, 0x37),
];

/// 8-bit sRGB colour, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a colour from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// WCAG relative luminance in `[0, 1]`.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        fn linear(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.0722f64.mul_add(
            linear(self.b),
            0.2126f64.mul_add(linear(self.r), 0.7152 * linear(self.g)),
        )
    }

    /// Foreground colour readable on this background.
    #[must_use]
    pub fn text_color(self) -> &'static str {
        if self.relative_luminance() < TEXT_COLOR_THRESHOLD {
            LIGHT_TEXT
        } else {
            DARK_TEXT
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |a: u8, b: u8| (f64::from(b) - f64::from(a)).mul_add(t, f64::from(a)).round() as u8;
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Colormap {
    const fn stops(self) -> &'static [Rgb] {
        match self {
            Self::RdYlGn => &RD_YL_GN,
        }
    }

    /// Colour at position `t` along the map; `t` is clamped to `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn sample(self, t: f64) -> Rgb {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (stops.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(stops.len() - 2);
        stops[lower].lerp(stops[lower + 1], scaled - lower as f64)
    }
}

/// Linear min-to-max normalisation over one column.
///
/// A column whose values are all equal maps every value to 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    min: f64,
    max: f64,
}

impl Normalizer {
    /// Fit to the range of `values`. `None` for an empty column.
    pub fn fit(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |range, v| match range {
            None => Some(Self { min: v, max: v }),
            Some(Self { min, max }) => Some(Self {
                min: min.min(v),
                max: max.max(v),
            }),
        })
    }

    /// Position of `value` within the fitted range.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range <= 0.0 {
            0.0
        } else {
            (value - self.min) / range
        }
    }
}
