//! Tunable knobs for generation and compositing, parsed from CLI strings.

use super::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static IMAGE_SIZE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d{2,5})\s*[xX]\s*(\d{2,5})\s*$").expect("valid size regex"));

/// Target pixel dimensions requested from the generation service, serialized as `"WxH"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    /// Portrait 2:3, the closest supported shape to an A-series print poster.
    pub const PORTRAIT_POSTER: ImageSize = ImageSize {
        width: 1024,
        height: 1536,
    };
}

impl FromStr for ImageSize {
    type Err = ValidationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidImageSize {
            input: input.to_string(),
        };
        let captures = IMAGE_SIZE_PATTERN.captures(input).ok_or_else(invalid)?;
        let width = captures[1].parse::<u32>().map_err(|_| invalid())?;
        let height = captures[2].parse::<u32>().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self { width, height })
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Quality tier understood by the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageQuality {
    Low,
    Medium,
    High,
    Auto,
}

impl ImageQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for ImageQuality {
    type Err = ValidationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" | "hd" => Ok(Self::High),
            "auto" => Ok(Self::Auto),
            _ => Err(ValidationError::UnknownVariant {
                kind: "quality",
                input: input.to_string(),
                expected: "low, medium, high, auto",
            }),
        }
    }
}

impl fmt::Display for ImageQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named placement position for the logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    TopRight,
    TopCenter,
    BottomRight,
    BottomCenter,
}

impl Anchor {
    pub fn is_top(&self) -> bool {
        matches!(self, Self::TopRight | Self::TopCenter)
    }

    pub fn is_centered(&self) -> bool {
        matches!(self, Self::TopCenter | Self::BottomCenter)
    }

    /// Human wording used in layout directives ("top-right corner").
    pub fn describe(&self) -> &'static str {
        match self {
            Self::TopRight => "top-right corner",
            Self::TopCenter => "top centre",
            Self::BottomRight => "bottom-right corner",
            Self::BottomCenter => "bottom centre",
        }
    }
}

impl FromStr for Anchor {
    type Err = ValidationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "top-right" => Ok(Self::TopRight),
            "top-center" | "top-centre" => Ok(Self::TopCenter),
            "bottom-right" => Ok(Self::BottomRight),
            "bottom-center" | "bottom-centre" => Ok(Self::BottomCenter),
            _ => Err(ValidationError::UnknownVariant {
                kind: "anchor",
                input: input.to_string(),
                expected: "top-right, top-center, bottom-right, bottom-center",
            }),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TopRight => "top-right",
            Self::TopCenter => "top-center",
            Self::BottomRight => "bottom-right",
            Self::BottomCenter => "bottom-center",
        };
        f.write_str(name)
    }
}

/// Divisor applied to the poster width to obtain the logo width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleRatio(u32);

impl ScaleRatio {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 12;

    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfBounds {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for ScaleRatio {
    fn default() -> Self {
        Self(4)
    }
}

/// Opaque RGB fill used for the non-overlapping padding strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor(pub [u8; 3]);

impl HexColor {
    pub const WHITE: HexColor = HexColor([255, 255, 255]);

    pub fn to_rgba(self) -> [u8; 4] {
        let [r, g, b] = self.0;
        [r, g, b, 255]
    }
}

impl FromStr for HexColor {
    type Err = ValidationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidColor {
            input: input.to_string(),
        };
        let hex = input.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}
