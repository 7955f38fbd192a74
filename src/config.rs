//! Card configuration.
//!
//! Everything the composer draws (canvas size, colors, margins, font sizes,
//! tag labels, asset and output paths) lives in [`CardConfig`] rather than
//! in constants scattered through the drawing code. [`CardConfig::default`]
//! reproduces the production card; tests substitute small canvases and
//! fixture assets.
//!
//! The config serializes to camelCase JSON:
//!
//! ```
//! use ogcard_renderer::CardConfig;
//!
//! let config = CardConfig::default();
//! let json = config.to_json_pretty().unwrap();
//! let restored = CardConfig::from_json(&json).unwrap();
//! assert_eq!(restored.canvas, config.canvas);
//! ```

use std::path::PathBuf;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::geometry::SizePx;

/// Card colors are plain 8-bit sRGB triples.
pub type Color = Srgb<u8>;

// ============================================================================
// Palette constants
// ============================================================================

const PURPLE: Color = Srgb::new(102, 126, 234);
const INDIGO: Color = Srgb::new(90, 103, 216);
const GRAY: Color = Srgb::new(107, 114, 128);
const DARK: Color = Srgb::new(31, 41, 55);
const WHITE: Color = Srgb::new(255, 255, 255);
const PILL: Color = Srgb::new(237, 242, 255);

// ============================================================================
// Section settings
// ============================================================================

/// Horizontal two-color gradient background.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradientSettings {
    /// Color at the left edge.
    pub start: Color,
    /// Color at the right edge.
    pub end: Color,
}

impl Default for GradientSettings {
    fn default() -> Self {
        Self { start: PURPLE, end: INDIGO }
    }
}

/// The rounded card painted over the gradient.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardSettings {
    /// Uniform margin between the canvas edge and the card.
    pub margin: u32,
    /// Corner radius; callers keep `2 * radius` below the card's smaller side.
    pub radius: u32,
    pub fill: Color,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self { margin: 60, radius: 24, fill: WHITE }
    }
}

/// The circular-cropped logo on the left side of the card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoSettings {
    /// Path to the logo image. A missing or undecodable file aborts the run.
    pub path: PathBuf,
    /// Side length of the square the logo is resized to.
    pub size: u32,
    /// Horizontal inset from the card's left edge.
    pub inset_x: u32,
    /// Gap between the logo's right edge and the text column.
    pub text_gap: u32,
}

impl Default for LogoSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("sclogo.png"),
            size: 220,
            inset_x: 55,
            text_gap: 50,
        }
    }
}

/// Title, divider bar, and subtitle in the text column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeadingSettings {
    pub title: String,
    pub title_color: Color,
    /// Title anchor offset below the card's top edge.
    pub title_offset_y: u32,
    pub divider_color: Color,
    /// Divider vertical offset below the title anchor.
    pub divider_offset_y: u32,
    /// Half the divider's width; the bar is centered on the text column.
    pub divider_half_width: u32,
    pub divider_thickness: u32,
    pub subtitle: String,
    pub subtitle_color: Color,
    /// Subtitle anchor offset below the divider.
    pub subtitle_offset_y: u32,
}

impl Default for HeadingSettings {
    fn default() -> Self {
        Self {
            title: "SkillChart".into(),
            title_color: DARK,
            title_offset_y: 110,
            divider_color: PURPLE,
            divider_offset_y: 55,
            divider_half_width: 100,
            divider_thickness: 4,
            subtitle: "Developer Skills Evaluator".into(),
            subtitle_color: GRAY,
            subtitle_offset_y: 42,
        }
    }
}

/// The row of rounded tag pills.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagSettings {
    /// Labels drawn left to right. The caller keeps the row short enough to
    /// fit; an overlong row is clipped at the canvas edges.
    pub labels: Vec<String>,
    pub width: u32,
    pub height: u32,
    pub gap: u32,
    pub radius: u32,
    pub fill: Color,
    pub text_color: Color,
    /// Row top offset below the divider.
    pub offset_y: u32,
}

impl Default for TagSettings {
    fn default() -> Self {
        Self {
            labels: vec![
                "Backend".into(),
                "Data Science".into(),
                "Python".into(),
                "SQL".into(),
                "LLM / AI".into(),
            ],
            width: 128,
            height: 34,
            gap: 10,
            radius: 9,
            fill: PILL,
            text_color: INDIGO,
            offset_y: 105,
        }
    }
}

/// The URL caption under the tag row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptionSettings {
    pub text: String,
    pub color: Color,
    /// Caption anchor offset below the tag row's bottom edge.
    pub offset_y: u32,
}

impl Default for CaptionSettings {
    fn default() -> Self {
        Self {
            text: "skillchart.onrender.com".into(),
            color: GRAY,
            offset_y: 45,
        }
    }
}

/// Preferred font files and per-style pixel sizes.
///
/// When either file cannot be loaded, rendering falls back to the built-in
/// bitmap face and the three sizes collapse to one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSettings {
    pub bold_path: PathBuf,
    pub regular_path: PathBuf,
    pub title_size: f32,
    pub subtitle_size: f32,
    pub label_size: f32,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            bold_path: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
            regular_path: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
            title_size: 68.0,
            subtitle_size: 30.0,
            label_size: 24.0,
        }
    }
}

// ============================================================================
// CardConfig
// ============================================================================

/// Complete configuration for one card render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardConfig {
    pub canvas: SizePx,
    pub gradient: GradientSettings,
    pub card: CardSettings,
    pub logo: LogoSettings,
    pub heading: HeadingSettings,
    pub tags: TagSettings,
    pub caption: CaptionSettings,
    pub fonts: FontSettings,
    /// Output PNG path. The parent directory must already exist.
    pub output_path: PathBuf,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            canvas: SizePx::new(1200, 630),
            gradient: GradientSettings::default(),
            card: CardSettings::default(),
            logo: LogoSettings::default(),
            heading: HeadingSettings::default(),
            tags: TagSettings::default(),
            caption: CaptionSettings::default(),
            fonts: FontSettings::default(),
            output_path: PathBuf::from("public/og-image.png"),
        }
    }
}

impl CardConfig {
    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================
