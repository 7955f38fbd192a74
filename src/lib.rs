//! ogcard-renderer: Open Graph social card generator
//!
//! This crate composes a 1200x630 social preview card: a horizontal
//! gradient background, a rounded white card, a circular-cropped logo,
//! a title/divider/subtitle column, a row of tag pills, and a URL
//! caption, encoded as a PNG.
//!
//! # Example
//!
//! ```no_run
//! use ogcard_renderer::{CardComposer, CardConfig};
//!
//! let mut config = CardConfig::default();
//! config.heading.title = "My Project".into();
//! config.tags.labels = vec!["Rust".into(), "Graphics".into()];
//!
//! let composer = CardComposer::new(config);
//! let card = composer.compose()?;
//! card.save_png(std::path::Path::new("og-image.png"))?;
//! # Ok::<(), ogcard_renderer::ComposeError>(())
//! ```
//!
//! # Custom pipelines
//!
//! The standard card is drawn by an ordered sequence of named steps; see
//! [`DrawPipeline`] for building a card from a custom step sequence.

mod composer;
mod config;
mod error;
mod geometry;
mod raster;
mod step;
mod text;

pub use composer::{CardComposer, ComposedCard};
pub use config::{
    CaptionSettings, CardConfig, CardSettings, Color, FontSettings, GradientSettings,
    HeadingSettings, LogoSettings, TagSettings,
};
pub use error::ComposeError;
pub use geometry::{RectPx, SizePx};
pub use step::{
    CaptionStep, CardBox, CardStep, ComposeContext, DividerLine, DrawPipeline, DrawStep,
    GradientStep, HeadingStep, LogoStep, TagRow, TagRowStep, TextColumn,
};
pub use text::{TextRenderer, TextStyle};

#[cfg(test)]
pub(crate) mod test_support {
    //! Shared fixtures for the step and composer tests.

    use std::fs;
    use std::path::{Path, PathBuf};

    use image::{Rgba, RgbaImage};

    use crate::config::{CardConfig, FontSettings};
    use crate::geometry::SizePx;
    use crate::text::TextRenderer;

    /// A small card config with fixture-friendly dimensions and font paths
    /// that force the bitmap fallback.
    pub fn small_config() -> CardConfig {
        let mut config = CardConfig::default();
        config.canvas = SizePx::new(300, 160);
        config.card.margin = 10;
        config.card.radius = 8;
        config.logo.size = 64;
        config.logo.inset_x = 8;
        config.logo.text_gap = 10;
        config.logo.path = PathBuf::from("missing-logo.png");
        config.heading.title_offset_y = 30;
        config.heading.divider_offset_y = 20;
        config.heading.divider_half_width = 40;
        config.heading.divider_thickness = 2;
        config.heading.subtitle_offset_y = 14;
        config.tags.labels = vec!["A".into(), "B".into(), "C".into()];
        config.tags.width = 40;
        config.tags.height = 12;
        config.tags.gap = 4;
        config.tags.radius = 4;
        config.tags.offset_y = 30;
        config.caption.offset_y = 12;
        config.fonts.bold_path = PathBuf::from("/nonexistent/bold.ttf");
        config.fonts.regular_path = PathBuf::from("/nonexistent/regular.ttf");
        config
    }

    /// A renderer on the bitmap fallback face, deterministic across hosts.
    pub fn bitmap_text_renderer() -> TextRenderer {
        TextRenderer::from_settings(&FontSettings {
            bold_path: PathBuf::from("/nonexistent/bold.ttf"),
            regular_path: PathBuf::from("/nonexistent/regular.ttf"),
            ..FontSettings::default()
        })
    }

    /// A per-test temp directory, removed on drop.
    pub struct TempWorkspace {
        root: PathBuf,
    }

    impl TempWorkspace {
        pub fn new(tag: &str) -> Self {
            let root = std::env::temp_dir().join(format!(
                "ogcard-{tag}-{}",
                std::process::id()
            ));
            fs::create_dir_all(&root).unwrap();
            Self { root }
        }

        pub fn path(&self) -> &Path {
            &self.root
        }
    }

    impl Drop for TempWorkspace {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }

    /// Writes a 32x32 solid-color RGBA PNG logo fixture, returning its path.
    pub fn write_logo_fixture(ws: &TempWorkspace, color: [u8; 4]) -> PathBuf {
        let path = ws.path().join("logo.png");
        RgbaImage::from_pixel(32, 32, Rgba(color)).save(&path).unwrap();
        path
    }
}
