//! High-level card composition and PNG output.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::RgbImage;
use log::info;

use crate::config::CardConfig;
use crate::error::ComposeError;
use crate::step::{ComposeContext, DrawPipeline};
use crate::text::TextRenderer;

/// Composes social cards from a [`CardConfig`].
///
/// The composer owns the config and the text renderer; fonts are loaded once
/// at construction and reused across renders.
pub struct CardComposer {
    config: CardConfig,
    text: TextRenderer,
}

impl CardComposer {
    /// Creates a composer, loading fonts per the config.
    ///
    /// Font loading cannot fail: unavailable fonts degrade the renderer to
    /// the built-in bitmap face.
    pub fn new(config: CardConfig) -> Self {
        let text = TextRenderer::from_settings(&config.fonts);
        Self { config, text }
    }

    /// The composer's configuration.
    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Runs the standard drawing pipeline and returns the finished card.
    pub fn compose(&self) -> Result<ComposedCard, ComposeError> {
        let mut ctx = ComposeContext::new(&self.config, &self.text);
        DrawPipeline::standard().run(&mut ctx)?;
        info!(
            "composed {}x{} card with {} tags",
            self.config.canvas.width,
            self.config.canvas.height,
            self.config.tags.labels.len()
        );
        Ok(ComposedCard {
            image: ctx.into_canvas(),
            degraded_fonts: self.text.is_degraded(),
        })
    }
}

/// A finished card image, ready to encode.
#[derive(Debug)]
pub struct ComposedCard {
    /// The composed canvas.
    pub image: RgbImage,
    /// True when the render used the bitmap fallback face.
    pub degraded_fonts: bool,
}

impl ComposedCard {
    /// Encodes the card as a PNG at `path`.
    ///
    /// The parent directory must already exist. Uses the encoder's best
    /// compression with adaptive filtering.
    pub fn save_png(&self, path: &Path) -> Result<(), ComposeError> {
        let file = File::create(path).map_err(|source| ComposeError::OutputCreate {
            path: path.to_path_buf(),
            source,
        })?;
        let writer = BufWriter::new(file);
        let encoder = PngEncoder::new_with_quality(
            writer,
            CompressionType::Best,
            PngFilterType::Adaptive,
        );
        self.image
            .write_with_encoder(encoder)
            .map_err(|source| ComposeError::PngEncode {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{small_config, write_logo_fixture, TempWorkspace};

    #[test]
    fn compose_and_save_roundtrip() {
        let ws = TempWorkspace::new("composer-roundtrip");
        let mut config = small_config();
        config.logo.path = write_logo_fixture(&ws, [30, 60, 200, 255]);

        let composer = CardComposer::new(config.clone());
        let card = composer.compose().unwrap();
        assert_eq!(card.image.width(), config.canvas.width);
        assert_eq!(card.image.height(), config.canvas.height);

        let out = ws.path().join("card.png");
        card.save_png(&out).unwrap();

        let reopened = image::open(&out).unwrap().to_rgb8();
        assert_eq!(reopened.width(), config.canvas.width);
        assert_eq!(reopened.height(), config.canvas.height);
        // Top-left canvas corner is gradient, not card fill.
        assert_eq!(
            reopened.get_pixel(0, 0).0,
            [
                config.gradient.start.red,
                config.gradient.start.green,
                config.gradient.start.blue
            ]
        );
    }

    #[test]
    fn missing_logo_aborts_compose_without_output() {
        let ws = TempWorkspace::new("composer-nologo");
        let mut config = small_config();
        config.logo.path = "/nonexistent/logo.png".into();
        let out = ws.path().join("card.png");
        config.output_path = out.clone();

        let composer = CardComposer::new(config);
        let err = composer.compose().unwrap_err();
        assert!(matches!(err, ComposeError::LogoLoad { .. }));
        assert!(!out.exists(), "failed compose must not leave an output file");
    }

    #[test]
    fn missing_fonts_still_compose_with_degraded_flag() {
        let ws = TempWorkspace::new("composer-degraded");
        let mut config = small_config();
        config.logo.path = write_logo_fixture(&ws, [255, 255, 255, 255]);
        // small_config already points at nonexistent font files.
        let composer = CardComposer::new(config);
        let card = composer.compose().unwrap();
        assert!(card.degraded_fonts);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let ws = TempWorkspace::new("composer-nodir");
        let mut config = small_config();
        config.logo.path = write_logo_fixture(&ws, [1, 2, 3, 255]);

        let card = CardComposer::new(config).compose().unwrap();
        let out = ws.path().join("no/such/dir/card.png");
        let err = card.save_png(&out).unwrap_err();
        assert!(matches!(err, ComposeError::OutputCreate { .. }));
    }
}
