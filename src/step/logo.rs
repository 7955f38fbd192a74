//! Logo compositor step.

use image::imageops::{self, FilterType};

use super::{CardBox, ComposeContext, DrawStep, TextColumn};
use crate::error::ComposeError;
use crate::raster::{circular_alpha_mask, overlay_rgba};

/// Loads, resizes, circularly crops, and composites the logo onto the card.
///
/// This is the only step with a runtime-fallible asset load: a missing or
/// undecodable logo file aborts the run. The step emits [`TextColumn`], the
/// horizontal center of the space between the logo and the card's right
/// edge, which every text element after it anchors on.
pub struct LogoStep;

impl DrawStep for LogoStep {
    fn name(&self) -> &'static str {
        "logo"
    }

    fn draw(&self, ctx: &mut ComposeContext<'_>) -> Result<(), ComposeError> {
        let card = ctx.require::<CardBox>(self.name())?.0;
        let settings = &ctx.config.logo;
        let size = settings.size;

        let source = image::open(&settings.path)
            .map_err(|source| ComposeError::LogoLoad {
                path: settings.path.clone(),
                source,
            })?
            .to_rgba8();

        let mut logo = imageops::resize(&source, size, size, FilterType::Lanczos3);
        circular_alpha_mask(&mut logo);

        let x = (card.x + settings.inset_x) as i64;
        let y = card.y as i64 + (card.height as i64 - size as i64) / 2;
        overlay_rgba(&mut ctx.canvas, &logo, x, y);

        // Text column: centered between the logo's right gap and the card's
        // right edge.
        let text_left = x + size as i64 + settings.text_gap as i64;
        let center_x = text_left + (card.right() as i64 - text_left) / 2;
        ctx.set(TextColumn { center_x });
        Ok(())
    }
}
