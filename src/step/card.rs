//! Card background step.

use image::Rgb;

use super::{CardBox, ComposeContext, DrawStep};
use crate::config::Color;
use crate::error::ComposeError;
use crate::raster::fill_rounded_rect;

/// Paints the rounded card over the gradient and emits [`CardBox`].
///
/// The card is the canvas inset by the configured margin on all sides.
pub struct CardStep;

impl DrawStep for CardStep {
    fn name(&self) -> &'static str {
        "card"
    }

    fn draw(&self, ctx: &mut ComposeContext<'_>) -> Result<(), ComposeError> {
        let settings = &ctx.config.card;
        let canvas_rect = crate::geometry::RectPx::from_size(
            ctx.canvas.width(),
            ctx.canvas.height(),
        );
        let card = canvas_rect.inset(settings.margin);

        fill_rounded_rect(
            &mut ctx.canvas,
            card.x as i64,
            card.y as i64,
            card.width,
            card.height,
            settings.radius,
            to_rgb(settings.fill),
        );

        ctx.set(CardBox(card));
        Ok(())
    }
}

pub(crate) fn to_rgb(color: Color) -> Rgb<u8> {
    Rgb([color.red, color.green, color.blue])
}
