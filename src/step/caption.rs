//! URL caption step.

use super::{ComposeContext, DrawStep, TagRow, TextColumn};
use crate::error::ComposeError;
use crate::step::card::to_rgb;
use crate::text::TextStyle;

/// Draws the caption line below the tag row, centered on the text column.
pub struct CaptionStep;

impl DrawStep for CaptionStep {
    fn name(&self) -> &'static str {
        "caption"
    }

    fn draw(&self, ctx: &mut ComposeContext<'_>) -> Result<(), ComposeError> {
        let cx = ctx.require::<TextColumn>(self.name())?.center_x;
        let row_bottom = ctx.require::<TagRow>(self.name())?.bottom;
        let settings = ctx.config.caption.clone();

        let caption_y = row_bottom + settings.offset_y as i64;
        ctx.text.draw_centered(
            &mut ctx.canvas,
            &settings.text,
            cx,
            caption_y,
            TextStyle::Label,
            to_rgb(settings.color),
        );
        Ok(())
    }
}
