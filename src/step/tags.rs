//! Tag pill row step.

use super::{ComposeContext, DividerLine, DrawStep, TagRow, TextColumn};
use crate::error::ComposeError;
use crate::raster::fill_rounded_rect;
use crate::step::card::to_rgb;
use crate::text::TextStyle;

/// Draws the row of rounded tag pills, centered on the text column.
///
/// Every pill has the same fixed size regardless of its label; a label wider
/// than the pill overflows it. The row as a whole is centered, so adding or
/// removing tags shifts every pill. Emits [`TagRow`] with the row's bottom
/// edge for the caption.
pub struct TagRowStep;

impl DrawStep for TagRowStep {
    fn name(&self) -> &'static str {
        "tags"
    }

    fn draw(&self, ctx: &mut ComposeContext<'_>) -> Result<(), ComposeError> {
        let cx = ctx.require::<TextColumn>(self.name())?.center_x;
        let divider_y = ctx.require::<DividerLine>(self.name())?.y;
        let settings = ctx.config.tags.clone();

        let row_y = divider_y + settings.offset_y as i64;
        let total = row_width(settings.labels.len() as u32, settings.width, settings.gap);
        let mut x = row_origin(cx, total);

        for label in &settings.labels {
            fill_rounded_rect(
                &mut ctx.canvas,
                x,
                row_y,
                settings.width,
                settings.height,
                settings.radius,
                to_rgb(settings.fill),
            );
            ctx.text.draw_centered(
                &mut ctx.canvas,
                label,
                x + settings.width as i64 / 2,
                row_y + settings.height as i64 / 2,
                TextStyle::Label,
                to_rgb(settings.text_color),
            );
            x += (settings.width + settings.gap) as i64;
        }

        ctx.set(TagRow { bottom: row_y + settings.height as i64 });
        Ok(())
    }
}

/// Total width of `count` pills of width `tag_width` separated by `gap`.
pub fn row_width(count: u32, tag_width: u32, gap: u32) -> u32 {
    if count == 0 {
        return 0;
    }
    count * tag_width + (count - 1) * gap
}

/// Left edge of a row of the given total width centered on `center_x`.
pub fn row_origin(center_x: i64, total_width: u32) -> i64 {
    center_x - total_width as i64 / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bitmap_text_renderer, small_config};

    #[test]
    fn row_width_formula() {
        assert_eq!(row_width(5, 128, 10), 680);
        assert_eq!(row_width(1, 128, 10), 128);
        assert_eq!(row_width(0, 128, 10), 0);
    }

    #[test]
    fn row_is_centered_on_the_column() {
        assert_eq!(row_origin(600, 680), 260);
        assert_eq!(row_origin(0, 10), -5);
    }

    #[test]
    fn pills_are_painted_and_row_bottom_emitted() {
        let config = small_config();
        let text = bitmap_text_renderer();
        let mut ctx = ComposeContext::new(&config, &text);
        let cx = (config.canvas.width / 2) as i64;
        ctx.set(TextColumn { center_x: cx });
        let divider_y = 40i64;
        ctx.set(DividerLine { y: divider_y });

        TagRowStep.draw(&mut ctx).unwrap();

        let row_y = divider_y + config.tags.offset_y as i64;
        assert_eq!(
            ctx.get::<TagRow>().unwrap().bottom,
            row_y + config.tags.height as i64
        );

        // Center of the first pill carries the pill fill or label ink.
        let total = row_width(
            config.tags.labels.len() as u32,
            config.tags.width,
            config.tags.gap,
        );
        let first_x = row_origin(cx, total);
        let px = ctx.canvas.get_pixel(
            (first_x + config.tags.width as i64 / 2) as u32,
            (row_y + config.tags.height as i64 / 2) as u32,
        );
        let fill = to_rgb(config.tags.fill);
        let ink = to_rgb(config.tags.text_color);
        assert!(*px == fill || *px == ink, "pill center should be fill or label ink");

        // The gap between the first two pills stays background.
        let gap_x = first_x + config.tags.width as i64 + config.tags.gap as i64 / 2;
        assert_eq!(
            ctx.canvas.get_pixel(gap_x as u32, row_y as u32).0,
            [0, 0, 0]
        );
    }

    #[test]
    fn empty_label_list_draws_nothing() {
        let mut config = small_config();
        config.tags.labels.clear();
        let text = bitmap_text_renderer();
        let mut ctx = ComposeContext::new(&config, &text);
        let cx = (config.canvas.width / 2) as i64;
        ctx.set(TextColumn { center_x: cx });
        ctx.set(DividerLine { y: 40 });

        TagRowStep.draw(&mut ctx).unwrap();

        assert!(ctx.canvas.pixels().all(|p| p.0 == [0, 0, 0]));
        // The row still has an extent so the caption keeps its position.
        let row_y = 40 + config.tags.offset_y as i64;
        assert_eq!(
            ctx.get::<TagRow>().unwrap().bottom,
            row_y + config.tags.height as i64
        );
    }
}
