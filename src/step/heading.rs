//! Title, divider, and subtitle step.

use super::{CardBox, ComposeContext, DividerLine, DrawStep, TextColumn};
use crate::error::ComposeError;
use crate::raster::fill_rect;
use crate::step::card::to_rgb;
use crate::text::TextStyle;

/// Draws the title, the divider bar, and the subtitle down the text column.
///
/// All three elements are center-anchored on the column's horizontal center.
/// The vertical chain is relative: the title hangs below the card's top
/// edge, the divider below the title anchor, and the subtitle below the
/// divider. Emits [`DividerLine`] so the tag row can position itself.
pub struct HeadingStep;

impl DrawStep for HeadingStep {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn draw(&self, ctx: &mut ComposeContext<'_>) -> Result<(), ComposeError> {
        let card = ctx.require::<CardBox>(self.name())?.0;
        let cx = ctx.require::<TextColumn>(self.name())?.center_x;
        let settings = ctx.config.heading.clone();

        let title_y = card.y as i64 + settings.title_offset_y as i64;
        ctx.text.draw_centered(
            &mut ctx.canvas,
            &settings.title,
            cx,
            title_y,
            TextStyle::Title,
            to_rgb(settings.title_color),
        );

        let divider_y = title_y + settings.divider_offset_y as i64;
        fill_rect(
            &mut ctx.canvas,
            cx - settings.divider_half_width as i64,
            divider_y,
            2 * settings.divider_half_width,
            settings.divider_thickness,
            to_rgb(settings.divider_color),
        );

        let subtitle_y = divider_y + settings.subtitle_offset_y as i64;
        ctx.text.draw_centered(
            &mut ctx.canvas,
            &settings.subtitle,
            cx,
            subtitle_y,
            TextStyle::Subtitle,
            to_rgb(settings.subtitle_color),
        );

        ctx.set(DividerLine { y: divider_y });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bitmap_text_renderer, small_config};

    #[test]
    fn divider_position_and_extent() {
        let config = small_config();
        let text = bitmap_text_renderer();
        let mut ctx = ComposeContext::new(&config, &text);
        ctx.set(CardBox(crate::geometry::RectPx::from_size(
            config.canvas.width,
            config.canvas.height,
        )
        .inset(config.card.margin)));
        let cx = (config.canvas.width / 2) as i64;
        ctx.set(TextColumn { center_x: cx });

        HeadingStep.draw(&mut ctx).unwrap();

        let card_y = config.card.margin as i64;
        let expected_y =
            card_y + config.heading.title_offset_y as i64 + config.heading.divider_offset_y as i64;
        assert_eq!(ctx.get::<DividerLine>().unwrap().y, expected_y);

        // Divider pixels carry the divider color across the full bar.
        let color = to_rgb(config.heading.divider_color);
        let left = cx - config.heading.divider_half_width as i64;
        let right = cx + config.heading.divider_half_width as i64 - 1;
        for x in [left, cx, right] {
            assert_eq!(*ctx.canvas.get_pixel(x as u32, expected_y as u32), color);
        }
        // Just outside the bar stays background.
        assert_eq!(ctx.canvas.get_pixel((left - 1) as u32, expected_y as u32).0, [0, 0, 0]);
    }

    #[test]
    fn heading_requires_upstream_layout() {
        let config = small_config();
        let text = bitmap_text_renderer();
        let mut ctx = ComposeContext::new(&config, &text);
        let err = HeadingStep.draw(&mut ctx).unwrap_err();
        assert!(matches!(err, ComposeError::MissingLayout { step: "heading" }));
    }

    #[test]
    fn title_ink_uses_title_color() {
        let mut config = small_config();
        config.heading.title = "T".into();
        let text = bitmap_text_renderer();
        let mut ctx = ComposeContext::new(&config, &text);
        ctx.set(CardBox(crate::geometry::RectPx::from_size(
            config.canvas.width,
            config.canvas.height,
        )
        .inset(config.card.margin)));
        let cx = (config.canvas.width / 2) as i64;
        ctx.set(TextColumn { center_x: cx });

        HeadingStep.draw(&mut ctx).unwrap();

        let title_color = to_rgb(config.heading.title_color);
        let ink = ctx.canvas.pixels().filter(|p| **p == title_color).count();
        assert!(ink > 0, "title should leave ink in its color");
    }
}
