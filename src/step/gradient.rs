//! Gradient background step.

use image::Rgb;

use super::{ComposeContext, DrawStep};
use crate::config::Color;
use crate::error::ComposeError;
use crate::raster::fill_vline;

/// Paints the horizontal two-color gradient across the whole canvas.
///
/// Each column's color is the component-wise linear interpolation between
/// the configured start and end colors at `t = x / width`, truncated to
/// integer channels. Purely deterministic; emits no layout properties.
pub struct GradientStep;

impl DrawStep for GradientStep {
    fn name(&self) -> &'static str {
        "gradient"
    }

    fn draw(&self, ctx: &mut ComposeContext<'_>) -> Result<(), ComposeError> {
        let width = ctx.canvas.width();
        let gradient = &ctx.config.gradient;

        for x in 0..width {
            let t = x as f32 / width as f32;
            let color = lerp_color(gradient.start, gradient.end, t);
            fill_vline(&mut ctx.canvas, x as i64, color);
        }
        Ok(())
    }
}

/// Component-wise linear interpolation between two sRGB colors, truncating
/// each channel to an integer.
pub fn lerp_color(start: Color, end: Color, t: f32) -> Rgb<u8> {
    let channel = |s: u8, e: u8| -> u8 { (s as f32 + t * (e as f32 - s as f32)) as u8 };
    Rgb([
        channel(start.red, end.red),
        channel(start.green, end.green),
        channel(start.blue, end.blue),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bitmap_text_renderer, small_config};
    use palette::Srgb;

    #[test]
    fn lerp_endpoints() {
        let start = Srgb::new(102, 126, 234);
        let end = Srgb::new(90, 103, 216);
        assert_eq!(lerp_color(start, end, 0.0).0, [102, 126, 234]);
        // t = 1.0 is never reached by the column loop, but the formula holds.
        assert_eq!(lerp_color(start, end, 1.0).0, [90, 103, 216]);
    }

    #[test]
    fn every_column_matches_the_interpolation() {
        let config = small_config();
        let text = bitmap_text_renderer();
        let mut ctx = super::super::ComposeContext::new(&config, &text);
        GradientStep.draw(&mut ctx).unwrap();

        let w = ctx.canvas.width();
        let start = config.gradient.start;
        let end = config.gradient.end;
        for x in 0..w {
            let t = x as f32 / w as f32;
            let expected = lerp_color(start, end, t);
            for y in [0, ctx.canvas.height() / 2, ctx.canvas.height() - 1] {
                let actual = ctx.canvas.get_pixel(x, y);
                for ch in 0..3 {
                    let diff = (actual[ch] as i16 - expected[ch] as i16).abs();
                    assert!(diff <= 1, "column {x} channel {ch}: {} vs {}", actual[ch], expected[ch]);
                }
            }
        }
    }

    #[test]
    fn gradient_is_constant_within_a_column() {
        let config = small_config();
        let text = bitmap_text_renderer();
        let mut ctx = super::super::ComposeContext::new(&config, &text);
        GradientStep.draw(&mut ctx).unwrap();

        let x = ctx.canvas.width() / 2;
        let top = *ctx.canvas.get_pixel(x, 0);
        for y in 0..ctx.canvas.height() {
            assert_eq!(*ctx.canvas.get_pixel(x, y), top);
        }
    }
}
