//! Text measurement and center-anchored drawing.
//!
//! The renderer prefers the two configured TTF faces, rasterized with
//! `ab_glyph`. When either face cannot be loaded the whole renderer falls
//! back to the embedded Spleen 12×24 bitmap face, which collapses the three
//! text styles to a single size. The fallback is a silent visual
//! degradation, not an error: it is surfaced through [`TextRenderer::is_degraded`]
//! and a single warning log line.

use std::fs;

use ab_glyph::{point, Font, FontArc, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use log::warn;
use spleen_font::{PSF2Font, FONT_12X24};

use crate::config::FontSettings;
use crate::geometry::SizePx;

/// Bitmap fallback cell dimensions (Spleen 12×24).
const BITMAP_CHAR_WIDTH: u32 = 12;
const BITMAP_CHAR_HEIGHT: u32 = 24;

/// The three text styles the card uses.
///
/// Each style maps to a face and pixel size from [`FontSettings`]; the
/// bitmap fallback ignores the distinction entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Bold face at the title size.
    Title,
    /// Regular face at the subtitle size.
    Subtitle,
    /// Regular face at the tag/caption size.
    Label,
}

/// The loaded faces backing the renderer.
enum Faces {
    Outline { regular: FontArc, bold: FontArc },
    Bitmap,
}

/// Center-anchored text renderer for the card canvas.
pub struct TextRenderer {
    faces: Faces,
    title_px: f32,
    subtitle_px: f32,
    label_px: f32,
}

impl TextRenderer {
    /// Loads the preferred faces, falling back to the bitmap face.
    ///
    /// Any failure to read or parse either font file triggers the fallback;
    /// the run continues with degraded rendering.
    pub fn from_settings(settings: &FontSettings) -> Self {
        let loaded = load_outline_faces(settings);
        let faces = match loaded {
            Some((regular, bold)) => Faces::Outline { regular, bold },
            None => {
                warn!(
                    "preferred fonts unavailable ({} / {}), falling back to built-in bitmap face",
                    settings.bold_path.display(),
                    settings.regular_path.display()
                );
                Faces::Bitmap
            }
        };
        Self {
            faces,
            title_px: settings.title_size,
            subtitle_px: settings.subtitle_size,
            label_px: settings.label_size,
        }
    }

    /// Returns true if the renderer fell back to the bitmap face.
    pub fn is_degraded(&self) -> bool {
        matches!(self.faces, Faces::Bitmap)
    }

    /// Measures the laid-out text box for a string in the given style.
    ///
    /// Width is the sum of glyph advances; height is the line height of the
    /// face. This is the box that [`draw_centered`](Self::draw_centered)
    /// centers on its anchor.
    pub fn measure(&self, text: &str, style: TextStyle) -> SizePx {
        match &self.faces {
            Faces::Outline { .. } => {
                let (font, px) = self.face_for(style);
                let scaled = font.as_scaled(PxScale::from(px));
                let width: f32 = text
                    .chars()
                    .map(|ch| scaled.h_advance(font.glyph_id(ch)))
                    .sum();
                let height = scaled.ascent() - scaled.descent();
                SizePx::new(width.ceil() as u32, height.ceil() as u32)
            }
            Faces::Bitmap => SizePx::new(
                text.chars().count() as u32 * BITMAP_CHAR_WIDTH,
                BITMAP_CHAR_HEIGHT,
            ),
        }
    }

    /// Draws a string with its layout box centered on `(cx, cy)`.
    ///
    /// Both axes are center-anchored; all card layout math assumes this.
    /// Text wider than its surroundings simply extends past them and is
    /// clipped at the canvas edges.
    pub fn draw_centered(
        &self,
        canvas: &mut RgbImage,
        text: &str,
        cx: i64,
        cy: i64,
        style: TextStyle,
        color: Rgb<u8>,
    ) {
        let size = self.measure(text, style);
        let x0 = cx - size.width as i64 / 2;
        let y0 = cy - size.height as i64 / 2;

        match &self.faces {
            Faces::Outline { .. } => {
                let (font, px) = self.face_for(style);
                draw_outline_text(canvas, text, font, px, x0, y0, color);
            }
            Faces::Bitmap => draw_bitmap_text(canvas, text, x0, y0, color),
        }
    }

    fn face_for(&self, style: TextStyle) -> (&FontArc, f32) {
        let Faces::Outline { regular, bold } = &self.faces else {
            unreachable!("face_for is only called on the outline path");
        };
        match style {
            TextStyle::Title => (bold, self.title_px),
            TextStyle::Subtitle => (regular, self.subtitle_px),
            TextStyle::Label => (regular, self.label_px),
        }
    }
}

/// Reads and parses both preferred faces, or `None` if either fails.
fn load_outline_faces(settings: &FontSettings) -> Option<(FontArc, FontArc)> {
    let bold = FontArc::try_from_vec(fs::read(&settings.bold_path).ok()?).ok()?;
    let regular = FontArc::try_from_vec(fs::read(&settings.regular_path).ok()?).ok()?;
    Some((regular, bold))
}

/// Rasterizes a line of outline text with its top-left corner at `(x0, y0)`.
fn draw_outline_text(
    canvas: &mut RgbImage,
    text: &str,
    font: &FontArc,
    px: f32,
    x0: i64,
    y0: i64,
    color: Rgb<u8>,
) {
    let scale = PxScale::from(px);
    let scaled = font.as_scaled(scale);
    let baseline = y0 as f32 + scaled.ascent();
    let mut caret_x = x0 as f32;

    for ch in text.chars() {
        let glyph_id = font.glyph_id(ch);
        let advance = scaled.h_advance(glyph_id);
        let glyph = glyph_id.with_scale_and_position(scale, point(caret_x, baseline));
        caret_x += advance;

        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|gx, gy, coverage| {
            let x = gx as i64 + bounds.min.x as i64;
            let y = gy as i64 + bounds.min.y as i64;
            if coverage <= 0.0
                || x < 0
                || y < 0
                || x >= canvas.width() as i64
                || y >= canvas.height() as i64
            {
                return;
            }
            let dst = *canvas.get_pixel(x as u32, y as u32);
            canvas.put_pixel(x as u32, y as u32, blend_coverage(color, dst, coverage));
        });
    }
}

/// Draws a line of bitmap text with its top-left corner at `(x0, y0)`.
///
/// Characters missing from the Spleen face leave an empty cell; the cursor
/// still advances so the overall centering holds.
fn draw_bitmap_text(canvas: &mut RgbImage, text: &str, x0: i64, y0: i64, color: Rgb<u8>) {
    let mut font = PSF2Font::new(FONT_12X24).expect("embedded Spleen font data is valid");
    let mut cursor_x = x0;

    for ch in text.chars() {
        let utf8 = ch.to_string();
        if let Some(glyph) = font.glyph_for_utf8(utf8.as_bytes()) {
            for (row_y, row) in glyph.enumerate() {
                for (col_x, on) in row.enumerate() {
                    if !on {
                        continue;
                    }
                    let x = cursor_x + col_x as i64;
                    let y = y0 + row_y as i64;
                    if x >= 0 && y >= 0 && x < canvas.width() as i64 && y < canvas.height() as i64 {
                        canvas.put_pixel(x as u32, y as u32, color);
                    }
                }
            }
        }
        cursor_x += BITMAP_CHAR_WIDTH as i64;
    }
}

/// Blends the text color over a destination pixel by glyph coverage.
fn blend_coverage(color: Rgb<u8>, dst: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let c = coverage.clamp(0.0, 1.0);
    let blend = |s: u8, d: u8| -> u8 {
        (s as f32 * c + d as f32 * (1.0 - c)).round().min(255.0) as u8
    };
    Rgb([
        blend(color[0], dst[0]),
        blend(color[1], dst[1]),
        blend(color[2], dst[2]),
    ])
}
