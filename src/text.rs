use egui::{Color32, Pos2};
use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use tiny_skia::{Mask, Paint, Pixmap, Transform};

use crate::color::to_skia;
use crate::error::FontLoadError;

/// Rasterizes short messages straight onto the canvas surface.
pub struct TextPainter {
    font: fontdue::Font,
}

impl std::fmt::Debug for TextPainter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextPainter").finish_non_exhaustive()
    }
}

impl TextPainter {
    /// Uses the proportional font egui ships with.
    pub fn new() -> Result<Self, FontLoadError> {
        Self::from_bytes(epaint_default_fonts::UBUNTU_LIGHT)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        Ok(Self { font })
    }

    /// Draw `text` with its top-left at `origin`, wrapping at the surface edge.
    ///
    /// Returns the number of pixels that received any coverage.
    pub fn draw(&self, surface: &mut Pixmap, text: &str, origin: Pos2, size: f32, color: Color32) -> usize {
        let width = surface.width() as usize;
        let height = surface.height() as usize;
        let Some(mut mask) = Mask::new(surface.width(), surface.height()) else {
            return 0;
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            x: origin.x,
            y: origin.y,
            max_width: Some((width as f32 - origin.x).max(size)),
            ..LayoutSettings::default()
        });
        layout.append(&[&self.font], &TextStyle::new(text, size, 0));

        let coverage = mask.data_mut();
        let mut covered = 0;
        for glyph in layout.glyphs() {
            if glyph.width == 0 || glyph.height == 0 {
                continue;
            }
            let (metrics, bitmap) = self.font.rasterize_config(glyph.key);
            let left = glyph.x.round() as i64;
            let top = glyph.y.round() as i64;

            for row in 0..metrics.height {
                let y = top + row as i64;
                if y < 0 || y >= height as i64 {
                    continue;
                }
                for col in 0..metrics.width {
                    let x = left + col as i64;
                    if x < 0 || x >= width as i64 {
                        continue;
                    }
                    let value = bitmap[row * metrics.width + col];
                    let cell = &mut coverage[y as usize * width + x as usize];
                    if value > 0 && *cell == 0 {
                        covered += 1;
                    }
                    *cell = (*cell).max(value);
                }
            }
        }

        if covered == 0 {
            return 0;
        }

        let mut paint = Paint::default();
        paint.set_color(to_skia(color));
        paint.anti_alias = false;
        if let Some(rect) = tiny_skia::Rect::from_xywh(0.0, 0.0, width as f32, height as f32) {
            surface.fill_rect(rect, &paint, Transform::identity(), Some(&mask));
        }
        covered
    }
}
