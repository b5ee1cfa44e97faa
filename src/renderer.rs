use egui::{Color32, Pos2};
use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::background::BackgroundImage;
use crate::color::to_skia;
use crate::config::{CanvasSize, DrawConfig};
use crate::error::ConfigError;
use crate::geometry::{self, Segment};
use crate::style::{self, StrokeStyle};
use crate::text::TextPainter;

/// Where the inline configuration error is written.
pub const ERROR_TEXT_ORIGIN: Pos2 = Pos2::new(10.0, 10.0);
pub const ERROR_TEXT_SIZE: f32 = 16.0;
pub const ERROR_TEXT_COLOR: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26);

const AXIS_WIDTH: f32 = 1.0;

/// Result of one full redraw.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// Pattern drawn; `segments` lines were stroked.
    Drawn { segments: usize },
    /// Configuration unusable; the message was drawn instead of the pattern.
    Rejected(ConfigError),
    /// No surface of the requested size could be allocated.
    NoSurface,
}

impl RenderOutcome {
    pub fn strokes(&self) -> usize {
        match self {
            RenderOutcome::Drawn { segments } => *segments,
            RenderOutcome::Rejected(_) | RenderOutcome::NoSurface => 0,
        }
    }
}

/// Owns the canvas surface and redraws it from scratch on request.
///
/// Nothing else draws to the surface; the app only reads it back for
/// display and export.
#[derive(Debug)]
pub struct Renderer {
    surface: Option<Pixmap>,
    text: Option<TextPainter>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        let text = match TextPainter::new() {
            Ok(painter) => Some(painter),
            Err(err) => {
                log::warn!("Inline messages disabled: {}", err);
                None
            }
        };
        Self {
            surface: None,
            text,
        }
    }

    /// Full redraw: background, backdrop image, then either the error
    /// message or the axes and every segment.
    pub fn render(
        &mut self,
        config: &DrawConfig,
        size: CanvasSize,
        background: Option<&BackgroundImage>,
    ) -> RenderOutcome {
        let Some(surface) = Self::ensure_surface(&mut self.surface, size) else {
            log::error!("Cannot allocate a {}x{} canvas", size.width, size.height);
            return RenderOutcome::NoSurface;
        };

        surface.fill(to_skia(config.background_color));
        if let Some(image) = background {
            image.draw_onto(surface);
        }

        let geometry = match geometry::build(config, size.rect()) {
            Ok(geometry) => geometry,
            Err(err) => {
                log::debug!("Rejected configuration: {}", err);
                if let Some(text) = &self.text {
                    text.draw(surface, &err.to_string(), ERROR_TEXT_ORIGIN, ERROR_TEXT_SIZE, ERROR_TEXT_COLOR);
                }
                return RenderOutcome::Rejected(err);
            }
        };

        draw_axes(surface, config.axis_color());

        let primary = style::resolve(config, size);
        let secondary = style::resolve_secondary(config, &primary);
        let mut stroked = stroke_segments(surface, &geometry.center, &primary, config.line_thickness);
        stroked += stroke_segments(surface, &geometry.corners, &secondary, config.line_thickness);

        log::debug!(
            "Rendered {} segments on {}x{} canvas",
            stroked,
            size.width,
            size.height
        );
        RenderOutcome::Drawn { segments: stroked }
    }

    /// Reuse the surface while the size is unchanged.
    fn ensure_surface(surface: &mut Option<Pixmap>, size: CanvasSize) -> Option<&mut Pixmap> {
        let width = size.width.max(1);
        let height = size.height.max(1);
        let stale = surface
            .as_ref()
            .is_none_or(|pixmap| pixmap.width() != width || pixmap.height() != height);
        if stale {
            *surface = Pixmap::new(width, height);
        }
        surface.as_mut()
    }

    /// Last rendered surface, premultiplied RGBA.
    pub fn surface(&self) -> Option<&Pixmap> {
        self.surface.as_ref()
    }

    pub fn size(&self) -> Option<CanvasSize> {
        self.surface
            .as_ref()
            .map(|pixmap| CanvasSize::new(pixmap.width(), pixmap.height()))
    }

    /// Copy of the surface for upload as an egui texture.
    pub fn to_color_image(&self) -> Option<egui::ColorImage> {
        self.surface.as_ref().map(|pixmap| {
            egui::ColorImage::from_rgba_premultiplied(
                [pixmap.width() as usize, pixmap.height() as usize],
                pixmap.data(),
            )
        })
    }
}

fn draw_axes(surface: &mut Pixmap, color: Color32) {
    let width = surface.width() as f32;
    let height = surface.height() as f32;
    let (cx, cy) = (width / 2.0, height / 2.0);

    let mut builder = PathBuilder::new();
    builder.move_to(cx, 0.0);
    builder.line_to(cx, height);
    builder.move_to(0.0, cy);
    builder.line_to(width, cy);
    let Some(path) = builder.finish() else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color(to_skia(color));
    let stroke = Stroke {
        width: AXIS_WIDTH,
        ..Stroke::default()
    };
    surface.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

/// One path per segment; returns how many were stroked.
fn stroke_segments(surface: &mut Pixmap, segments: &[Segment], style: &StrokeStyle, thickness: f32) -> usize {
    if segments.is_empty() {
        return 0;
    }

    let paint = Paint {
        shader: style.to_shader(),
        ..Paint::default()
    };
    let stroke = Stroke {
        width: thickness,
        ..Stroke::default()
    };

    let mut stroked = 0;
    for segment in segments {
        let mut builder = PathBuilder::new();
        builder.move_to(segment.from.x, segment.from.y);
        builder.line_to(segment.to.x, segment.to.y);
        if let Some(path) = builder.finish() {
            surface.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            stroked += 1;
        }
    }
    stroked
}
