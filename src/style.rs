//! Resolves the configured coloring scheme into the paint used for strokes.

use egui::{Color32, Pos2, Rect};
use tiny_skia::{GradientStop, LinearGradient, Point, RadialGradient, Shader, SpreadMode, Transform};

use crate::color::{lighten, to_skia};
use crate::config::{CanvasSize, ColorMode, DrawConfig, GradientDirection, SecondaryTone};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient, in `[0, 1]`
    pub offset: f32,
    pub color: Color32,
}

/// Gradient geometry in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientKind {
    Linear { start: Pos2, end: Pos2 },
    /// Circles grow from radius 0 at `center` to `radius`.
    Radial { center: Pos2, radius: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub kind: GradientKind,
    pub stops: Vec<ColorStop>,
}

impl Gradient {
    /// A two-stop gradient spanning `area` in the given direction.
    ///
    /// Each axis has one geometry; reversed directions swap the stop colors
    /// instead of flipping the geometry.
    pub fn directional(direction: GradientDirection, start: Color32, end: Color32, area: Rect) -> Self {
        let kind = match direction {
            GradientDirection::InsideOut | GradientDirection::OutsideIn => GradientKind::Radial {
                center: area.center(),
                radius: area.width().min(area.height()) / 2.0,
            },
            GradientDirection::LeftRight | GradientDirection::RightLeft => GradientKind::Linear {
                start: area.left_top(),
                end: area.right_top(),
            },
            GradientDirection::TopBottom | GradientDirection::BottomTop => GradientKind::Linear {
                start: area.left_top(),
                end: area.left_bottom(),
            },
        };

        let (first, last) = if direction.is_reversed() {
            (end, start)
        } else {
            (start, end)
        };

        Self {
            kind,
            stops: vec![
                ColorStop { offset: 0.0, color: first },
                ColorStop { offset: 1.0, color: last },
            ],
        }
    }
}

/// Resolved paint for a segment's line.
#[derive(Debug, Clone, PartialEq)]
pub enum StrokeStyle {
    Solid(Color32),
    Gradient(Gradient),
}

impl StrokeStyle {
    /// Same geometry with every color moved toward white.
    pub fn lightened(&self, factor: f32) -> Self {
        match self {
            StrokeStyle::Solid(color) => StrokeStyle::Solid(lighten(*color, factor)),
            StrokeStyle::Gradient(gradient) => StrokeStyle::Gradient(Gradient {
                kind: gradient.kind,
                stops: gradient
                    .stops
                    .iter()
                    .map(|stop| ColorStop {
                        offset: stop.offset,
                        color: lighten(stop.color, factor),
                    })
                    .collect(),
            }),
        }
    }

    pub(crate) fn to_shader(&self) -> Shader<'static> {
        let gradient = match self {
            StrokeStyle::Solid(color) => return Shader::SolidColor(to_skia(*color)),
            StrokeStyle::Gradient(gradient) => gradient,
        };

        let stops: Vec<GradientStop> = gradient
            .stops
            .iter()
            .map(|stop| GradientStop::new(stop.offset, to_skia(stop.color)))
            .collect();
        let fallback = gradient
            .stops
            .first()
            .map_or(tiny_skia::Color::BLACK, |stop| to_skia(stop.color));

        let shader = match gradient.kind {
            GradientKind::Linear { start, end } => LinearGradient::new(
                Point::from_xy(start.x, start.y),
                Point::from_xy(end.x, end.y),
                stops,
                SpreadMode::Pad,
                Transform::identity(),
            ),
            GradientKind::Radial { center, radius } => {
                let center = Point::from_xy(center.x, center.y);
                RadialGradient::new(center, center, radius, stops, SpreadMode::Pad, Transform::identity())
            }
        };

        shader.unwrap_or_else(|| {
            log::warn!("Degenerate gradient {:?}, painting solid", gradient.kind);
            Shader::SolidColor(fallback)
        })
    }
}

/// Paint for the primary strokes.
///
/// Gradients are bound to absolute canvas coordinates, so the result must be
/// rebuilt whenever `size` changes.
pub fn resolve(config: &DrawConfig, size: CanvasSize) -> StrokeStyle {
    match config.color_mode {
        ColorMode::Solid => StrokeStyle::Solid(config.solid_color),
        ColorMode::Gradient => StrokeStyle::Gradient(Gradient::directional(
            config.gradient_direction,
            config.gradient_start,
            config.gradient_end,
            size.rect(),
        )),
    }
}

/// Paint for the corner strokes when both families are drawn.
pub fn resolve_secondary(config: &DrawConfig, primary: &StrokeStyle) -> StrokeStyle {
    match config.secondary_tone {
        SecondaryTone::Shared => primary.clone(),
        SecondaryTone::Lightened => primary.lightened(config.lighten_factor),
        SecondaryTone::SolidOnly => match primary {
            StrokeStyle::Solid(_) => primary.lightened(config.lighten_factor),
            StrokeStyle::Gradient(_) => primary.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_config(direction: GradientDirection) -> DrawConfig {
        DrawConfig {
            color_mode: ColorMode::Gradient,
            gradient_start: Color32::RED,
            gradient_end: Color32::BLUE,
            gradient_direction: direction,
            ..Default::default()
        }
    }

    fn gradient(style: StrokeStyle) -> Gradient {
        match style {
            StrokeStyle::Gradient(gradient) => gradient,
            other => panic!("expected a gradient, got {other:?}"),
        }
    }

    #[test]
    fn test_solid_passes_color_through() {
        let config = DrawConfig::default();
        assert_eq!(
            resolve(&config, CanvasSize::square(100)),
            StrokeStyle::Solid(config.solid_color)
        );
    }

    #[test]
    fn test_radial_bound_to_canvas() {
        let style = resolve(&gradient_config(GradientDirection::InsideOut), CanvasSize::new(400, 300));
        assert_eq!(
            gradient(style).kind,
            GradientKind::Radial {
                center: Pos2::new(200.0, 150.0),
                radius: 150.0
            }
        );
    }

    #[test]
    fn test_outside_in_swaps_stops() {
        let size = CanvasSize::square(100);
        let inside = gradient(resolve(&gradient_config(GradientDirection::InsideOut), size));
        let outside = gradient(resolve(&gradient_config(GradientDirection::OutsideIn), size));
        assert_eq!(inside.kind, outside.kind);
        assert_eq!(outside.stops[0].color, Color32::BLUE);
        assert_eq!(outside.stops[1].color, Color32::RED);
    }

    #[test]
    fn test_vertical_gradient_axis() {
        let style = resolve(&gradient_config(GradientDirection::BottomTop), CanvasSize::new(50, 80));
        let gradient = gradient(style);
        assert_eq!(
            gradient.kind,
            GradientKind::Linear {
                start: Pos2::new(0.0, 0.0),
                end: Pos2::new(0.0, 80.0)
            }
        );
        assert_eq!(gradient.stops[0].color, Color32::BLUE);
    }

    #[test]
    fn test_secondary_tone() {
        let mut config = DrawConfig {
            solid_color: Color32::BLACK,
            lighten_factor: 0.5,
            ..Default::default()
        };
        let primary = resolve(&config, CanvasSize::square(100));

        config.secondary_tone = SecondaryTone::Shared;
        assert_eq!(resolve_secondary(&config, &primary), primary);

        config.secondary_tone = SecondaryTone::Lightened;
        assert_eq!(
            resolve_secondary(&config, &primary),
            StrokeStyle::Solid(Color32::from_rgb(128, 128, 128))
        );
    }

    #[test]
    fn test_solid_only_tone_leaves_gradients_alone() {
        let solid_config = DrawConfig {
            solid_color: Color32::BLACK,
            secondary_tone: SecondaryTone::SolidOnly,
            lighten_factor: 0.5,
            ..Default::default()
        };
        let solid = resolve(&solid_config, CanvasSize::square(100));
        assert_eq!(
            resolve_secondary(&solid_config, &solid),
            StrokeStyle::Solid(Color32::from_rgb(128, 128, 128))
        );

        let config = DrawConfig {
            secondary_tone: SecondaryTone::SolidOnly,
            ..gradient_config(GradientDirection::LeftRight)
        };
        let primary = resolve(&config, CanvasSize::square(100));
        assert_eq!(resolve_secondary(&config, &primary), primary);
    }

    #[test]
    fn test_default_tone_lightens_solid_by_055() {
        let config = DrawConfig {
            solid_color: Color32::BLACK,
            ..Default::default()
        };
        let primary = resolve(&config, CanvasSize::square(100));
        // round(255 * 0.55) = 140
        assert_eq!(
            resolve_secondary(&config, &primary),
            StrokeStyle::Solid(Color32::from_rgb(140, 140, 140))
        );
    }

    #[test]
    fn test_lightened_gradient_keeps_geometry() {
        let style = resolve(&gradient_config(GradientDirection::LeftRight), CanvasSize::square(100));
        let light = gradient(style.lightened(1.0));
        assert_eq!(light.kind, gradient(style).kind);
        assert!(light.stops.iter().all(|stop| stop.color == Color32::WHITE));
    }
}
