use egui::{Color32, Rect};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which anchor families are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawMode {
    Center,
    Corners,
    Both,
}

impl DrawMode {
    pub const ALL: [DrawMode; 3] = [DrawMode::Center, DrawMode::Corners, DrawMode::Both];

    pub fn label(self) -> &'static str {
        match self {
            DrawMode::Center => "Center Axis",
            DrawMode::Corners => "Corner Axis",
            DrawMode::Both => "Both",
        }
    }

    pub fn includes_center(self) -> bool {
        matches!(self, DrawMode::Center | DrawMode::Both)
    }

    pub fn includes_corners(self) -> bool {
        matches!(self, DrawMode::Corners | DrawMode::Both)
    }
}

/// Connection rule used around the canvas center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CenterPattern {
    /// Points on a circle, `i` joined to `(n - i) mod n`.
    Star,
    /// Points on the four half-axes, stitched in reverse order.
    AxisStitch,
}

impl CenterPattern {
    pub const ALL: [CenterPattern; 2] = [CenterPattern::Star, CenterPattern::AxisStitch];

    pub fn label(self) -> &'static str {
        match self {
            CenterPattern::Star => "Star",
            CenterPattern::AxisStitch => "Axis Stitch",
        }
    }
}

/// Connection rule used at each canvas corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerPattern {
    /// Corner joined to every point on both of its edges.
    Fan,
    /// Edge points joined against the other edge in reverse order.
    Stitch,
}

impl CornerPattern {
    pub const ALL: [CornerPattern; 2] = [CornerPattern::Fan, CornerPattern::Stitch];

    pub fn label(self) -> &'static str {
        match self {
            CornerPattern::Fan => "Fan",
            CornerPattern::Stitch => "Stitch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    Solid,
    Gradient,
}

impl ColorMode {
    pub const ALL: [ColorMode; 2] = [ColorMode::Solid, ColorMode::Gradient];

    pub fn label(self) -> &'static str {
        match self {
            ColorMode::Solid => "Solid",
            ColorMode::Gradient => "Gradient",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientDirection {
    InsideOut,
    OutsideIn,
    LeftRight,
    RightLeft,
    TopBottom,
    BottomTop,
}

impl GradientDirection {
    pub const ALL: [GradientDirection; 6] = [
        GradientDirection::InsideOut,
        GradientDirection::OutsideIn,
        GradientDirection::LeftRight,
        GradientDirection::RightLeft,
        GradientDirection::TopBottom,
        GradientDirection::BottomTop,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GradientDirection::InsideOut => "Center → Out",
            GradientDirection::OutsideIn => "Outside → Center",
            GradientDirection::LeftRight => "Left → Right",
            GradientDirection::RightLeft => "Right → Left",
            GradientDirection::TopBottom => "Top → Bottom",
            GradientDirection::BottomTop => "Bottom → Top",
        }
    }

    /// True for the directions that run against their axis' natural order.
    pub fn is_reversed(self) -> bool {
        matches!(
            self,
            GradientDirection::OutsideIn | GradientDirection::RightLeft | GradientDirection::BottomTop
        )
    }
}

/// How corner strokes are painted when both families are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecondaryTone {
    /// Same paint as the center strokes.
    Shared,
    /// Primary paint lightened toward white.
    Lightened,
    /// Solid colors lightened, gradients shared unchanged.
    SolidOnly,
}

impl SecondaryTone {
    pub const ALL: [SecondaryTone; 3] = [
        SecondaryTone::Shared,
        SecondaryTone::Lightened,
        SecondaryTone::SolidOnly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SecondaryTone::Shared => "Same as center",
            SecondaryTone::Lightened => "Lightened",
            SecondaryTone::SolidOnly => "Lightened (solid only)",
        }
    }
}

/// Everything the toolbar controls.
///
/// Recomputed into geometry and paint on every redraw; never diffed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // partial settings files fill in the rest
pub struct DrawConfig {
    pub point_count: i32,
    pub mode: DrawMode,
    pub center_pattern: CenterPattern,
    pub corner_pattern: CornerPattern,
    pub color_mode: ColorMode,
    #[serde(with = "crate::color::hex")]
    pub solid_color: Color32,
    #[serde(with = "crate::color::hex")]
    pub gradient_start: Color32,
    #[serde(with = "crate::color::hex")]
    pub gradient_end: Color32,
    pub gradient_direction: GradientDirection,
    pub line_thickness: f32,
    #[serde(with = "crate::color::hex")]
    pub background_color: Color32,
    /// Inset from the canvas edge for the center patterns.
    pub margin: f32,
    pub secondary_tone: SecondaryTone,
    pub lighten_factor: f32,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            point_count: 12,
            mode: DrawMode::Center,
            center_pattern: CenterPattern::Star,
            corner_pattern: CornerPattern::Fan,
            color_mode: ColorMode::Solid,
            solid_color: Color32::from_rgb(0x0f, 0x17, 0x2a),
            gradient_start: Color32::from_rgb(0xef, 0x44, 0x44),
            gradient_end: Color32::from_rgb(0x3b, 0x82, 0xf6),
            gradient_direction: GradientDirection::InsideOut,
            line_thickness: 2.0,
            background_color: Color32::WHITE,
            margin: 20.0,
            secondary_tone: SecondaryTone::SolidOnly,
            lighten_factor: 0.55,
        }
    }
}

/// Largest point count the toolbar accepts and the geometry will build.
pub const MAX_POINT_COUNT: i32 = 10_000;

impl DrawConfig {
    /// Check the point count against the selected mode.
    ///
    /// Returns the usable point count. Corner patterns divide each edge into
    /// `count - 1` steps, so they need at least two points.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        if self.point_count < 1 {
            return Err(ConfigError::TooFewPoints(self.point_count));
        }
        if self.mode.includes_corners() && self.point_count < 2 {
            return Err(ConfigError::TooFewCornerPoints(self.point_count));
        }
        if self.point_count > MAX_POINT_COUNT {
            return Err(ConfigError::TooManyPoints(self.point_count));
        }
        Ok(self.point_count as usize)
    }

    /// Color of the reference axes.
    pub fn axis_color(&self) -> Color32 {
        match self.color_mode {
            ColorMode::Solid => self.solid_color,
            ColorMode::Gradient => self.gradient_start,
        }
    }
}

/// Pixel dimensions of the canvas surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Canvas area in pixel space, origin top-left.
    pub fn rect(self) -> Rect {
        Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(self.width as f32, self.height as f32),
        )
    }
}
