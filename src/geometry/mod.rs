//! Anchor points and the rules that connect them into line segments.
//!
//! Every function here is pure: the same config and canvas area always give
//! the same segments in the same order.

use egui::{Pos2, Rect};

use crate::config::{CenterPattern, CornerPattern, DrawConfig};
use crate::error::ConfigError;

pub mod center;
pub mod corner;

pub use center::{AxisLists, AxisStitch, Star};
pub use corner::{CornerEdges, CornerFan, CornerStitch};

/// A single straight line between two anchor points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Pos2,
    pub to: Pos2,
}

impl Segment {
    pub fn new(from: Pos2, to: Pos2) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }

    /// Zero-length segments stroke nothing and are never emitted.
    pub fn is_degenerate(&self) -> bool {
        self.length() <= f32::EPSILON
    }
}

/// A connection rule: turns a canvas area and a point count into segments.
pub trait Pattern {
    /// Name shown in logs and the toolbar
    fn name(&self) -> &'static str;

    /// Generate the segments for `count` points per anchor list.
    fn segments(&self, area: Rect, count: usize) -> Vec<Segment>;
}

/// Segments for one redraw, grouped by the family that produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    pub center: Vec<Segment>,
    pub corners: Vec<Segment>,
}

impl Geometry {
    pub fn len(&self) -> usize {
        self.center.len() + self.corners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Select the center connection rule.
pub fn center_pattern(kind: CenterPattern, margin: f32) -> Box<dyn Pattern> {
    match kind {
        CenterPattern::Star => Box::new(Star::new(margin)),
        CenterPattern::AxisStitch => Box::new(AxisStitch::new(margin)),
    }
}

/// Select the corner connection rule.
pub fn corner_pattern(kind: CornerPattern) -> Box<dyn Pattern> {
    match kind {
        CornerPattern::Fan => Box::new(CornerFan),
        CornerPattern::Stitch => Box::new(CornerStitch),
    }
}

/// Compute every segment the config asks for.
pub fn build(config: &DrawConfig, area: Rect) -> Result<Geometry, ConfigError> {
    let count = config.validate()?;
    let mut geometry = Geometry::default();

    if config.mode.includes_center() {
        let pattern = center_pattern(config.center_pattern, config.margin);
        geometry.center = pattern.segments(area, count);
        log::debug!("{}: {} segments", pattern.name(), geometry.center.len());
    }
    if config.mode.includes_corners() {
        let pattern = corner_pattern(config.corner_pattern);
        geometry.corners = pattern.segments(area, count);
        log::debug!("{}: {} segments", pattern.name(), geometry.corners.len());
    }

    Ok(geometry)
}

/// Push a segment unless it has zero length.
pub(crate) fn push_segment(out: &mut Vec<Segment>, from: Pos2, to: Pos2) {
    let segment = Segment::new(from, to);
    if !segment.is_degenerate() {
        out.push(segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DrawMode;
    use crate::config::CanvasSize;

    #[test]
    fn test_build_rejects_invalid_counts() {
        let area = CanvasSize::square(200).rect();
        let config = DrawConfig {
            point_count: 0,
            ..Default::default()
        };
        assert_eq!(build(&config, area), Err(ConfigError::TooFewPoints(0)));

        let config = DrawConfig {
            point_count: 1,
            mode: DrawMode::Both,
            ..Default::default()
        };
        assert_eq!(build(&config, area), Err(ConfigError::TooFewCornerPoints(1)));
    }

    #[test]
    fn test_build_groups_by_mode() {
        let area = CanvasSize::square(300).rect();
        let mut config = DrawConfig {
            point_count: 6,
            ..Default::default()
        };

        let center_only = build(&config, area).unwrap();
        assert!(!center_only.center.is_empty());
        assert!(center_only.corners.is_empty());

        config.mode = DrawMode::Corners;
        let corners_only = build(&config, area).unwrap();
        assert!(corners_only.center.is_empty());
        assert!(!corners_only.corners.is_empty());

        config.mode = DrawMode::Both;
        let both = build(&config, area).unwrap();
        assert_eq!(both.center, center_only.center);
        assert_eq!(both.corners, corners_only.corners);
        assert_eq!(both.len(), center_only.len() + corners_only.len());
    }

    #[test]
    fn test_push_segment_drops_zero_length() {
        let mut out = Vec::new();
        push_segment(&mut out, Pos2::new(1.0, 1.0), Pos2::new(1.0, 1.0));
        assert!(out.is_empty());
        push_segment(&mut out, Pos2::new(1.0, 1.0), Pos2::new(2.0, 1.0));
        assert_eq!(out.len(), 1);
    }
}
