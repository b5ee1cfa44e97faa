use std::f32::consts::TAU;

use egui::{Pos2, Rect, Vec2, vec2};

use super::{Pattern, Segment, push_segment};

/// `count` points evenly spaced by angle, starting on the +X axis.
///
/// Angles grow clockwise on screen because pixel space has +Y down.
pub fn circle_points(center: Pos2, radius: f32, count: usize) -> Vec<Pos2> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f32 / count as f32;
            center + radius * Vec2::angled(angle)
        })
        .collect()
}

/// Reflection pairing: point `i` is joined to `(count - i) mod count`.
///
/// The pairing is its own inverse.
pub fn reflection_partner(index: usize, count: usize) -> usize {
    (count - index % count) % count
}

/// Circle of points joined by reflection, the classic star pattern.
#[derive(Debug, Clone, Copy)]
pub struct Star {
    margin: f32,
}

impl Star {
    pub fn new(margin: f32) -> Self {
        Self { margin }
    }

    pub fn radius(&self, area: Rect) -> f32 {
        (area.width().min(area.height()) / 2.0 - self.margin).max(0.0)
    }
}

impl Pattern for Star {
    fn name(&self) -> &'static str {
        "star"
    }

    fn segments(&self, area: Rect, count: usize) -> Vec<Segment> {
        if count == 0 {
            return Vec::new();
        }

        let points = circle_points(area.center(), self.radius(area), count);
        let mut segments = Vec::with_capacity(count / 2);
        for (i, &from) in points.iter().enumerate() {
            let j = reflection_partner(i, count);
            // Each unordered pair once; self-pairs are skipped here too.
            if i < j {
                push_segment(&mut segments, from, points[j]);
            }
        }
        segments
    }
}

/// Anchor lists along the four half-axes, ordered outward from the center.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLists {
    pub pos_x: Vec<Pos2>,
    pub neg_x: Vec<Pos2>,
    pub pos_y: Vec<Pos2>,
    pub neg_y: Vec<Pos2>,
}

impl AxisLists {
    /// Point `i` sits at `(i + 1) / count` of the half-length on each axis.
    pub fn new(area: Rect, margin: f32, count: usize) -> Self {
        let center = area.center();
        let half_x = (area.width() / 2.0 - margin).max(0.0);
        let half_y = (area.height() / 2.0 - margin).max(0.0);
        let fraction = |i: usize| (i + 1) as f32 / count as f32;

        Self {
            pos_x: (0..count).map(|i| center + vec2(half_x * fraction(i), 0.0)).collect(),
            neg_x: (0..count).map(|i| center - vec2(half_x * fraction(i), 0.0)).collect(),
            pos_y: (0..count).map(|i| center + vec2(0.0, half_y * fraction(i))).collect(),
            neg_y: (0..count).map(|i| center - vec2(0.0, half_y * fraction(i))).collect(),
        }
    }
}

/// Parabolic curve stitching between pairs of half-axes.
///
/// Families, in output order: `+X↔-Y`, `+Y↔-X`, `-X↔-Y`, `+X↔+Y`, each
/// joining index `i` of the first list to index `count - 1 - i` of the second.
#[derive(Debug, Clone, Copy)]
pub struct AxisStitch {
    margin: f32,
}

impl AxisStitch {
    pub fn new(margin: f32) -> Self {
        Self { margin }
    }
}

impl Pattern for AxisStitch {
    fn name(&self) -> &'static str {
        "axis-stitch"
    }

    fn segments(&self, area: Rect, count: usize) -> Vec<Segment> {
        if count == 0 {
            return Vec::new();
        }

        let axes = AxisLists::new(area, self.margin, count);
        let families = [
            (&axes.pos_x, &axes.neg_y),
            (&axes.pos_y, &axes.neg_x),
            (&axes.neg_x, &axes.neg_y),
            (&axes.pos_x, &axes.pos_y),
        ];

        let mut segments = Vec::with_capacity(4 * count);
        for (first, second) in families {
            for i in 0..count {
                push_segment(&mut segments, first[i], second[count - 1 - i]);
            }
        }
        segments
    }
}
