use egui::{Pos2, Rect};

use super::{Pattern, Segment, push_segment};

/// Anchor points on the two edges leaving one canvas corner.
///
/// Both lists start at the corner itself and end at the opposite corner of
/// their edge.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerEdges {
    pub corner: Pos2,
    pub horizontal: Vec<Pos2>,
    pub vertical: Vec<Pos2>,
}

impl CornerEdges {
    /// Edges for all four corners: top-left, top-right, bottom-left, bottom-right.
    ///
    /// Each edge is split into `count - 1` equal steps, so `count` must be at
    /// least 2; smaller counts yield no corners.
    pub fn all(area: Rect, count: usize) -> Vec<CornerEdges> {
        if count < 2 {
            return Vec::new();
        }

        let x_step = area.width() / (count - 1) as f32;
        let y_step = area.height() / (count - 1) as f32;

        [
            area.left_top(),
            area.right_top(),
            area.left_bottom(),
            area.right_bottom(),
        ]
        .into_iter()
        .map(|corner| {
            // Walk inward from whichever side the corner sits on.
            let x_dir = if corner.x == area.min.x { 1.0 } else { -1.0 };
            let y_dir = if corner.y == area.min.y { 1.0 } else { -1.0 };
            CornerEdges {
                corner,
                horizontal: (0..count)
                    .map(|i| Pos2::new(corner.x + x_dir * i as f32 * x_step, corner.y))
                    .collect(),
                vertical: (0..count)
                    .map(|i| Pos2::new(corner.x, corner.y + y_dir * i as f32 * y_step))
                    .collect(),
            }
        })
        .collect()
    }
}

/// Corner joined to every anchor on both of its edges: an L-shaped fan.
#[derive(Debug, Clone, Copy)]
pub struct CornerFan;

impl Pattern for CornerFan {
    fn name(&self) -> &'static str {
        "corner-fan"
    }

    fn segments(&self, area: Rect, count: usize) -> Vec<Segment> {
        let mut segments = Vec::new();
        for edges in CornerEdges::all(area, count) {
            for &point in edges.horizontal.iter().chain(&edges.vertical) {
                push_segment(&mut segments, edges.corner, point);
            }
        }
        segments
    }
}

/// Horizontal anchor `i` joined to vertical anchor `count - 1 - i`, giving
/// one envelope curve per corner.
#[derive(Debug, Clone, Copy)]
pub struct CornerStitch;

impl Pattern for CornerStitch {
    fn name(&self) -> &'static str {
        "corner-stitch"
    }

    fn segments(&self, area: Rect, count: usize) -> Vec<Segment> {
        let mut segments = Vec::new();
        for edges in CornerEdges::all(area, count) {
            for i in 0..count {
                push_segment(&mut segments, edges.horizontal[i], edges.vertical[count - 1 - i]);
            }
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(300.0, 200.0))
    }

    #[test]
    fn test_corner_edges_span_full_edges() {
        let corners = CornerEdges::all(canvas(), 3);
        assert_eq!(corners.len(), 4);

        let top_left = &corners[0];
        assert_eq!(top_left.horizontal, vec![Pos2::new(0.0, 0.0), Pos2::new(150.0, 0.0), Pos2::new(300.0, 0.0)]);
        assert_eq!(top_left.vertical, vec![Pos2::new(0.0, 0.0), Pos2::new(0.0, 100.0), Pos2::new(0.0, 200.0)]);

        let bottom_right = &corners[3];
        assert_eq!(bottom_right.corner, Pos2::new(300.0, 200.0));
        assert_eq!(bottom_right.horizontal[1], Pos2::new(150.0, 200.0));
        assert_eq!(bottom_right.vertical[2], Pos2::new(300.0, 0.0));
    }

    #[test]
    fn test_corner_edges_need_two_points() {
        assert!(CornerEdges::all(canvas(), 1).is_empty());
        assert!(CornerFan.segments(canvas(), 1).is_empty());
        assert!(CornerStitch.segments(canvas(), 0).is_empty());
    }

    #[test]
    fn test_fan_skips_the_corner_itself() {
        // Two of the 2n anchors per corner coincide with the corner.
        let segments = CornerFan.segments(canvas(), 5);
        assert_eq!(segments.len(), 4 * 2 * (5 - 1));
        assert!(segments.iter().all(|s| !s.is_degenerate()));
    }

    #[test]
    fn test_fan_starts_every_segment_at_a_corner() {
        let area = canvas();
        let corners = [area.left_top(), area.right_top(), area.left_bottom(), area.right_bottom()];
        for segment in CornerFan.segments(area, 4) {
            assert!(corners.contains(&segment.from));
        }
    }

    #[test]
    fn test_stitch_reverses_the_vertical_edge() {
        let area = canvas();
        let segments = CornerStitch.segments(area, 4);
        assert_eq!(segments.len(), 16);

        let edges = CornerEdges::all(area, 4);
        for (corner, edge) in edges.iter().enumerate() {
            for i in 0..4 {
                assert_eq!(
                    segments[corner * 4 + i],
                    Segment::new(edge.horizontal[i], edge.vertical[3 - i])
                );
            }
        }
    }
}
