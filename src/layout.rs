use egui::Vec2;

use crate::config::CanvasSize;
use crate::settings::LayoutSettings;

/// Source of the current viewport dimensions.
pub trait Viewport {
    fn size(&self) -> Vec2;
}

/// Reads the window size from egui.
pub struct EguiViewport<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiViewport<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl Viewport for EguiViewport<'_> {
    fn size(&self) -> Vec2 {
        self.ctx.screen_rect().size()
    }
}

/// A viewport of known size.
#[derive(Debug, Clone, Copy)]
pub struct FixedViewport(pub Vec2);

impl Viewport for FixedViewport {
    fn size(&self) -> Vec2 {
        self.0
    }
}

/// Where the canvas goes for the current viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    /// Side of the square canvas, in pixels
    pub side: u32,
    /// Ad columns are drawn on either side of the canvas
    pub show_ads: bool,
}

impl CanvasLayout {
    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize::square(self.side)
    }

    /// Fit a square canvas into `container_width`, leaving room for the ad
    /// columns on wide viewports and capping it at a share of the height.
    pub fn compute(
        viewport: &dyn Viewport,
        container_width: f32,
        ads_enabled: bool,
        settings: &LayoutSettings,
    ) -> Self {
        let viewport = viewport.size();
        let show_ads = ads_enabled && viewport.x >= settings.narrow_breakpoint;
        let reserved = if show_ads {
            2.0 * settings.ad_column_width
        } else {
            0.0
        };

        let available = (container_width - reserved - settings.gap).max(settings.min_canvas);
        let max_by_height = (viewport.y * settings.height_fraction).max(settings.min_canvas);
        let side = available.min(max_by_height).floor() as u32;

        Self { side, show_ads }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn layout(viewport: Vec2, container: f32) -> CanvasLayout {
        CanvasLayout::compute(&FixedViewport(viewport), container, true, &LayoutSettings::default())
    }

    #[test]
    fn test_wide_viewport_reserves_ad_columns() {
        // 1000 - 240 - 16 = 744, height cap 1200 * 0.65 = 780
        let result = layout(vec2(1024.0, 1200.0), 1000.0);
        assert_eq!(result, CanvasLayout { side: 744, show_ads: true });
    }

    #[test]
    fn test_narrow_viewport_drops_ads() {
        let result = layout(vec2(600.0, 1200.0), 580.0);
        assert_eq!(result, CanvasLayout { side: 564, show_ads: false });
    }

    #[test]
    fn test_height_caps_the_canvas() {
        // 900 * 0.65 ≈ 585 < 1400 - 240 - 16
        let result = layout(vec2(1440.0, 900.0), 1400.0);
        assert_eq!(result.side, (900.0_f32 * 0.65).floor() as u32);
        assert!(result.side < 1144);
    }

    #[test]
    fn test_minimum_canvas() {
        let result = layout(vec2(300.0, 100.0), 100.0);
        assert_eq!(result.side, 200);
    }

    #[test]
    fn test_disabled_ads_reserve_nothing() {
        let result = CanvasLayout::compute(
            &FixedViewport(vec2(1024.0, 2000.0)),
            1000.0,
            false,
            &LayoutSettings::default(),
        );
        assert_eq!(result, CanvasLayout { side: 984, show_ads: false });
    }
}
