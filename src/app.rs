use crate::ads::{self, AdHost, AdSlot, LoggingAdHost};
use crate::background::BackgroundImage;
use crate::config::{CanvasSize, DrawConfig};
use crate::export;
use crate::file_handler::FileHandler;
use crate::layout::CanvasLayout;
use crate::panels;
use crate::renderer::{RenderOutcome, Renderer};
use crate::settings::Settings;

/// Composition root: owns the configuration, the renderer and the optional
/// resources around them.
pub struct StarzApp {
    config: DrawConfig,
    settings: Settings,
    renderer: Renderer,
    texture: Option<egui::TextureHandle>,
    background: Option<BackgroundImage>,
    file_handler: FileHandler,
    ad_host: Box<dyn AdHost>,
    ad_slots: [AdSlot; 2],
    layout: Option<CanvasLayout>,
    outcome: Option<RenderOutcome>,
    status: Option<String>,
    needs_redraw: bool,
}

impl StarzApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        Self::with_ad_host(settings, Box::new(LoggingAdHost))
    }

    /// Build the app around a specific ad host. Needs no window.
    pub fn with_ad_host(settings: Settings, ad_host: Box<dyn AdHost>) -> Self {
        Self {
            config: settings.draw.clone(),
            ad_slots: AdSlot::from_settings(&settings.ads),
            settings,
            renderer: Renderer::new(),
            texture: None,
            background: None,
            file_handler: FileHandler::new(),
            ad_host,
            layout: None,
            outcome: None,
            status: None,
            needs_redraw: true,
        }
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// Toolbar access. Callers report changes through [`Self::config_changed`].
    pub fn config_mut(&mut self) -> &mut DrawConfig {
        &mut self.config
    }

    pub fn config_changed(&mut self) {
        self.needs_redraw = true;
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ad_slots(&self) -> &[AdSlot; 2] {
        &self.ad_slots
    }

    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }

    pub fn outcome(&self) -> Option<&RenderOutcome> {
        self.outcome.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn background_name(&self) -> Option<&str> {
        self.background.as_ref().map(BackgroundImage::name)
    }

    /// Replace or clear the backdrop; the previous image is dropped here.
    pub fn set_background(&mut self, background: Option<BackgroundImage>) {
        if let Some(old) = self.background.take() {
            log::info!("Releasing background {}", old.name());
        }
        self.background = background;
        self.needs_redraw = true;
    }

    /// Open the file dialog and use the chosen image as the backdrop.
    /// Keeps the current backdrop when nothing usable is picked.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn pick_background(&mut self) {
        if let Some(image) = self.file_handler.pick_background() {
            self.set_background(Some(image));
        }
    }

    /// Record the layout for this frame. A new canvas size triggers a
    /// redraw and asks the ad host to refill the visible slots.
    pub fn apply_layout(&mut self, layout: CanvasLayout) {
        if self.layout == Some(layout) {
            return;
        }
        log::debug!("Canvas layout changed to {:?}", layout);
        self.layout = Some(layout);
        self.needs_redraw = true;

        if layout.show_ads {
            ads::refresh_slots(self.ad_host.as_mut(), &self.ad_slots);
        }
    }

    /// Full recompute-and-render at `size`, without touching the GPU texture.
    pub fn render(&mut self, size: CanvasSize) -> &RenderOutcome {
        let outcome = self
            .renderer
            .render(&self.config, size, self.background.as_ref());
        self.needs_redraw = false;
        self.outcome.insert(outcome)
    }

    /// Redraw if anything changed since the last frame and upload the result.
    pub fn redraw_if_needed(&mut self, ctx: &egui::Context) {
        if !self.needs_redraw {
            return;
        }
        let Some(layout) = self.layout else {
            return;
        };
        self.render(layout.canvas_size());
        self.upload(ctx);
    }

    fn upload(&mut self, ctx: &egui::Context) {
        let Some(image) = self.renderer.to_color_image() else {
            return;
        };
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture("starz-canvas", image, egui::TextureOptions::LINEAR));
            }
        }
    }

    /// Export the current surface as PNG and report the result in the status line.
    pub fn export(&mut self) {
        let Some(surface) = self.renderer.surface() else {
            self.status = Some("Nothing to export yet".to_owned());
            return;
        };
        self.status = Some(match export::export_png(surface, &self.settings.export) {
            Ok(target) => format!("Saved {}", target),
            Err(err) => {
                log::error!("Export failed: {}", err);
                format!("Export failed: {}", err)
            }
        });
    }
}

impl eframe::App for StarzApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.file_handler.check_for_dropped_files(ctx) {
            if let Some(image) = self.file_handler.take_background() {
                self.set_background(Some(image));
            }
        }
        self.file_handler.preview_files_being_dropped(ctx);

        panels::toolbar_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
