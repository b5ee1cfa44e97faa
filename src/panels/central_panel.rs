use egui::{Color32, Stroke, Vec2};

use crate::StarzApp;
use crate::layout::{CanvasLayout, EguiViewport};

pub fn central_panel(app: &mut StarzApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let layout = CanvasLayout::compute(
            &EguiViewport::new(ctx),
            ui.available_width(),
            app.settings().ads.enabled,
            &app.settings().layout,
        );
        app.apply_layout(layout);
        app.redraw_if_needed(ctx);

        let side = layout.side as f32;
        let column_width = app.settings().layout.ad_column_width;

        ui.horizontal_top(|ui| {
            if layout.show_ads {
                ad_column(ui, &app.ad_slots()[0].slot_id, Vec2::new(column_width, side));
            }

            ui.vertical(|ui| {
                match app.texture() {
                    Some(texture) => {
                        ui.image((texture.id(), Vec2::splat(side)));
                    }
                    None => {
                        ui.allocate_space(Vec2::splat(side));
                    }
                }

                ui.horizontal(|ui| {
                    if ui.button("Export as PNG").clicked() {
                        app.export();
                    }
                    if let Some(status) = app.status() {
                        ui.label(status);
                    }
                });
            });

            if layout.show_ads {
                ad_column(ui, &app.ad_slots()[1].slot_id, Vec2::new(column_width, side));
            }
        });
    });
}

/// Reserve a column for an ad slot and outline it.
fn ad_column(ui: &mut egui::Ui, slot_id: &str, size: Vec2) {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter()
        .rect_stroke(rect, 4.0, Stroke::new(1.0, Color32::from_gray(200)));
    response.on_hover_text(format!("Ad slot {}", slot_id));
}
