use egui::color_picker::{Alpha, color_edit_button_srgba};

use crate::StarzApp;
use crate::config::{
    CenterPattern, ColorMode, CornerPattern, DrawConfig, DrawMode, GradientDirection, MAX_POINT_COUNT,
    SecondaryTone,
};

/// What the toolbar did this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarResponse {
    /// Any drawing parameter changed
    pub changed: bool,
    /// "Remove Image" was clicked
    pub remove_background: bool,
    /// "Choose Image…" was clicked
    pub pick_background: bool,
}

pub fn toolbar_panel(app: &mut StarzApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Starz Drawing App");
        });
        ui.separator();

        let background = app.background_name().map(str::to_owned);
        let response = toolbar(ui, app.config_mut(), background.as_deref());

        if response.changed {
            log::debug!("Toolbar changed: {:?}", app.config());
            app.config_changed();
        }
        if response.remove_background {
            app.set_background(None);
        }
        #[cfg(not(target_arch = "wasm32"))]
        if response.pick_background {
            app.pick_background();
        }
    });
}

/// Draw the controls for `config`, editing it in place.
pub fn toolbar(ui: &mut egui::Ui, config: &mut DrawConfig, background: Option<&str>) -> ToolbarResponse {
    let before = config.clone();
    let mut response = ToolbarResponse::default();

    ui.horizontal_wrapped(|ui| {
        ui.label("Points");
        // Zero and negative counts stay reachable; they draw the inline message.
        ui.add(
            egui::DragValue::new(&mut config.point_count)
                .speed(0.2)
                .range(i32::MIN..=MAX_POINT_COUNT),
        );

        ui.label("Line Thickness");
        ui.add(egui::Slider::new(&mut config.line_thickness, 1.0..=12.0).step_by(1.0));

        combo(ui, "draw_mode", "Mode", &mut config.mode, &DrawMode::ALL, DrawMode::label);

        ui.label("Background");
        color_edit_button_srgba(ui, &mut config.background_color, Alpha::Opaque);
    });

    ui.horizontal_wrapped(|ui| {
        combo(ui, "color_mode", "Color Mode", &mut config.color_mode, &ColorMode::ALL, ColorMode::label);

        match config.color_mode {
            ColorMode::Solid => {
                ui.label("Line Color");
                color_edit_button_srgba(ui, &mut config.solid_color, Alpha::Opaque);
            }
            ColorMode::Gradient => {
                ui.label("Start");
                color_edit_button_srgba(ui, &mut config.gradient_start, Alpha::Opaque);
                ui.label("End");
                color_edit_button_srgba(ui, &mut config.gradient_end, Alpha::Opaque);
                combo(
                    ui,
                    "gradient_direction",
                    "Direction",
                    &mut config.gradient_direction,
                    &GradientDirection::ALL,
                    GradientDirection::label,
                );
            }
        }
    });

    ui.horizontal_wrapped(|ui| {
        ui.add_enabled_ui(config.mode.includes_center(), |ui| {
            combo(
                ui,
                "center_pattern",
                "Center Pattern",
                &mut config.center_pattern,
                &CenterPattern::ALL,
                CenterPattern::label,
            );
        });
        ui.add_enabled_ui(config.mode.includes_corners(), |ui| {
            combo(
                ui,
                "corner_pattern",
                "Corner Pattern",
                &mut config.corner_pattern,
                &CornerPattern::ALL,
                CornerPattern::label,
            );
        });
        ui.add_enabled_ui(config.mode == DrawMode::Both, |ui| {
            combo(
                ui,
                "secondary_tone",
                "Corner Tone",
                &mut config.secondary_tone,
                &SecondaryTone::ALL,
                SecondaryTone::label,
            );
            if config.secondary_tone != SecondaryTone::Shared {
                ui.add(egui::Slider::new(&mut config.lighten_factor, 0.0..=1.0).text("lighten"));
            }
        });
    });

    ui.horizontal_wrapped(|ui| {
        ui.label("Background Image");
        if cfg!(not(target_arch = "wasm32")) && ui.button("Choose Image…").clicked() {
            response.pick_background = true;
        }
        match background {
            Some(name) => {
                ui.monospace(name);
                if ui.button("Remove Image").clicked() {
                    log::info!("Background image removed");
                    response.remove_background = true;
                }
            }
            None => {
                ui.weak("drop an image file on the window");
            }
        }
    });

    response.changed = *config != before;
    response
}

fn combo<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut T,
    options: &[T],
    name: fn(T) -> &'static str,
) {
    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(name(*value))
        .show_ui(ui, |ui| {
            for &option in options {
                ui.selectable_value(value, option, name(option));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_toolbar(config: &mut DrawConfig, background: Option<&str>) -> ToolbarResponse {
        let ctx = egui::Context::default();
        let mut response = ToolbarResponse::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                response = toolbar(ui, config, background);
            });
        });
        response
    }

    #[test]
    fn test_idle_frame_changes_nothing() {
        let mut config = DrawConfig::default();
        let response = run_toolbar(&mut config, None);
        assert_eq!(response, ToolbarResponse::default());
        assert_eq!(config, DrawConfig::default());
    }

    #[test]
    fn test_point_count_clamped_to_ceiling() {
        let mut config = DrawConfig {
            point_count: 100_000_000,
            ..Default::default()
        };
        let response = run_toolbar(&mut config, None);
        assert!(response.changed);
        assert_eq!(config.point_count, MAX_POINT_COUNT);

        let mut config = DrawConfig {
            point_count: -5,
            ..Default::default()
        };
        let response = run_toolbar(&mut config, None);
        assert!(!response.changed);
        assert_eq!(config.point_count, -5);
    }

    #[test]
    fn test_gradient_controls_render() {
        let mut config = DrawConfig {
            color_mode: ColorMode::Gradient,
            mode: DrawMode::Both,
            ..Default::default()
        };
        let response = run_toolbar(&mut config, Some("backdrop.png"));
        assert!(!response.changed);
        assert!(!response.remove_background);
        assert!(!response.pick_background);
    }
}
