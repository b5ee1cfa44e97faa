use egui::Color32;
use starz::config::{CanvasSize, ColorMode, DrawConfig, DrawMode, GradientDirection};
use starz::{BackgroundImage, ConfigError, RenderOutcome, Renderer, export};

fn is_white(pixel: tiny_skia::PremultipliedColorU8) -> bool {
    (pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()) == (255, 255, 255, 255)
}

#[test]
fn test_redraw_is_pixel_identical() {
    let config = DrawConfig {
        point_count: 24,
        mode: DrawMode::Both,
        color_mode: ColorMode::Gradient,
        gradient_direction: GradientDirection::TopBottom,
        ..Default::default()
    };
    let size = CanvasSize::square(256);

    let mut renderer = Renderer::new();
    let first = renderer.render(&config, size, None);
    let first_pixels = renderer.surface().unwrap().data().to_vec();
    let second = renderer.render(&config, size, None);

    assert_eq!(first, second);
    assert_eq!(renderer.surface().unwrap().data(), first_pixels.as_slice());

    // A fresh renderer agrees too
    let mut other = Renderer::new();
    other.render(&config, size, None);
    assert_eq!(other.surface().unwrap().data(), first_pixels.as_slice());
}

#[test]
fn test_invalid_point_count_draws_only_the_message() {
    for point_count in [0, -3] {
        let config = DrawConfig {
            point_count,
            ..Default::default()
        };
        let mut renderer = Renderer::new();
        let outcome = renderer.render(&config, CanvasSize::square(400), None);
        assert_eq!(outcome, RenderOutcome::Rejected(ConfigError::TooFewPoints(point_count)));
        assert_eq!(outcome.strokes(), 0);

        let surface = renderer.surface().unwrap();
        let mut glyph_pixels = 0;
        for y in 0..surface.height() {
            for x in 0..surface.width() {
                let pixel = surface.pixel(x, y).unwrap();
                if is_white(pixel) {
                    continue;
                }
                // Everything that is not background belongs to the message line
                assert!(y < 40, "stray pixel at ({x}, {y})");
                glyph_pixels += 1;
            }
        }
        assert!(glyph_pixels > 0);

        // No axes on the error path
        assert!(is_white(surface.pixel(200, 300).unwrap()));
        assert!(is_white(surface.pixel(300, 200).unwrap()));
    }
}

#[test]
fn test_corner_mode_rejects_single_point() {
    let config = DrawConfig {
        point_count: 1,
        mode: DrawMode::Corners,
        ..Default::default()
    };
    let outcome = Renderer::new().render(&config, CanvasSize::square(200), None);
    assert_eq!(outcome, RenderOutcome::Rejected(ConfigError::TooFewCornerPoints(1)));
}

#[test]
fn test_background_image_covers_canvas() {
    let red = image::RgbaImage::from_pixel(2, 1, image::Rgba([255, 0, 0, 255]));
    let background = BackgroundImage::from_rgba(red, "red.png").unwrap();
    let config = DrawConfig {
        point_count: 4,
        ..Default::default()
    };

    let mut renderer = Renderer::new();
    let outcome = renderer.render(&config, CanvasSize::square(100), Some(&background));
    assert_eq!(outcome, RenderOutcome::Drawn { segments: 1 });

    let surface = renderer.surface().unwrap();
    for (x, y) in [(25, 5), (75, 95), (5, 75)] {
        let pixel = surface.pixel(x, y).unwrap();
        assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (255, 0, 0), "at ({x}, {y})");
    }
}

#[test]
fn test_strokes_use_the_line_color() {
    let config = DrawConfig {
        point_count: 4,
        solid_color: Color32::BLACK,
        line_thickness: 4.0,
        ..Default::default()
    };
    let mut renderer = Renderer::new();
    renderer.render(&config, CanvasSize::square(200), None);

    // The single chord runs vertically through the center
    let pixel = renderer.surface().unwrap().pixel(100, 60).unwrap();
    assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (0, 0, 0));
}

#[test]
fn test_export_matches_surface() {
    let config = DrawConfig {
        background_color: Color32::from_rgb(0x11, 0x22, 0x33),
        ..Default::default()
    };
    let mut renderer = Renderer::new();
    renderer.render(&config, CanvasSize::new(120, 80), None);

    let png = export::encode_png(renderer.surface().unwrap()).unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (120, 80));
    assert_eq!(decoded.get_pixel(0, 0).0, [0x11, 0x22, 0x33, 0xff]);
}
