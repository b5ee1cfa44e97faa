use tiny_skia::{ColorU8, IntSize, Pixmap, PixmapPaint, FilterQuality, Transform};

use crate::config::CanvasSize;
use crate::error::ImageLoadError;

/// A decoded backdrop image, drawn beneath the strokes.
///
/// Owned by the app; replacing or clearing it drops the pixel buffer.
pub struct BackgroundImage {
    name: String,
    pixmap: Pixmap,
}

impl std::fmt::Debug for BackgroundImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundImage")
            .field("name", &self.name)
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .finish()
    }
}

impl BackgroundImage {
    /// Decode any raster format the `image` crate recognizes.
    pub fn decode(bytes: &[u8], name: impl Into<String>) -> Result<Self, ImageLoadError> {
        let decoded = image::load_from_memory(bytes)?;
        log::debug!("Decoded background image: {}x{}", decoded.width(), decoded.height());
        Self::from_rgba(decoded.to_rgba8(), name)
    }

    /// Wrap straight-alpha RGBA pixels.
    pub fn from_rgba(rgba: image::RgbaImage, name: impl Into<String>) -> Result<Self, ImageLoadError> {
        let (width, height) = rgba.dimensions();
        let size = IntSize::from_wh(width, height)
            .ok_or(ImageLoadError::InvalidDimensions { width, height })?;

        // tiny-skia stores premultiplied pixels
        let mut data = Vec::with_capacity(rgba.as_raw().len());
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            let premultiplied = ColorU8::from_rgba(r, g, b, a).premultiply();
            data.extend_from_slice(&[
                premultiplied.red(),
                premultiplied.green(),
                premultiplied.blue(),
                premultiplied.alpha(),
            ]);
        }

        let pixmap = Pixmap::from_vec(data, size)
            .ok_or(ImageLoadError::InvalidDimensions { width, height })?;
        Ok(Self {
            name: name.into(),
            pixmap,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Placement that covers `target` completely: uniform scale, centered,
    /// overflow cropped by the surface bounds.
    pub fn cover(&self, target: CanvasSize) -> Cover {
        let target_w = target.width as f32;
        let target_h = target.height as f32;
        let scale = (target_w / self.width() as f32).max(target_h / self.height() as f32);
        let drawn_w = self.width() as f32 * scale;
        let drawn_h = self.height() as f32 * scale;
        Cover {
            scale,
            x: (target_w - drawn_w) / 2.0,
            y: (target_h - drawn_h) / 2.0,
        }
    }

    pub(crate) fn draw_onto(&self, surface: &mut Pixmap) {
        let cover = self.cover(CanvasSize::new(surface.width(), surface.height()));
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        surface.draw_pixmap(0, 0, self.pixmap.as_ref(), &paint, cover.transform(), None);
    }
}

/// Uniform scale and offset placing an image over the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cover {
    pub scale: f32,
    pub x: f32,
    pub y: f32,
}

impl Cover {
    pub fn transform(&self) -> Transform {
        Transform::from_row(self.scale, 0.0, 0.0, self.scale, self.x, self.y)
    }
}
