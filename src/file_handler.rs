use eframe::egui;

use crate::background::BackgroundImage;
use crate::error::ImageLoadError;

/// Turns files dropped on the window into background images.
#[derive(Debug, Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect files dropped this frame. Returns true if there are any.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
            }
        });
        !self.dropped_files.is_empty()
    }

    /// Decode the dropped files, keeping the last one that is a usable image.
    ///
    /// Failures are logged and skipped; they never reach the canvas.
    pub fn take_background(&mut self) -> Option<BackgroundImage> {
        let mut background = None;
        for file in std::mem::take(&mut self.dropped_files) {
            let name = file_name(&file);
            if !is_image_file(&file) {
                log::warn!("Dropped file is not a supported type: {}", name);
                continue;
            }
            match load_image(&file, &name) {
                Ok(image) => {
                    log::info!("Loaded background {} ({}x{})", name, image.width(), image.height());
                    background = Some(image);
                }
                Err(err) => log::warn!("Skipping {}: {}", name, err),
            }
        }
        background
    }

    /// Ask for a backdrop with the native file dialog.
    ///
    /// Returns `None` when the dialog is cancelled or the file can't be used.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn pick_background(&self) -> Option<BackgroundImage> {
        let path = rfd::FileDialog::new()
            .set_title("Choose a background image")
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_file()?;
        let name = path.display().to_string();
        match load_path(&path, &name) {
            Ok(image) => {
                log::info!("Loaded background {} ({}x{})", name, image.width(), image.height());
                Some(image)
            }
            Err(err) => {
                log::warn!("Skipping {}: {}", name, err);
                None
            }
        }
    }

    /// Dim the window and list the files being dragged over it.
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, FontId, Id, LayerId, Order};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Drop to set the background image:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else if !file.mime.is_empty() {
                    text += &format!("\n{}", file.mime);
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(20.0),
            Color32::WHITE,
        );
    }
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

fn file_name(file: &egui::DroppedFile) -> String {
    if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}

/// Check the MIME type, falling back to the extension.
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        return file.mime.starts_with("image/");
    }
    let extension = file
        .path
        .as_ref()
        .and_then(|path| path.extension())
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .or_else(|| {
            file.name
                .rsplit_once('.')
                .map(|(_, ext)| ext.to_lowercase())
        });
    extension.is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

fn load_image(file: &egui::DroppedFile, name: &str) -> Result<BackgroundImage, ImageLoadError> {
    if let Some(bytes) = &file.bytes {
        return BackgroundImage::decode(bytes, name);
    }

    #[cfg(not(target_arch = "wasm32"))]
    if let Some(path) = &file.path {
        return load_path(path, name);
    }

    Err(ImageLoadError::NoData(name.to_owned()))
}

#[cfg(not(target_arch = "wasm32"))]
fn load_path(path: &std::path::Path, name: &str) -> Result<BackgroundImage, ImageLoadError> {
    let bytes = std::fs::read(path).map_err(|source| ImageLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    BackgroundImage::decode(&bytes, name)
}
