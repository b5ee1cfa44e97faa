//! PNG export of the canvas surface.
//!
//! Native builds write into the configured export directory; web builds hand
//! the bytes to the browser as a download.

use std::io::Cursor;
use tiny_skia::Pixmap;

use crate::error::ExportError;
use crate::settings::ExportSettings;

/// Encode the surface as a straight-alpha RGBA PNG.
pub fn encode_png(surface: &Pixmap) -> Result<Vec<u8>, ExportError> {
    let mut rgba = Vec::with_capacity(surface.data().len());
    for pixel in surface.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    let image = image::RgbaImage::from_raw(surface.width(), surface.height(), rgba)
        .ok_or(ExportError::EmptySurface)?;
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(bytes)
}

/// Export the surface; returns a description of where it went.
#[cfg(not(target_arch = "wasm32"))]
pub fn export_png(surface: &Pixmap, settings: &ExportSettings) -> Result<String, ExportError> {
    let bytes = encode_png(surface)?;
    let path = settings.directory.join(&settings.file_name);
    std::fs::write(&path, &bytes).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    log::info!("Exported {} bytes to {}", bytes.len(), path.display());
    Ok(path.display().to_string())
}

/// Export the surface; returns a description of where it went.
#[cfg(target_arch = "wasm32")]
pub fn export_png(surface: &Pixmap, settings: &ExportSettings) -> Result<String, ExportError> {
    let bytes = encode_png(surface)?;
    download(&bytes, &settings.file_name)?;
    log::info!("Offered {} bytes as {}", bytes.len(), settings.file_name);
    Ok(settings.file_name.clone())
}

#[cfg(target_arch = "wasm32")]
fn download(bytes: &[u8], file_name: &str) -> Result<(), ExportError> {
    use wasm_bindgen::JsCast;

    let js_error = |err: wasm_bindgen::JsValue| ExportError::Download(format!("{err:?}"));

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Download("no document".to_owned()))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| ExportError::Download("<a> is not an anchor element".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    revoke_later(url, REVOKE_DELAY_MS);
    Ok(())
}

/// How long the download URL stays valid after the click.
#[cfg(target_arch = "wasm32")]
const REVOKE_DELAY_MS: i32 = 10_000;

/// Release an object URL once the browser has had time to start the download.
#[cfg(target_arch = "wasm32")]
fn revoke_later(url: String, delay_ms: i32) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let revoke = Closure::once(move || {
        if let Err(err) = web_sys::Url::revoke_object_url(&url) {
            log::warn!("Failed to revoke download URL: {:?}", err);
        }
    });
    if let Err(err) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(revoke.as_ref().unchecked_ref(), delay_ms)
    {
        log::warn!("Download URL kept alive: {:?}", err);
    }
    // Owned by the JS timer from here on
    revoke.forget();
}
