//! PNG export: encode the composed surface and offer it as a download.

use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::state::editor::EngineHandle;

/// File name offered for the exported image.
pub const EXPORT_FILE_NAME: &str = "edited-image.png";

/// Encode the canvas as PNG and trigger a download of the result.
pub fn download_png(engine: &EngineHandle) {
    let Some(encoded) = engine.with(|e| e.to_png_data_url()) else {
        return;
    };
    match encoded {
        Ok(data_url) => trigger_download(&data_url, EXPORT_FILE_NAME),
        Err(err) => log::error!("could not encode canvas to PNG: {err:?}"),
    }
}

/// Click a transient anchor carrying a `download` attribute.
fn trigger_download(href: &str, file_name: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(element) = document.create_element("a") else {
        log::error!("could not create download link");
        return;
    };
    let Ok(anchor) = element.dyn_into::<HtmlAnchorElement>() else {
        return;
    };
    anchor.set_href(href);
    anchor.set_download(file_name);
    anchor.click();
}
