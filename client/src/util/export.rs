//! PNG export for the mind-map diagram.
//!
//! The vector diagram is serialized to SVG, decoded into an off-document
//! image, rasterized onto a canvas sized to the diagram's bounding box with
//! a white background, and offered as a PNG download. Every step is
//! best-effort: failures are logged and produce no partial output.

use mindmap::layout::Layout;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Rasterize `layout` and trigger a browser download named `file_name`.
///
/// No-op outside the browser.
pub fn export_png(layout: &Layout, file_name: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let svg = mindmap::svg::render_svg(layout);

        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str(&svg));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("image/svg+xml;charset=utf-8");
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            log::warn!("mind map export: building the SVG blob failed");
            return;
        };
        let Ok(svg_url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            log::warn!("mind map export: object URL creation failed");
            return;
        };
        let Ok(image) = web_sys::HtmlImageElement::new() else {
            log::warn!("mind map export: image element creation failed");
            return;
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (width, height) = (layout.width.ceil() as u32, layout.height.ceil() as u32);

        let file_name = file_name.to_owned();
        let image_for_load = image.clone();
        let url_for_load = svg_url.clone();
        let onload = Closure::once_into_js(move || {
            rasterize_and_download(&image_for_load, width, height, &file_name);
            let _ = web_sys::Url::revoke_object_url(&url_for_load);
        });
        image.set_onload(Some(onload.unchecked_ref()));

        let url_for_error = svg_url.clone();
        let onerror = Closure::once_into_js(move || {
            log::warn!("mind map export: SVG image decode failed");
            let _ = web_sys::Url::revoke_object_url(&url_for_error);
        });
        image.set_onerror(Some(onerror.unchecked_ref()));

        image.set_src(&svg_url);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (layout, file_name);
    }
}

#[cfg(target_arch = "wasm32")]
fn rasterize_and_download(
    image: &web_sys::HtmlImageElement,
    width: u32,
    height: u32,
    file_name: &str,
) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let canvas = document
        .create_element("canvas")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok());
    let Some(canvas) = canvas else {
        log::warn!("mind map export: canvas creation failed");
        return;
    };
    canvas.set_width(width.max(1));
    canvas.set_height(height.max(1));

    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web_sys::CanvasRenderingContext2d>().ok());
    let Some(context) = context else {
        log::warn!("mind map export: 2d context unavailable");
        return;
    };

    context.set_fill_style_str("#ffffff");
    context.fill_rect(0.0, 0.0, f64::from(width), f64::from(height));
    if context
        .draw_image_with_html_image_element(image, 0.0, 0.0)
        .is_err()
    {
        log::warn!("mind map export: drawing the diagram failed");
        return;
    }

    let file_name = file_name.to_owned();
    let on_blob = Closure::once_into_js(move |blob: Option<web_sys::Blob>| {
        let Some(blob) = blob else {
            log::warn!("mind map export: PNG encoding failed");
            return;
        };
        download_blob(&blob, &file_name);
    });
    if canvas
        .to_blob_with_type(on_blob.unchecked_ref(), "image/png")
        .is_err()
    {
        log::warn!("mind map export: PNG encoding failed");
    }
}

#[cfg(target_arch = "wasm32")]
fn download_blob(blob: &web_sys::Blob, file_name: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(blob) else {
        log::warn!("mind map export: download URL creation failed");
        return;
    };
    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
    let Some(anchor) = anchor else {
        let _ = web_sys::Url::revoke_object_url(&url);
        log::warn!("mind map export: anchor creation failed");
        return;
    };
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);
}
