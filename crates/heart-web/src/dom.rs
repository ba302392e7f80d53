use anyhow::anyhow;
use heart_core::Size;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{} for click listener", element_id);
    }
}

pub fn element_by_id(document: &web::Document, element_id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow!("missing #{}", element_id))
}

/// Create a `<div class=..>` with optional text and append it to `parent`.
pub fn append_div(
    document: &web::Document,
    parent: &web::Element,
    class: &str,
    text: Option<&str>,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    el.set_class_name(class);
    if text.is_some() {
        el.set_text_content(text);
    }
    parent.append_child(&el).map_err(|e| anyhow!("{:?}", e))?;
    Ok(el)
}

/// CSS-pixel size of the layout viewport.
pub fn viewport_size() -> anyhow::Result<Size> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let width = window
        .inner_width()
        .map_err(|e| anyhow!("{:?}", e))?
        .as_f64()
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .map_err(|e| anyhow!("{:?}", e))?
        .as_f64()
        .unwrap_or(0.0);
    Ok(Size::new(width, height))
}

#[inline]
pub fn element_size(el: &web::Element) -> Size {
    let rect = el.get_bounding_client_rect();
    Size::new(rect.width(), rect.height())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}
