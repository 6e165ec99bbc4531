use anyhow::{anyhow, Result};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("no global `window` exists"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow!("window has no document"))
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

/// Writes `text` into the element with `id`. Missing elements are skipped.
pub fn set_text(id: &str, text: &str) -> bool {
    match element_by_id(id) {
        Some(el) => {
            el.set_text_content(Some(text));
            true
        }
        None => false,
    }
}

pub fn set_displayed(el: &Element, visible: bool) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let value = if visible { "" } else { "none" };
        if html.style().set_property("display", value).is_err() {
            log::debug!("could not set display on element");
        }
    }
}

pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let list = match root.query_selector_all(selector) {
        Ok(list) => list,
        Err(_) => return Vec::new(),
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn viewport_width() -> Option<f64> {
    window().ok()?.inner_width().ok()?.as_f64()
}
