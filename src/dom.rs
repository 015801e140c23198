use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input::TrackRect;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create a `<div>` with the given class list.
pub fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create_element failed: {:?}", e))?;
    el.set_class_name(class);
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("not an HtmlElement: {:?}", e))
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child failed: {:?}", e))
}

#[inline]
pub fn set_style(el: &web::Element, style: &str) {
    _ = el.set_attribute("style", style);
}

#[inline]
pub fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    _ = if hidden {
        cl.add_1("rslider--hidden")
    } else {
        cl.remove_1("rslider--hidden")
    };
}

pub fn track_rect(el: &web::Element) -> TrackRect {
    let r = el.get_bounding_client_rect();
    TrackRect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

/// Handle index of the `.rslider__handle` element under `target`, if any.
pub fn handle_index_at(target: Option<web::EventTarget>) -> Option<usize> {
    let el = target?.dyn_into::<web::Element>().ok()?;
    let handle = el.closest(".rslider__handle").ok()??;
    crate::input::parse_index_attr(&handle.get_attribute("data-id")?)
}

/// Mark index of the `.rslider__mark` element under `target`, if any.
pub fn mark_index_at(target: Option<web::EventTarget>) -> Option<usize> {
    let el = target?.dyn_into::<web::Element>().ok()?;
    let mark = el.closest(".rslider__mark").ok()??;
    crate::input::parse_index_attr(&mark.get_attribute("data-mark")?)
}
