use std::rc::Rc;

use rslider_core::PointerTarget;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::input;
use crate::widget::Widget;

/// Wire press on the slider root plus move/release on the window, so a drag
/// keeps following the pointer after it leaves the track.
pub fn wire_pointer_handlers(widget: &Rc<Widget>) {
    wire_pointerdown(widget);
    wire_pointermove(widget);
    wire_pointerup(widget);
}

fn pointer_percent(widget: &Widget, ev: &web::MouseEvent) -> Option<f64> {
    let view = widget.view.borrow();
    let view = view.as_ref()?;
    let rect = dom::track_rect(view.track());
    Some(input::track_percent(
        &rect,
        f64::from(ev.client_x()),
        f64::from(ev.client_y()),
        view.is_horizontal(),
    ))
}

fn classify(widget: &Widget, ev: &web::PointerEvent) -> PointerTarget {
    if let Some(i) = dom::handle_index_at(ev.target()) {
        return PointerTarget::Handle(i);
    }
    let on_track = ev
        .target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(".rslider__track").ok().flatten())
        .is_some();
    match pointer_percent(widget, ev) {
        Some(p) if on_track => PointerTarget::Track(p),
        _ => PointerTarget::Outside,
    }
}

fn wire_pointerdown(widget: &Rc<Widget>) {
    let Some(root) = widget.view.borrow().as_ref().map(|v| v.root().clone()) else {
        log::warn!("[pointer] slider is not mounted");
        return;
    };
    let w = widget.clone();
    let capture = root.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(k) = dom::mark_index_at(ev.target()) {
            if w.slider.borrow().scale_plan().marks.get(k).is_some() {
                w.with_slider(|s| s.select_scale_mark(k));
                log::info!("[click] scale mark {}", k);
            }
            ev.prevent_default();
            return;
        }
        let target = classify(&w, &ev);
        if w.with_slider(|s| s.press(target)).is_some() {
            _ = capture.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = root.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(widget: &Rc<Widget>) {
    let w = widget.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.slider.borrow().drag_session().is_none() {
            return;
        }
        if let Some(p) = pointer_percent(&w, &ev) {
            w.with_slider(|s| s.pointer_move(p));
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(widget: &Rc<Widget>) {
    let w = widget.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.with_slider(|s| s.release());
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
