//! Shared state behind one mounted slider.
//!
//! The engine publishes synchronously while it is mutably borrowed, so JS
//! observers are not called from inside the engine listener. The listener
//! only queues the value vector; `flush` runs after the borrow is released,
//! redraws the view and then calls the observers. Observers may therefore
//! call back into the slider.

use std::cell::RefCell;
use std::rc::Rc;

use rslider_core::{RangeSlider, SliderOptions};
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::render::SliderView;

pub struct Widget {
    pub slider: RefCell<RangeSlider>,
    pub view: RefCell<Option<SliderView>>,
    pending: Rc<RefCell<Vec<Vec<f64>>>>,
    observers: RefCell<Vec<(u32, js_sys::Function)>>,
    next_observer: RefCell<u32>,
}

impl Widget {
    pub fn new(options: &SliderOptions) -> Rc<Self> {
        let mut slider = RangeSlider::new(options);
        let pending: Rc<RefCell<Vec<Vec<f64>>>> = Rc::new(RefCell::new(Vec::new()));
        let queue = pending.clone();
        slider.subscribe(move |values| queue.borrow_mut().push(values.to_vec()));
        Rc::new(Self {
            slider: RefCell::new(slider),
            view: RefCell::new(None),
            pending,
            observers: RefCell::new(Vec::new()),
            next_observer: RefCell::new(0),
        })
    }

    /// Run `f` against the engine, then deliver whatever it published.
    pub fn with_slider<R>(&self, f: impl FnOnce(&mut RangeSlider) -> R) -> R {
        let out = f(&mut self.slider.borrow_mut());
        self.flush();
        out
    }

    pub fn add_observer(&self, callback: js_sys::Function) -> u32 {
        let mut next = self.next_observer.borrow_mut();
        let id = *next;
        *next += 1;
        self.observers.borrow_mut().push((id, callback));
        id
    }

    pub fn remove_observer(&self, id: u32) -> bool {
        let mut obs = self.observers.borrow_mut();
        let before = obs.len();
        obs.retain(|(oid, _)| *oid != id);
        obs.len() != before
    }

    pub fn clear_observers(&self) {
        self.observers.borrow_mut().clear();
    }

    pub fn is_mounted(&self) -> bool {
        self.view.borrow().is_some()
    }

    /// Build the view once. A second mount would also wire a second set of
    /// window listeners, so it is refused.
    pub fn mount(&self, container: &web::Element) -> anyhow::Result<()> {
        if self.is_mounted() {
            anyhow::bail!("slider is already attached");
        }
        let document = crate::dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let view = SliderView::build(&document, container, &self.slider.borrow())?;
        *self.view.borrow_mut() = Some(view);
        Ok(())
    }

    /// Rebuild the DOM after a configuration change.
    pub fn rebuild_view(&self) -> anyhow::Result<()> {
        let document = crate::dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        if let Some(view) = self.view.borrow_mut().as_mut() {
            view.rebuild(&document, &self.slider.borrow())?;
        }
        Ok(())
    }

    fn flush(&self) {
        let batches: Vec<Vec<f64>> = std::mem::take(&mut *self.pending.borrow_mut());
        if batches.is_empty() {
            return;
        }
        if let Some(view) = self.view.borrow().as_ref() {
            view.sync_values(&self.slider.borrow());
        }
        // Clone so observers can (un)subscribe while being called.
        let observers: Vec<js_sys::Function> =
            self.observers.borrow().iter().map(|(_, f)| f.clone()).collect();
        for values in batches {
            let arr = values_to_array(&values);
            for f in &observers {
                if let Err(e) = f.call1(&JsValue::NULL, &arr) {
                    log::error!("[observer] callback threw: {:?}", e);
                }
            }
        }
    }
}

pub fn values_to_array(values: &[f64]) -> js_sys::Array {
    values.iter().map(|v| JsValue::from_f64(*v)).collect()
}
