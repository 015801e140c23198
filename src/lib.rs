#![cfg(target_arch = "wasm32")]
use std::rc::Rc;

use rslider_core::{SliderConfig, SliderOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod events;
mod input;
mod render;
mod widget;

use widget::{values_to_array, Widget};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rslider-web starting");
    Ok(())
}

fn to_js_err(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

/// Read a plain JS object as partial options. `undefined`/`null` mean none.
fn options_from_js(value: &JsValue) -> anyhow::Result<SliderOptions> {
    if value.is_undefined() || value.is_null() {
        return Ok(SliderOptions::default());
    }
    let text: String = js_sys::JSON::stringify(value)
        .map_err(|e| anyhow::anyhow!("options are not serializable: {:?}", e))?
        .into();
    serde_json::from_str(&text).map_err(|e| anyhow::anyhow!("invalid options: {}", e))
}

fn json_to_js<T: serde::Serialize>(value: &T) -> anyhow::Result<JsValue> {
    let text = serde_json::to_string(value)?;
    js_sys::JSON::parse(&text).map_err(|e| anyhow::anyhow!("JSON.parse failed: {:?}", e))
}

/// A range slider as seen from JavaScript.
///
/// ```js
/// const s = RSlider.create({ handlerCount: 2, showProgress: true });
/// s.attach(document.getElementById("slider"));
/// s.addObserver((values) => console.log(values));
/// ```
#[wasm_bindgen]
pub struct RSlider {
    widget: Rc<Widget>,
}

#[wasm_bindgen]
impl RSlider {
    /// Invalid options fall back to the defaults with a console warning.
    pub fn create(options: JsValue) -> Result<RSlider, JsValue> {
        let options = options_from_js(&options).map_err(to_js_err)?;
        Ok(RSlider {
            widget: Widget::new(&options),
        })
    }

    /// Render into `container` and start listening for pointer input.
    /// Throws if this slider is already attached.
    pub fn attach(&self, container: web::Element) -> Result<(), JsValue> {
        self.widget.mount(&container).map_err(to_js_err)?;
        events::wire_pointer_handlers(&self.widget);
        Ok(())
    }

    #[wasm_bindgen(js_name = isAttached)]
    pub fn is_attached(&self) -> bool {
        self.widget.is_mounted()
    }

    /// Attach to the element with the given id.
    #[wasm_bindgen(js_name = attachById)]
    pub fn attach_by_id(&self, id: &str) -> Result<(), JsValue> {
        let el = dom::window_document()
            .and_then(|d| d.get_element_by_id(id))
            .ok_or_else(|| JsValue::from_str(&format!("missing #{}", id)))?;
        self.attach(el)
    }

    #[wasm_bindgen(js_name = getConfig)]
    pub fn get_config(&self) -> Result<JsValue, JsValue> {
        json_to_js(&self.widget.slider.borrow().config()).map_err(to_js_err)
    }

    /// Merge `options` into the configuration. Throws on invalid options and
    /// leaves the slider unchanged.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&self, options: JsValue) -> Result<JsValue, JsValue> {
        let options = options_from_js(&options).map_err(to_js_err)?;
        let before: SliderConfig = self.widget.slider.borrow().config();
        let after = self
            .widget
            .with_slider(|s| s.set_config(&options))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        if after != before {
            self.widget.rebuild_view().map_err(to_js_err)?;
        }
        json_to_js(&after).map_err(to_js_err)
    }

    #[wasm_bindgen(js_name = getValues)]
    pub fn values(&self) -> js_sys::Array {
        values_to_array(self.widget.slider.borrow().values())
    }

    /// Current value of handle `index`, or `undefined`.
    #[wasm_bindgen(js_name = getValue)]
    pub fn value(&self, index: usize) -> Option<f64> {
        self.widget.slider.borrow().value(index)
    }

    /// Returns the value the handle ended up at, or `undefined` for an
    /// unknown index.
    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&self, index: usize, value: f64) -> Option<f64> {
        self.widget.with_slider(|s| s.set_value(index, value))
    }

    /// Set a value from text typed into an input field.
    #[wasm_bindgen(js_name = setValueText)]
    pub fn set_value_text(&self, index: usize, text: &str) -> Option<f64> {
        self.widget.with_slider(|s| s.set_value_text(index, text))
    }

    #[wasm_bindgen(js_name = setValues)]
    pub fn set_values(&self, values: Vec<f64>) -> js_sys::Array {
        self.widget
            .with_slider(|s| values_to_array(s.set_values(&values)))
    }

    /// Subscribe to value changes. Returns an id for `removeObserver`.
    #[wasm_bindgen(js_name = addObserver)]
    pub fn add_observer(&self, callback: JsValue) -> Result<u32, JsValue> {
        let f = callback
            .dyn_into::<js_sys::Function>()
            .map_err(|_| JsValue::from_str("observer must be a function"))?;
        Ok(self.widget.add_observer(f))
    }

    #[wasm_bindgen(js_name = removeObserver)]
    pub fn remove_observer(&self, id: u32) -> bool {
        self.widget.remove_observer(id)
    }

    #[wasm_bindgen(js_name = clearObservers)]
    pub fn clear_observers(&self) {
        self.widget.clear_observers();
    }

    /// `{ tickStep, marks: [{ value, coordinatePercent }] }`
    #[wasm_bindgen(js_name = scaleMarks)]
    pub fn scale_marks(&self) -> Result<JsValue, JsValue> {
        json_to_js(self.widget.slider.borrow().scale_plan()).map_err(to_js_err)
    }

    #[wasm_bindgen(js_name = selectScaleMark)]
    pub fn select_scale_mark(&self, mark: usize) -> Option<f64> {
        self.widget.with_slider(|s| s.select_scale_mark(mark))
    }

    /// `[from, to]` in percent, or `undefined` when no bar is drawn.
    pub fn progress(&self) -> JsValue {
        match self.widget.slider.borrow().progress_span() {
            Some((from, to)) => values_to_array(&[from, to]).into(),
            None => JsValue::UNDEFINED,
        }
    }
}
