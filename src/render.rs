//! DOM rendering of a slider.
//!
//! Layout, built inside the host container:
//!
//! ```text
//! div.rslider[.rslider--vertical]
//!   div.rslider__track
//!     div.rslider__progress
//!     div.rslider__handle[data-id=i]
//!       div.rslider__tooltip
//!   div.rslider__scale
//!     div.rslider__mark[data-mark=k]
//! ```
//!
//! Positions are inline percentages, so the view never needs to know the
//! track's pixel size.

use rslider_core::{RangeSlider, SliderConfig};
use web_sys as web;

use crate::dom;
use crate::input::{format_value, position_style, span_style};

pub struct SliderView {
    root: web::HtmlElement,
    track: web::HtmlElement,
    progress: web::HtmlElement,
    handles: Vec<(web::HtmlElement, web::HtmlElement)>,
    config: SliderConfig,
}

impl SliderView {
    pub fn build(
        document: &web::Document,
        container: &web::Element,
        slider: &RangeSlider,
    ) -> anyhow::Result<Self> {
        let root = dom::create_div(document, "rslider")?;
        dom::append(container, &root)?;
        let track = dom::create_div(document, "rslider__track")?;
        let progress = dom::create_div(document, "rslider__progress")?;
        let mut view = Self {
            root,
            track,
            progress,
            handles: Vec::new(),
            config: slider.config(),
        };
        view.rebuild(document, slider)?;
        Ok(view)
    }

    #[inline]
    pub fn track(&self) -> &web::HtmlElement {
        &self.track
    }

    #[inline]
    pub fn root(&self) -> &web::HtmlElement {
        &self.root
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.config.view.is_horizontal
    }

    /// Recreate every child element for the slider's current configuration.
    pub fn rebuild(&mut self, document: &web::Document, slider: &RangeSlider) -> anyhow::Result<()> {
        let config = slider.config();
        self.config = config;
        self.root.set_inner_html("");
        self.track.set_inner_html("");
        self.handles.clear();

        let class = if config.view.is_horizontal {
            "rslider"
        } else {
            "rslider rslider--vertical"
        };
        self.root.set_class_name(class);

        dom::append(&self.root, &self.track)?;
        dom::append(&self.track, &self.progress)?;
        dom::set_hidden(&self.progress, !config.view.show_progress);

        let r = config.view.handler_radius;
        for i in 0..slider.values().len() {
            let handle = dom::create_div(document, "rslider__handle")?;
            _ = handle.set_attribute("data-id", &i.to_string());
            let tooltip = dom::create_div(document, "rslider__tooltip")?;
            dom::set_hidden(&tooltip, !config.view.show_tooltip);
            dom::append(&handle, &tooltip)?;
            dom::append(&self.track, &handle)?;
            self.handles.push((handle, tooltip));
        }
        log::debug!("[view] built {} handles r={}px", self.handles.len(), r);

        let scale = dom::create_div(document, "rslider__scale")?;
        dom::set_hidden(&scale, !config.view.show_scale);
        for (k, mark) in slider.scale_plan().marks.iter().enumerate() {
            let el = dom::create_div(document, "rslider__mark")?;
            _ = el.set_attribute("data-mark", &k.to_string());
            el.set_inner_text(&format_value(mark.value));
            dom::set_style(
                &el,
                &position_style(mark.coordinate_percent, config.view.is_horizontal),
            );
            dom::append(&scale, &el)?;
        }
        dom::append(&self.root, &scale)?;

        self.sync_values(slider);
        Ok(())
    }

    /// Move handles, tooltips and the progress bar to the current values.
    pub fn sync_values(&self, slider: &RangeSlider) {
        let horizontal = self.config.view.is_horizontal;
        let r = self.config.view.handler_radius;
        let space = slider.handles().space();
        for ((handle, tooltip), v) in self.handles.iter().zip(slider.values()) {
            let pos = position_style(space.value_to_coordinate(*v), horizontal);
            dom::set_style(
                handle,
                &format!(
                    "{}; width: {d}px; height: {d}px; margin: -{r}px",
                    pos,
                    d = 2.0 * r,
                    r = r
                ),
            );
            tooltip.set_inner_text(&format_value(*v));
        }
        if self.config.view.show_progress {
            if let Some((from, to)) = slider.progress_span() {
                dom::set_style(&self.progress, &span_style(from, to, horizontal));
            }
        }
    }
}
