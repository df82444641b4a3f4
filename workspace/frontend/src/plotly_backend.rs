//! Draws chart specs into the page with Plotly.js.

use dashboard::figure::to_plot;
use dashboard::{ChartBackend, ChartError, ChartSlot, ChartSpec};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(root: &HtmlElement, data: &JsValue, layout: &JsValue, config: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn purge(root: &HtmlElement) -> Result<(), JsValue>;
}

#[derive(Serialize)]
struct PlotConfig {
    responsive: bool,
    #[serde(rename = "displaylogo")]
    display_logo: bool,
}

/// Renders into the four chart `<div>`s looked up by element id.
#[derive(Debug, Default)]
pub struct PlotlyBackend;

impl ChartBackend for PlotlyBackend {
    type Target = HtmlElement;
    type Handle = HtmlElement;

    fn locate(&self, slot: ChartSlot) -> dashboard::Result<HtmlElement> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ChartError::target_missing(slot, "no document available"))?;

        document
            .get_element_by_id(slot.element_id())
            .ok_or_else(|| ChartError::target_missing(slot, format!("element #{} not found", slot.element_id())))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ChartError::target_missing(slot, format!("element #{} is not an HTML element", slot.element_id())))
    }

    fn create(&mut self, slot: ChartSlot, target: &HtmlElement, spec: &ChartSpec) -> dashboard::Result<HtmlElement> {
        let figure = js_sys::JSON::parse(&to_plot(spec).to_json())
            .map_err(|e| ChartError::render(slot, format!("invalid figure JSON: {:?}", e)))?;
        let data = js_sys::Reflect::get(&figure, &JsValue::from_str("data"))
            .map_err(|e| ChartError::render(slot, format!("{:?}", e)))?;
        let layout = js_sys::Reflect::get(&figure, &JsValue::from_str("layout"))
            .map_err(|e| ChartError::render(slot, format!("{:?}", e)))?;

        let config = PlotConfig {
            responsive: true,
            display_logo: false,
        };
        let config = config
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| ChartError::render(slot, e.to_string()))?;

        log::debug!("Plotting {} chart with {} series", slot, spec.series.len());
        new_plot(target, &data, &layout, &config)
            .map_err(|e| ChartError::render(slot, format!("Plotly.newPlot failed: {:?}", e)))?;

        Ok(target.clone())
    }

    fn dispose(&mut self, slot: ChartSlot, handle: HtmlElement) {
        if let Err(e) = purge(&handle) {
            log::warn!("Failed to purge {} chart: {:?}", slot, e);
        }
    }
}
