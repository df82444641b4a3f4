use yew::prelude::*;

mod components;
mod plotly_backend;
mod widgets;
pub mod api_client;
pub mod settings;

use components::consumption::ConsumptionCharts;
use components::forecast::ForecastForm;
use components::layout::layout::Layout;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Layout title="Energy Consumption Dashboard">
            <ForecastForm />
            <ConsumptionCharts />
        </Layout>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Wattboard Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base: {:?}", settings.api_base);
    log::debug!("Contract: {}, colors: {}", settings.contract, settings.color_scheme);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
