use std::rc::Rc;

use common::FetchError;
use dashboard::flow::{visualize, VisualizationPanel};
use dashboard::{ChartInstanceManager, ChartSlot};
use serde_json::Value;
use yew::prelude::*;

use crate::api_client::consumption::get_consumption_summary;
use crate::plotly_backend::PlotlyBackend;
use crate::settings;
use crate::widgets::error::ErrorDisplay;
use crate::widgets::loading::Loading;

/// One resolved `/visualize` request, tagged so every response triggers a render.
#[derive(Debug)]
struct Received {
    seq: u32,
    response: Result<Value, FetchError>,
}

/// Number of `/visualize` requests still in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PendingRequests(usize);

enum PendingAction {
    Started,
    Finished,
}

impl Reducible for PendingRequests {
    type Action = PendingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let count = match action {
            PendingAction::Started => self.0 + 1,
            PendingAction::Finished => self.0.saturating_sub(1),
        };
        Rc::new(PendingRequests(count))
    }
}

#[function_component(ConsumptionCharts)]
pub fn consumption_charts() -> Html {
    // Live charts are purged when the component unmounts and the manager drops
    let manager = use_mut_ref(|| ChartInstanceManager::new(PlotlyBackend));
    let colors = use_mut_ref(|| settings::get_settings().color_scheme.source());
    let next_seq = use_mut_ref(|| 0u32);
    let received = use_state(|| None::<Rc<Received>>);
    let panel = use_state(VisualizationPanel::default);
    let pending = use_reducer(PendingRequests::default);

    let on_visualize = {
        let next_seq = next_seq.clone();
        let received = received.clone();
        let pending = pending.clone();

        Callback::from(move |_: MouseEvent| {
            log::debug!("Visualization requested");
            pending.dispatch(PendingAction::Started);

            let next_seq = next_seq.clone();
            let received = received.clone();
            let pending = pending.clone();
            // Overlapping requests are not guarded; the last one to resolve wins
            wasm_bindgen_futures::spawn_local(async move {
                let response = get_consumption_summary().await;
                let seq = {
                    let mut next_seq = next_seq.borrow_mut();
                    *next_seq += 1;
                    *next_seq
                };
                received.set(Some(Rc::new(Received { seq, response })));
                pending.dispatch(PendingAction::Finished);
            });
        })
    };

    {
        let received = received.clone();
        let panel = panel.clone();
        let seq = (*received).as_ref().map(|received| received.seq);

        // Runs after the container is revealed so Plotly measures visible targets
        use_effect_with(seq, move |_| {
            if let Some(received) = &*received {
                let layout = settings::get_settings().contract.summary_layout();
                let mut manager = manager.borrow_mut();
                let mut colors = colors.borrow_mut();

                let next = visualize(&mut *manager, &mut **colors, layout, received.response.clone());
                log::info!(
                    "Visualization #{} rendered {} charts with {} messages",
                    received.seq,
                    next.rendered.len(),
                    next.messages.len()
                );
                panel.set(next);
            }
            || ()
        });
    }

    let revealed = received.is_some();

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h2 class="card-title">{"Energy Consumption Overview"}</h2>
                    <button class="btn btn-primary" onclick={on_visualize}>{"Visualize Data"}</button>
                </div>

                if pending.0 > 0 {
                    <Loading text={Some("Loading consumption data...".to_string())} />
                }

                <div id="visualization-results" class={classes!("grid", "gap-6", "lg:grid-cols-2", "mt-4", (!revealed).then_some("hidden"))}>
                    { for panel.messages.iter().map(|message| html! {
                        <div class="lg:col-span-2">
                            <ErrorDisplay message={message.clone()} />
                        </div>
                    }) }
                    { for ChartSlot::ALL.iter().map(|slot| html! {
                        <div class="card bg-base-200">
                            <div class="card-body p-4">
                                <div id={slot.element_id()} style="width:100%; height:400px;"></div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}
