use std::rc::Rc;

use common::{FetchError, ForecastRequest};
use dashboard::flow::{forecast_outcome, ForecastPanel};
use yew::prelude::*;

use crate::api_client::forecast::submit_forecast;
use crate::settings;
use crate::widgets::error::ErrorDisplay;
use crate::widgets::loading::Loading;

#[derive(Debug, Clone, Default, PartialEq)]
struct ForecastState {
    panel: ForecastPanel,
    pending: usize,
}

enum ForecastAction {
    Submitted,
    Completed(Result<String, FetchError>),
    /// Form input failed validation; nothing was sent
    Rejected(FetchError),
}

impl Reducible for ForecastState {
    type Action = ForecastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ForecastAction::Submitted => next.pending += 1,
            ForecastAction::Completed(outcome) => {
                next.pending = next.pending.saturating_sub(1);
                next.panel.apply(outcome);
            }
            ForecastAction::Rejected(error) => next.panel.apply(Err(error)),
        }
        Rc::new(next)
    }
}

fn read_request(form: &web_sys::HtmlFormElement) -> Result<ForecastRequest, FetchError> {
    let form_data = web_sys::FormData::new_with_form(form)
        .map_err(|e| FetchError::InvalidInput(format!("unreadable form: {:?}", e)))?;

    let field = |name: &str| form_data.get(name).as_string().unwrap_or_default();
    ForecastRequest::new(&field("start_date"), &field("end_date"), &field("floor"))
}

#[function_component(ForecastForm)]
pub fn forecast_form() -> Html {
    let form_ref = use_node_ref();
    let state = use_reducer(ForecastState::default);

    let on_submit = {
        let form_ref = form_ref.clone();
        let state = state.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::debug!("Forecast form submitted");

            let Some(form) = form_ref.cast::<web_sys::HtmlFormElement>() else {
                log::error!("Forecast form element not mounted");
                return;
            };

            let request = match read_request(&form) {
                Ok(request) => request,
                Err(error) => {
                    log::warn!("Rejected forecast input: {}", error);
                    state.dispatch(ForecastAction::Rejected(error));
                    return;
                }
            };

            state.dispatch(ForecastAction::Submitted);
            let encoding = settings::get_settings().contract.plot_encoding();
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let response = submit_forecast(&request).await;
                state.dispatch(ForecastAction::Completed(forecast_outcome(response, encoding)));
            });
        })
    };

    let panel = &state.panel;

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Energy Consumption Forecast"}</h2>
                <form ref={form_ref} onsubmit={on_submit} class="grid gap-4 md:grid-cols-4 items-end">
                    <label class="form-control">
                        <span class="label-text">{"Start date"}</span>
                        <input type="date" name="start_date" class="input input-bordered" required=true />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"End date"}</span>
                        <input type="date" name="end_date" class="input input-bordered" required=true />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"Floor"}</span>
                        <input type="text" name="floor" class="input input-bordered" required=true />
                    </label>
                    <button type="submit" class="btn btn-primary">{"Get Forecast"}</button>
                </form>

                if state.pending > 0 {
                    <Loading text={Some("Fetching forecast...".to_string())} />
                }

                if panel.revealed {
                    <div id="forecast-result" class="mt-4 space-y-4">
                        if let Some(message) = &panel.message {
                            <ErrorDisplay message={message.clone()} />
                        }
                        if let Some(src) = &panel.image_src {
                            <img src={src.clone()} alt="Energy consumption forecast" class="w-full rounded" />
                        }
                    </div>
                }
            </div>
        </div>
    }
}
