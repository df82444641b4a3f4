use yew::prelude::*;

use crate::settings;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let settings = settings::get_settings();

    html! {
        <div class="navbar bg-primary text-primary-content">
            <div class="navbar-start">
                <span class="btn btn-ghost text-xl">{"Wattboard"}</span>
            </div>
            <div class="navbar-center">
                <h1 class="text-lg font-semibold">{&props.title}</h1>
            </div>
            <div class="navbar-end">
                <span class="badge badge-ghost" title="Backend contract">{settings.contract.to_string()}</span>
            </div>
        </div>
    }
}
