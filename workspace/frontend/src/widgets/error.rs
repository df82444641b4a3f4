use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Inline error message inside a result region
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="alert alert-error" role="alert">
            <i class="fas fa-exclamation-circle"></i>
            <span>{&props.message}</span>
        </div>
    }
}
