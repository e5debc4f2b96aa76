/// Reusable UI components

use crate::query::DisplayState;
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResponsePanelProps {
    pub display: DisplayState,
}

/// Shows the answer, the loading spinner, or an error for the last ask
#[function_component(ResponsePanel)]
pub fn response_panel(props: &ResponsePanelProps) -> Html {
    match &props.display {
        DisplayState::Empty => html! {},
        DisplayState::Loading(msg) => html! {
            <div class="loading-text-center">
                <Spinner />
                <p class="loading-text">{msg}</p>
            </div>
        },
        DisplayState::Answer(text) => html! {
            <div class="response-box">
                <p class="response-text">{text}</p>
            </div>
        },
        DisplayState::Error(err) => html! {
            <div class="message-top-margin">
                <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                    {err.clone()}
                </Alert>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct LabeledFieldProps {
    pub label: AttrValue,
    pub children: Children,
}

#[function_component(LabeledField)]
pub fn labeled_field(props: &LabeledFieldProps) -> Html {
    html! {
        <div class="field">
            <label class="field-label">{props.label.clone()}</label>
            {props.children.clone()}
        </div>
    }
}
