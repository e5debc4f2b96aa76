/// Popup UI for Video Ask extension

use crate::client::{FetchTransport, QueryClient};
use crate::config::PopupConfig;
use crate::query::RequestState;
use crate::ui::components::{LabeledField, ResponsePanel};
use crate::video_id::video_id_or;
use patternfly_yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTabUrl() -> Result<JsValue, JsValue>;
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// URL of the active tab, read once by the host before rendering
    #[prop_or_default]
    pub initial_url: Option<String>,
    #[prop_or_default]
    pub config: PopupConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let initial_video_id = video_id_or(
        props.initial_url.as_deref(),
        &props.config.fallback_video_id,
    );
    let video_id = use_state(move || initial_video_id);
    let question = use_state(String::new);
    let state = use_state(RequestState::default);
    let client = use_memo(props.config.endpoint.clone(), |endpoint| {
        QueryClient::new(FetchTransport, endpoint.clone())
    });

    let on_video_id_input = {
        let video_id = video_id.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                video_id.set(input.value());
            }
        })
    };

    let on_question_input = {
        let question = question.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlTextAreaElement>() {
                question.set(input.value());
            }
        })
    };

    // Ask handler
    let on_ask = {
        let state = state.clone();
        let video_id = video_id.clone();
        let question = question.clone();
        let client = client.clone();

        Callback::from(move |_: MouseEvent| {
            let body = match client.prepare(&state, &video_id, &question) {
                Ok(body) => body,
                Err(outcome) => {
                    // A rejected ask while pending must not clobber the pending state
                    if !state.is_pending() {
                        state.set(RequestState::Done(outcome));
                    }
                    return;
                }
            };

            state.set(RequestState::Pending);

            let state = state.clone();
            let client = client.clone();
            spawn_local(async move {
                let outcome = client.send(body).await;
                state.set(RequestState::Done(outcome));
            });
        })
    };

    let is_busy = state.is_pending();

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Video Ask"}</h1>

            <div class="flex-column-gap">
                <LabeledField label="Video ID">
                    <input
                        id="videoId"
                        class="pf-v5-c-form-control"
                        type="text"
                        value={(*video_id).clone()}
                        oninput={on_video_id_input}
                    />
                </LabeledField>

                <LabeledField label="Question">
                    <textarea
                        id="question"
                        class="pf-v5-c-form-control"
                        rows="3"
                        placeholder="Ask something about this video..."
                        value={(*question).clone()}
                        oninput={on_question_input}
                    />
                </LabeledField>

                <Button onclick={on_ask} disabled={is_busy} variant={ButtonVariant::Primary} block={true}>
                    {"Ask"}
                </Button>
            </div>

            <ResponsePanel display={state.display()} />

            <p class="footer-popup">
                {"Video Ask v0.1.0"}
            </p>
        </div>
    }
}

// Helper functions

/// Read the active tab's URL once; None when there is no tab or no URL
pub async fn active_tab_url() -> Result<Option<String>, String> {
    let url_js = getActiveTabUrl()
        .await
        .map_err(|e| format!("Failed to query active tab: {:?}", e))?;

    if url_js.is_null() || url_js.is_undefined() {
        return Ok(None);
    }

    serde_wasm_bindgen::from_value::<String>(url_js)
        .map(Some)
        .map_err(|e| format!("Failed to parse tab URL: {:?}", e))
}
