/// Video Ask - Chrome Extension for asking questions about a video
/// Built with Rust + WASM + Yew

pub mod client;
pub mod config;
pub mod query;
pub mod video_id;
pub mod ui;

use config::PopupConfig;
use ui::popup::{App, AppProps};
use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the extractor for JavaScript access
#[wasm_bindgen]
pub fn extract_video_id(url: &str) -> String {
    video_id::video_id_or_default(Some(url))
}

// Start the Yew app for the popup with default settings
#[wasm_bindgen]
pub async fn start_popup() {
    render_popup(PopupConfig::default()).await;
}

// Start the Yew app for the popup with settings from the host page
#[wasm_bindgen]
pub async fn start_popup_with_config(config: JsValue) {
    let config = match serde_wasm_bindgen::from_value::<PopupConfig>(config) {
        Ok(config) => config.or_default(),
        Err(e) => {
            log::error!("Failed to parse popup config: {:?}", e);
            PopupConfig::default()
        }
    };

    render_popup(config).await;
}

async fn render_popup(config: PopupConfig) {
    let initial_url = match ui::popup::active_tab_url().await {
        Ok(url) => url,
        Err(e) => {
            log::error!("{}", e);
            None
        }
    };

    yew::Renderer::<App>::with_props(AppProps { initial_url, config }).render();
}
