//! Todo page frontend.
//!
//! The store, view model and painter are plain Rust and build natively; the
//! `hydrate` feature adds the WASM entry point that runs the page in a browser
//! canvas against the backend over HTTP.

pub mod app;
pub mod store;
pub mod ui;
pub mod view;

pub use app::TodoApp;

// ============================================================================
// WASM Entry Point
// ============================================================================

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
mod web {
    use eframe::wasm_bindgen::{self, prelude::*};
    use todo_api::client::HttpClient;
    use todo_api::{PageConfig, STATE_SCRIPT_ID};

    use crate::TodoApp;

    /// WASM entry point - called from JavaScript.
    #[wasm_bindgen(start)]
    pub fn main() {
        eframe::WebLogger::init(log::LevelFilter::Debug).ok();

        wasm_bindgen_futures::spawn_local(async {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                log::error!("No document to mount the page in");
                return;
            };

            let config: PageConfig = read_initial_state(&document).unwrap_or_default();
            log::debug!("Starting todo page with api base {:?}", config.api_base);

            let Some(canvas) = document
                .get_element_by_id("the_canvas_id")
                .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
            else {
                log::error!("Failed to find canvas element `the_canvas_id`");
                return;
            };

            let client = HttpClient::new(&config);
            let start_result = eframe::WebRunner::new()
                .start(
                    canvas,
                    eframe::WebOptions::default(),
                    Box::new(move |cc| Ok(Box::new(TodoApp::new(&cc.egui_ctx, client)))),
                )
                .await;

            // Remove the loading text
            if let Some(loading_text) = document.get_element_by_id("loading_text") {
                match start_result {
                    Ok(_) => {
                        loading_text.remove();
                    }
                    Err(e) => {
                        loading_text.set_inner_html(
                            "<p>The app has crashed. See the developer console for details.</p>",
                        );
                        log::error!("Failed to start eframe: {e:?}");
                    }
                }
            }
        });
    }

    /// Read the host-injected state from a script tag in the DOM.
    fn read_initial_state<T: serde::de::DeserializeOwned>(
        document: &web_sys::Document,
    ) -> Option<T> {
        let script = document.get_element_by_id(STATE_SCRIPT_ID)?;
        let json = script.text_content()?;
        serde_json::from_str(&json).ok()
    }
}
