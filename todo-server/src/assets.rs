//! Serving the compiled page from embedded assets.

use std::marker::PhantomData;

use axum::{
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
};
use rust_embed::RustEmbed;
use serde::Serialize;
use todo_api::STATE_SCRIPT_ID;

/// Marker in `index.html` replaced by the serialized initial state.
pub const STATE_MARKER: &str = "<!--TODO_INITIAL_STATE-->";

/// Embedded page assets (staged by build.rs).
#[derive(RustEmbed)]
#[folder = "../todo-frontend/dist/"]
pub struct Assets;

/// Axum response wrapper for serving the page with initial state.
///
/// The state is serialized into a JSON script tag in `index.html` so the page
/// can configure itself before its first request.
pub struct Page<T, A: RustEmbed = Assets> {
    state: T,
    _assets: PhantomData<A>,
}

impl<T, A: RustEmbed> Page<T, A> {
    pub fn new(state: T) -> Self {
        Self {
            state,
            _assets: PhantomData,
        }
    }
}

impl<T: Serialize, A: RustEmbed> IntoResponse for Page<T, A> {
    fn into_response(self) -> Response {
        let state_json = match serde_json::to_string(&self.state) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize page state: {e}");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to serialize page state: {e}"),
                )
                    .into_response();
            }
        };

        let Some(content) = A::get("index.html") else {
            tracing::error!("index.html missing from embedded assets");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Frontend assets not found. Did you build the frontend?",
            )
                .into_response();
        };

        let html_str = String::from_utf8_lossy(&content.data);
        let state_script = format!(
            r#"<script id="{STATE_SCRIPT_ID}" type="application/json">{}</script>"#,
            state_json.replace("</", "<\\/")
        );
        Html(html_str.replace(STATE_MARKER, &state_script)).into_response()
    }
}

/// Serve a static asset (JS, WASM, etc), or the page with `state` injected.
///
/// `index.html` is never served raw: a literal `/index.html` and every unknown
/// path get the injected page, so the page never starts without its state.
pub fn page_or_asset<T: Serialize, A: RustEmbed>(state: T, uri: &Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if path != "index.html" {
        if let Some(content) = A::get(path) {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            return (
                [(header::CONTENT_TYPE, mime.as_ref().to_owned())],
                content.data.into_owned(),
            )
                .into_response();
        }
    }

    if A::get("index.html").is_none() {
        return (StatusCode::NOT_FOUND, "404 Not Found").into_response();
    }
    Page::<T, A>::new(state).into_response()
}
