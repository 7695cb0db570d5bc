//! Host process for the todo page.
//!
//! Serves the compiled egui page with its configuration injected, a health
//! probe, and (unless disabled) an in-memory implementation of the todo API for
//! local development.

pub mod assets;
pub mod config;
pub mod todos;

use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::{any, get},
};
use serde::Serialize;
use todo_api::{PageConfig, routes};
use tower_http::trace::TraceLayer;

use crate::assets::{Assets, page_or_asset};
pub use crate::config::ServerConfig;
use crate::todos::TodoList;

#[derive(Debug, Serialize)]
struct Pong {
    ping: &'static str,
}

async fn ping() -> Json<Pong> {
    Json(Pong { ping: "pong" })
}

/// Unknown API paths answer 404 instead of falling through to the page.
async fn api_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "detail": "Not Found" })),
    )
}

/// Build the full application router.
pub fn app(config: &ServerConfig) -> Router {
    let page_config: PageConfig = config.page_config();
    let page = move |uri: Uri| {
        let page_config = page_config.clone();
        async move { page_or_asset::<_, Assets>(page_config, &uri) }
    };

    let mut router = Router::new()
        .route("/", get(page.clone()))
        .route(routes::PING, get(ping))
        .route("/api/{*rest}", any(api_not_found));

    if config.no_dev_api {
        tracing::info!("Development API disabled; page talks to {:?}", config.api_base);
    } else {
        router = router.merge(todos::router(TodoList::new()));
    }

    router
        .fallback(page)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use todo_api::Todo;
    use tower::ServiceExt;

    async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, String) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_owned())
            }
            None => Body::empty(),
        };
        let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn ping_answers_pong() {
        let app = app(&ServerConfig::default());
        let (status, body) = send(&app, "GET", "/api/ping", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"ping":"pong"}"#);
    }

    #[tokio::test]
    async fn full_todo_lifecycle() {
        let app = app(&ServerConfig::default());

        let (status, body) = send(&app, "GET", "/api/todos", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");

        let (status, body) = send(&app, "POST", "/api/todos", Some(r#"{"title":" A "}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        let created: Todo = serde_json::from_str(&body).unwrap();
        assert_eq!(created.title, "A");
        assert!(!created.is_done);

        let (status, body) =
            send(&app, "PATCH", &routes::todo_done(created.id), None).await;
        assert_eq!(status, StatusCode::OK);
        let done: Todo = serde_json::from_str(&body).unwrap();
        assert!(done.is_done);
        assert_eq!(done.created_at, created.created_at);

        let (status, body) = send(&app, "DELETE", &routes::todo(created.id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (_, body) = send(&app, "GET", "/api/todos", None).await;
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn errors_use_detail_body() {
        let app = app(&ServerConfig::default());

        let (status, body) = send(&app, "DELETE", "/api/todos/404", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"detail":"Todo not found"}"#);

        let (status, body) = send(&app, "POST", "/api/todos", Some(r#"{"title":"   "}"#)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let decoded = todo_api::decode::decode_json::<Todo>(status.as_u16(), &body).unwrap_err();
        assert_eq!(
            decoded,
            todo_api::ApiError::Server {
                status: 422,
                detail: "Title must not be empty".into()
            }
        );
    }

    #[tokio::test]
    async fn dev_api_can_be_disabled() {
        let config = ServerConfig {
            no_dev_api: true,
            ..ServerConfig::default()
        };
        let app = app(&config);

        let (status, body) = send(&app, "PATCH", "/api/todos/1/done", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"detail":"Not Found"}"#);
        let (status, _) = send(&app, "GET", "/api/ping", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn every_page_path_carries_api_base() {
        let config = ServerConfig {
            api_base: "http://backend:8000".into(),
            no_dev_api: true,
            ..ServerConfig::default()
        };
        let app = app(&config);

        for path in ["/", "/index.html", "/todos", "/anything/deeper"] {
            let (status, body) = send(&app, "GET", path, None).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert!(body.contains(r#""api_base":"http://backend:8000""#), "{path}");
            assert!(!body.contains(assets::STATE_MARKER), "{path}");
        }
    }
}
