//! The adapter boundary between page actions and HTTP calls.
//!
//! `TodoApi` is what the page is generic over; the browser build plugs in
//! `HttpClient`, tests plug in an in-memory fake.

use crate::{ApiError, NewTodo, Todo, TodoId};

/// The four round trips the page performs against its backend.
///
/// Implementations normalize transport failures and error payloads into
/// `ApiError`; they do no validation of their own.
#[allow(async_fn_in_trait)]
pub trait TodoApi {
    /// Fetch all items in server order.
    async fn list(&self) -> Result<Vec<Todo>, ApiError>;

    /// Create an item and return it with its server-assigned fields.
    async fn create(&self, todo: &NewTodo) -> Result<Todo, ApiError>;

    /// Mark an item done and return the updated item.
    async fn complete(&self, id: TodoId) -> Result<Todo, ApiError>;

    /// Delete an item.
    async fn delete(&self, id: TodoId) -> Result<(), ApiError>;
}

#[cfg(feature = "web")]
mod web {
    use gloo_net::http::{Request, Response};

    use super::TodoApi;
    use crate::decode::{decode_empty, decode_json, decode_json_or_default};
    use crate::{ApiError, NewTodo, PageConfig, Todo, TodoId, routes};

    /// gloo-net implementation of `TodoApi`.
    #[derive(Debug, Clone, Default)]
    pub struct HttpClient {
        base: String,
    }

    impl HttpClient {
        /// Create a client for the API base the host injected.
        pub fn new(config: &PageConfig) -> Self {
            Self {
                base: config.api_base.clone(),
            }
        }

        fn url(&self, path: &str) -> String {
            routes::url(&self.base, path)
        }
    }

    /// Split a response into status and body text.
    async fn read(response: Response) -> Result<(u16, String), ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok((status, body))
    }

    impl TodoApi for HttpClient {
        async fn list(&self) -> Result<Vec<Todo>, ApiError> {
            let response = Request::get(&self.url(routes::TODOS)).send().await?;
            let (status, body) = read(response).await?;
            decode_json_or_default(status, &body)
        }

        async fn create(&self, todo: &NewTodo) -> Result<Todo, ApiError> {
            let response = Request::post(&self.url(routes::TODOS))
                .json(todo)?
                .send()
                .await?;
            let (status, body) = read(response).await?;
            decode_json(status, &body)
        }

        async fn complete(&self, id: TodoId) -> Result<Todo, ApiError> {
            let response = Request::patch(&self.url(&routes::todo_done(id)))
                .send()
                .await?;
            let (status, body) = read(response).await?;
            decode_json(status, &body)
        }

        async fn delete(&self, id: TodoId) -> Result<(), ApiError> {
            let response = Request::delete(&self.url(&routes::todo(id))).send().await?;
            let (status, body) = read(response).await?;
            decode_empty(status, &body)
        }
    }
}

#[cfg(feature = "web")]
pub use web::HttpClient;
