//! Wire contract between the todo page and its REST backend.
//!
//! This crate compiles for both the server and the browser:
//!
//! - the item payload (`Todo`), the create body (`NewTodo`) and the page
//!   configuration injected by the host (`PageConfig`)
//! - the endpoint table (`routes`)
//! - the error taxonomy (`ApiError`) and response normalization (`decode`)
//! - the `TodoApi` adapter trait, plus a gloo-net implementation behind the
//!   `web` feature
//!
//! # Example
//!
//! ```ignore
//! use todo_api::prelude::*;
//!
//! async fn titles(api: &impl TodoApi) -> Result<Vec<String>, ApiError> {
//!     let todos = api.list().await?;
//!     Ok(todos.into_iter().map(|todo| todo.title).collect())
//! }
//! ```

pub mod client;
pub mod decode;
pub mod model;
pub mod routes;

pub use client::TodoApi;
pub use model::{NewTodo, PageConfig, STATE_SCRIPT_ID, Todo, TodoId};

/// Error type for adapter calls.
///
/// Transport problems (`Serialization`, `Deserialization`, `Request`) and
/// application error payloads (`Server`) are kept apart here so they can be
/// logged precisely. The page collapses all of them into one message per
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Server error: status {status}: {detail}")]
    Server { status: u16, detail: String },
}

impl ApiError {
    /// Whether the failure happened below the application layer.
    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::Server { .. })
    }
}

#[cfg(feature = "web")]
impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Serialization(e.to_string()),
            other => ApiError::Request(other.to_string()),
        }
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::ApiError;
    pub use super::client::TodoApi;
    pub use super::model::{NewTodo, PageConfig, STATE_SCRIPT_ID, Todo, TodoId};

    #[cfg(feature = "web")]
    pub use super::client::HttpClient;
}
