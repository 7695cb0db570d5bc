//! Endpoint paths of the todo backend.
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | List | GET | `/api/todos` |
//! | Create | POST | `/api/todos` |
//! | Complete | PATCH | `/api/todos/{id}/done` |
//! | Delete | DELETE | `/api/todos/{id}` |

use crate::TodoId;

/// Collection path: list and create.
pub const TODOS: &str = "/api/todos";

/// Item path pattern in axum syntax: delete.
pub const TODO: &str = "/api/todos/{id}";

/// Completion path pattern in axum syntax.
pub const TODO_DONE: &str = "/api/todos/{id}/done";

/// Health probe.
pub const PING: &str = "/api/ping";

/// Concrete item path.
pub fn todo(id: TodoId) -> String {
    format!("{TODOS}/{id}")
}

/// Concrete completion path.
pub fn todo_done(id: TodoId) -> String {
    format!("{TODOS}/{id}/done")
}

/// Join an API base with an endpoint path.
///
/// An empty base keeps the path relative to the page origin.
pub fn url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
