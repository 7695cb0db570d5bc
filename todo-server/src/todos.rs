//! In-memory development implementation of the todo endpoints.
//!
//! Lets the page run without its external backend. Items live only as long as
//! the process.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch},
};
use chrono::{SecondsFormat, Utc};
use todo_api::{NewTodo, Todo, TodoId, routes};

/// Error returned by the development API, rendered FastAPI style.
#[derive(Debug, thiserror::Error)]
pub enum ApiFailure {
    #[error("Todo not found")]
    NotFound,

    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Todo store is unavailable")]
    Poisoned,
}

impl ApiFailure {
    fn status(&self) -> StatusCode {
        match self {
            ApiFailure::NotFound => StatusCode::NOT_FOUND,
            ApiFailure::EmptyTitle => StatusCode::UNPROCESSABLE_ENTITY,
            ApiFailure::Poisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "detail": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

#[derive(Debug, Default)]
struct Inner {
    next_id: TodoId,
    todos: Vec<Todo>,
}

/// Shared in-memory item list.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    inner: Arc<Mutex<Inner>>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, ApiFailure> {
        self.inner.lock().map_err(|_| ApiFailure::Poisoned)
    }

    /// All items, newest first.
    pub fn list(&self) -> Result<Vec<Todo>, ApiFailure> {
        let inner = self.lock()?;
        Ok(inner.todos.iter().rev().cloned().collect())
    }

    pub fn create(&self, title: &str) -> Result<Todo, ApiFailure> {
        let new_todo = NewTodo::from_input(title).ok_or(ApiFailure::EmptyTitle)?;
        let mut inner = self.lock()?;
        inner.next_id += 1;
        let todo = Todo {
            id: inner.next_id,
            title: new_todo.title,
            is_done: false,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        inner.todos.push(todo.clone());
        Ok(todo)
    }

    pub fn mark_done(&self, id: TodoId) -> Result<Todo, ApiFailure> {
        let mut inner = self.lock()?;
        let todo = inner
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(ApiFailure::NotFound)?;
        todo.is_done = true;
        Ok(todo.clone())
    }

    pub fn delete(&self, id: TodoId) -> Result<(), ApiFailure> {
        let mut inner = self.lock()?;
        let before = inner.todos.len();
        inner.todos.retain(|todo| todo.id != id);
        if inner.todos.len() == before {
            return Err(ApiFailure::NotFound);
        }
        Ok(())
    }
}

async fn list_todos(State(list): State<TodoList>) -> Result<Json<Vec<Todo>>, ApiFailure> {
    list.list().map(Json)
}

async fn create_todo(
    State(list): State<TodoList>,
    Json(body): Json<NewTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiFailure> {
    let todo = list.create(&body.title)?;
    tracing::info!(id = todo.id, "Created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn mark_done(
    State(list): State<TodoList>,
    Path(id): Path<TodoId>,
) -> Result<Json<Todo>, ApiFailure> {
    let todo = list.mark_done(id)?;
    tracing::info!(id, "Marked todo as done");
    Ok(Json(todo))
}

async fn delete_todo(
    State(list): State<TodoList>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, ApiFailure> {
    list.delete(id)?;
    tracing::info!(id, "Deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

/// Routes for the four todo endpoints.
pub fn router(list: TodoList) -> Router {
    Router::new()
        .route(routes::TODOS, get(list_todos).post(create_todo))
        .route(routes::TODO_DONE, patch(mark_done))
        .route(routes::TODO, delete(delete_todo))
        .with_state(list)
}
