//! View-state for the todo page.
//!
//! The store is the single owner of mutable page state. It changes only when
//! an operation begins or when an adapter result is applied.

use todo_api::{ApiError, Todo, TodoId};

/// The four page operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Complete,
    Delete,
}

impl Operation {
    /// User-facing message shown when the operation fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Fetch => "Failed to fetch todos",
            Operation::Create => "Failed to create todo",
            Operation::Complete => "Failed to mark todo as done",
            Operation::Delete => "Failed to delete todo",
        }
    }
}

/// A resolved adapter call, ready to merge into the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Fetched(Result<Vec<Todo>, ApiError>),
    Created(Result<Todo, ApiError>),
    Completed(TodoId, Result<Todo, ApiError>),
    Deleted(TodoId, Result<(), ApiError>),
}

impl Outcome {
    pub fn operation(&self) -> Operation {
        match self {
            Outcome::Fetched(_) => Operation::Fetch,
            Outcome::Created(_) => Operation::Create,
            Outcome::Completed(..) => Operation::Complete,
            Outcome::Deleted(..) => Operation::Delete,
        }
    }
}

#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    loading: bool,
    error: Option<String>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// True while a list fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Mark an operation as started.
    ///
    /// Every operation clears the error slot; only a fetch raises the busy flag.
    pub fn begin(&mut self, op: Operation) {
        self.error = None;
        if op == Operation::Fetch {
            self.loading = true;
        }
    }

    /// Merge a resolved call. Failures leave the list untouched.
    ///
    /// Results are applied in arrival order with no cancellation, so a slow
    /// fetch that resolves after a later create or delete overwrites their
    /// effect with the server's older snapshot.
    pub fn apply(&mut self, outcome: Outcome) {
        let op = outcome.operation();
        if op == Operation::Fetch {
            self.loading = false;
        }

        let result = match outcome {
            Outcome::Fetched(result) => result.map(|todos| self.replace_all(todos)),
            Outcome::Created(result) => result.map(|todo| self.prepend(todo)),
            Outcome::Completed(id, result) => result.map(|todo| self.replace(id, todo)),
            Outcome::Deleted(id, result) => result.map(|()| self.remove(id)),
        };

        if let Err(e) = result {
            log::error!("{}: {e}", op.failure_message());
            self.error = Some(op.failure_message().to_owned());
        }
    }

    fn replace_all(&mut self, todos: Vec<Todo>) {
        let mut unique: Vec<Todo> = Vec::with_capacity(todos.len());
        for todo in todos {
            if unique.iter().any(|seen| seen.id == todo.id) {
                log::warn!("Dropping duplicate todo id {} from list response", todo.id);
                continue;
            }
            unique.push(todo);
        }
        self.todos = unique;
    }

    fn prepend(&mut self, todo: Todo) {
        self.todos.retain(|existing| existing.id != todo.id);
        self.todos.insert(0, todo);
    }

    fn replace(&mut self, id: TodoId, todo: Todo) {
        if let Some(slot) = self.todos.iter_mut().find(|existing| existing.id == id) {
            *slot = todo;
        }
    }

    fn remove(&mut self, id: TodoId) {
        self.todos.retain(|existing| existing.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: TodoId, title: &str, is_done: bool) -> Todo {
        Todo {
            id,
            title: title.into(),
            is_done,
            created_at: "2024-01-01T00:00:00Z".into(),
        }
    }

    fn app_error() -> ApiError {
        ApiError::Server {
            status: 500,
            detail: "boom".into(),
        }
    }

    fn seeded() -> TodoStore {
        let mut store = TodoStore::new();
        store.begin(Operation::Fetch);
        store.apply(Outcome::Fetched(Ok(vec![
            todo(1, "A", false),
            todo(2, "B", false),
            todo(3, "C", true),
        ])));
        store
    }

    fn ids(store: &TodoStore) -> Vec<TodoId> {
        store.todos().iter().map(|t| t.id).collect()
    }

    #[test]
    fn fetch_toggles_loading_and_keeps_server_order() {
        let mut store = TodoStore::new();
        store.begin(Operation::Fetch);
        assert!(store.is_loading());

        store.apply(Outcome::Fetched(Ok(vec![todo(5, "E", false), todo(2, "B", true)])));
        assert!(!store.is_loading());
        assert_eq!(ids(&store), vec![5, 2]);
    }

    #[test]
    fn fetch_failure_keeps_list_and_sets_message() {
        let mut store = seeded();
        store.begin(Operation::Fetch);
        store.apply(Outcome::Fetched(Err(ApiError::Request("offline".into()))));

        assert!(!store.is_loading());
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.error(), Some("Failed to fetch todos"));
    }

    #[test]
    fn fetch_drops_duplicate_ids() {
        let mut store = TodoStore::new();
        store.apply(Outcome::Fetched(Ok(vec![
            todo(1, "first", false),
            todo(1, "second", false),
            todo(2, "B", false),
        ])));
        assert_eq!(ids(&store), vec![1, 2]);
        assert_eq!(store.todos()[0].title, "first");
    }

    #[test]
    fn create_prepends_without_touching_busy_flag() {
        let mut store = seeded();
        store.begin(Operation::Create);
        assert!(!store.is_loading());

        store.apply(Outcome::Created(Ok(todo(9, "new", false))));
        assert_eq!(ids(&store), vec![9, 1, 2, 3]);
    }

    #[test]
    fn create_of_known_id_keeps_ids_unique() {
        let mut store = seeded();
        store.apply(Outcome::Created(Ok(todo(2, "B again", false))));
        assert_eq!(ids(&store), vec![2, 1, 3]);
        assert_eq!(store.todos()[0].title, "B again");
    }

    #[test]
    fn create_failure_leaves_list() {
        let mut store = seeded();
        store.begin(Operation::Create);
        store.apply(Outcome::Created(Err(app_error())));
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.error(), Some("Failed to create todo"));
    }

    #[test]
    fn complete_replaces_only_matching_item() {
        let mut store = seeded();
        store.apply(Outcome::Completed(2, Ok(todo(2, "B", true))));

        let done: Vec<bool> = store.todos().iter().map(|t| t.is_done).collect();
        assert_eq!(done, vec![false, true, true]);
        assert_eq!(ids(&store), vec![1, 2, 3]);
    }

    #[test]
    fn complete_of_missing_item_is_ignored() {
        let mut store = seeded();
        store.apply(Outcome::Completed(42, Ok(todo(42, "ghost", true))));
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.error(), None);
    }

    #[test]
    fn complete_failure_sets_message() {
        let mut store = seeded();
        store.apply(Outcome::Completed(1, Err(app_error())));
        assert!(!store.todos()[0].is_done);
        assert_eq!(store.error(), Some("Failed to mark todo as done"));
    }

    #[test]
    fn delete_removes_only_matching_item() {
        let mut store = seeded();
        store.apply(Outcome::Deleted(2, Ok(())));
        assert_eq!(ids(&store), vec![1, 3]);
    }

    #[test]
    fn delete_failure_leaves_list() {
        let mut store = seeded();
        store.apply(Outcome::Deleted(2, Err(ApiError::Request("offline".into()))));
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.error(), Some("Failed to delete todo"));
    }

    #[test]
    fn new_error_replaces_old_and_begin_clears_it() {
        let mut store = seeded();
        store.apply(Outcome::Deleted(1, Err(app_error())));
        store.apply(Outcome::Created(Err(app_error())));
        assert_eq!(store.error(), Some("Failed to create todo"));

        store.begin(Operation::Complete);
        assert_eq!(store.error(), None);
    }

    #[test]
    fn success_does_not_clear_stale_error() {
        let mut store = seeded();
        store.apply(Outcome::Deleted(1, Err(app_error())));
        store.apply(Outcome::Deleted(2, Ok(())));
        assert_eq!(store.error(), Some("Failed to delete todo"));
    }

    #[test]
    fn late_fetch_overwrites_newer_delete() {
        let mut store = seeded();
        store.begin(Operation::Fetch);
        store.apply(Outcome::Deleted(1, Ok(())));
        store.apply(Outcome::Fetched(Ok(vec![todo(1, "A", false), todo(2, "B", false)])));
        assert_eq!(ids(&store), vec![1, 2]);
    }
}
