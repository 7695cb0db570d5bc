//! Pure projection of the store into what the page shows.

use todo_api::TodoId;

use crate::store::TodoStore;

pub const HEADING: &str = "Todo Management";
pub const PLACEHOLDER: &str = "Enter a new todo...";
pub const SUBMIT_LABEL: &str = "Add Todo";
pub const LOADING_TEXT: &str = "Loading todos...";
pub const EMPTY_TEXT: &str = "No todos yet. Add one above!";
pub const DONE_LABEL: &str = "✓ Done";
pub const DELETE_LABEL: &str = "Delete";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub error_banner: Option<String>,
    pub input_enabled: bool,
    pub submit_enabled: bool,
    pub body: Body,
}

/// Main area below the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Loading,
    Empty,
    List(Vec<ItemView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
    pub date: String,
    pub show_complete: bool,
    pub actions_enabled: bool,
}

impl PageView {
    pub fn build(store: &TodoStore, draft: &str) -> Self {
        let busy = store.is_loading();
        let todos = store.todos();

        let body = if todos.is_empty() {
            if busy { Body::Loading } else { Body::Empty }
        } else {
            Body::List(
                todos
                    .iter()
                    .map(|todo| ItemView {
                        id: todo.id,
                        title: todo.title.clone(),
                        done: todo.is_done,
                        date: todo.display_date(),
                        show_complete: !todo.is_done,
                        actions_enabled: !busy,
                    })
                    .collect(),
            )
        };

        Self {
            error_banner: store.error().map(str::to_owned),
            input_enabled: !busy,
            submit_enabled: !busy && !draft.trim().is_empty(),
            body,
        }
    }

    /// Items in display order; empty unless the list is shown.
    pub fn items(&self) -> &[ItemView] {
        match &self.body {
            Body::List(items) => items,
            Body::Loading | Body::Empty => &[],
        }
    }
}
