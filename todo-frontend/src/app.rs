//! The todo page: wires user actions to the adapter and results to the store.

use std::sync::mpsc::{Receiver, Sender, channel};

use todo_api::{NewTodo, TodoApi, TodoId};

use crate::store::{Operation, Outcome, TodoStore};
use crate::ui::UiAction;
use crate::view::PageView;

pub struct TodoApp<C> {
    client: C,
    store: TodoStore,
    draft: String,
    response_rx: Receiver<Outcome>,
    response_tx: Sender<Outcome>,
    repaint: egui::Context,
}

impl<C: TodoApi + Clone + 'static> TodoApp<C> {
    /// Create the page and start the initial list fetch.
    ///
    /// `ctx` is asked to repaint whenever a response arrives.
    pub fn new(ctx: &egui::Context, client: C) -> Self {
        let (tx, rx) = channel();
        let mut app = Self {
            client,
            store: TodoStore::new(),
            draft: String::new(),
            response_rx: rx,
            response_tx: tx,
            repaint: ctx.clone(),
        };
        app.refresh();
        app
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn view(&self) -> PageView {
        PageView::build(&self.store, &self.draft)
    }

    pub fn refresh(&mut self) {
        self.store.begin(Operation::Fetch);
        let client = self.client.clone();
        self.spawn(async move { Outcome::Fetched(client.list().await) });
    }

    /// Submit the draft. Blank input sends nothing and changes nothing.
    pub fn submit(&mut self) {
        let Some(new_todo) = NewTodo::from_input(&self.draft) else {
            return;
        };
        self.store.begin(Operation::Create);
        let client = self.client.clone();
        self.spawn(async move { Outcome::Created(client.create(&new_todo).await) });
    }

    pub fn complete(&mut self, id: TodoId) {
        self.store.begin(Operation::Complete);
        let client = self.client.clone();
        self.spawn(async move { Outcome::Completed(id, client.complete(id).await) });
    }

    pub fn delete(&mut self, id: TodoId) {
        self.store.begin(Operation::Delete);
        let client = self.client.clone();
        self.spawn(async move { Outcome::Deleted(id, client.delete(id).await) });
    }

    /// Apply every response that arrived since the last frame.
    pub fn process_responses(&mut self) {
        while let Ok(outcome) = self.response_rx.try_recv() {
            if matches!(outcome, Outcome::Created(Ok(_))) {
                self.draft.clear();
            }
            self.store.apply(outcome);
        }
    }

    /// Draw one frame and dispatch whatever the user clicked.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.process_responses();

        let view = self.view();
        let action = egui::CentralPanel::default()
            .show(ctx, |ui| crate::ui::page(ui, &view, &mut self.draft))
            .inner;

        match action {
            Some(UiAction::Submit) => self.submit(),
            Some(UiAction::Complete(id)) => self.complete(id),
            Some(UiAction::Delete(id)) => self.delete(id),
            None => {}
        }
    }

    fn spawn<F>(&self, request: F)
    where
        F: Future<Output = Outcome> + 'static,
    {
        let tx = self.response_tx.clone();
        let repaint = self.repaint.clone();
        let task = async move {
            let _ = tx.send(request.await);
            repaint.request_repaint();
        };

        #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
        wasm_bindgen_futures::spawn_local(task);

        // Without a browser event loop the request runs inline.
        #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
        futures::executor::block_on(task);
    }
}

#[cfg(feature = "hydrate")]
impl<C: TodoApi + Clone + 'static> eframe::App for TodoApp<C> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_buttons(ui);
            });
        });

        self.show(ctx);
    }
}
