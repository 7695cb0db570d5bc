//! egui painter for `PageView`.

use todo_api::TodoId;

use crate::view::{self, Body, ItemView, PageView};

/// Id of the new-todo text input.
pub const INPUT_ID: &str = "new_todo_input";

/// A control the user activated this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Submit,
    Complete(TodoId),
    Delete(TodoId),
}

/// Draw the page. Returns the action the user triggered, if any.
pub fn page(ui: &mut egui::Ui, view: &PageView, draft: &mut String) -> Option<UiAction> {
    let mut action = None;

    ui.heading(view::HEADING);
    ui.add_space(8.0);

    if let Some(message) = &view.error_banner {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.colored_label(ui.visuals().error_fg_color, message);
            });
        ui.add_space(8.0);
    }

    ui.horizontal(|ui| {
        let input = ui.add_enabled(
            view.input_enabled,
            egui::TextEdit::singleline(draft)
                .id(egui::Id::new(INPUT_ID))
                .hint_text(view::PLACEHOLDER),
        );
        let entered = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = ui
            .add_enabled(view.submit_enabled, egui::Button::new(view::SUBMIT_LABEL))
            .clicked();
        if view.submit_enabled && (entered || clicked) {
            action = Some(UiAction::Submit);
        }
    });

    ui.separator();

    match &view.body {
        Body::Loading => {
            ui.label(view::LOADING_TEXT);
        }
        Body::Empty => {
            ui.weak(view::EMPTY_TEXT);
        }
        Body::List(items) => {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for item in items {
                    if let Some(clicked) = item_row(ui, item) {
                        action = Some(clicked);
                    }
                }
            });
        }
    }

    action
}

fn item_row(ui: &mut egui::Ui, item: &ItemView) -> Option<UiAction> {
    let mut action = None;

    ui.push_id(item.id, |ui| {
        ui.horizontal(|ui| {
            let title = if item.done {
                egui::RichText::new(&item.title).strikethrough().weak()
            } else {
                egui::RichText::new(&item.title).strong()
            };
            ui.label(title);
            ui.small(&item.date);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(item.actions_enabled, egui::Button::new(view::DELETE_LABEL))
                    .clicked()
                {
                    action = Some(UiAction::Delete(item.id));
                }
                if item.show_complete
                    && ui
                        .add_enabled(item.actions_enabled, egui::Button::new(view::DONE_LABEL))
                        .clicked()
                {
                    action = Some(UiAction::Complete(item.id));
                }
            });
        });
    });

    action
}
