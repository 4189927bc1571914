//! Handler for the list view (no popup open).

use crossterm::event::{KeyCode, KeyModifiers};

use crate::core::ops;

use super::HandleResult;
use crate::tui::app::{App, ConfirmDelete};
use crate::tui::form::FormState;

pub(super) fn handle_list(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    app: &mut App,
) -> HandleResult {
    let shift = key_modifiers.contains(KeyModifiers::SHIFT);
    match key_code {
        KeyCode::Char('q') => return HandleResult::Break,
        KeyCode::Up if shift => move_selected(app, true),
        KeyCode::Down if shift => move_selected(app, false),
        KeyCode::Char('K') => move_selected(app, true),
        KeyCode::Char('J') => move_selected(app, false),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Home => app.selected = 0,
        KeyCode::End => app.selected = app.models.len().saturating_sub(1),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_expanded(),
        KeyCode::Char('e') => {
            if let Some(form) = app.selected_model().map(FormState::edit) {
                app.form = Some(form);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(name) = app.selected_model().map(|m| m.name.clone()) {
                app.confirm_delete = Some(ConfirmDelete {
                    name,
                    return_to: None,
                });
            }
        }
        KeyCode::Char('a') => app.form = Some(FormState::add()),
        KeyCode::Char('r') => {
            app.refresh();
            app.show_toast("Reloaded");
        }
        _ => {}
    }
    HandleResult::Continue
}

/// Swap the selected model with its neighbour; the selection follows the model.
fn move_selected(app: &mut App, up: bool) {
    let Some(name) = app.selected_model().map(|m| m.name.clone()) else {
        return;
    };
    let index = app.selected;
    let result = if up {
        ops::move_up(&app.store, index)
    } else {
        ops::move_down(&app.store, index)
    };
    match result {
        Ok(_) => {
            app.refresh();
            app.select_name(&name);
        }
        Err(e) => app.show_error(&e),
    }
}
