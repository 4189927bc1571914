//! Handler for the add/edit form popup.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::core::ops::{self, Placement};

use super::HandleResult;
use crate::tui::app::{App, ConfirmDelete};

pub(super) fn handle_form(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    app: &mut App,
) -> HandleResult {
    let Some(form) = app.form.as_mut() else {
        return HandleResult::Continue;
    };

    match key_code {
        KeyCode::Esc => {
            app.form = None;
        }
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Left => form.cycle(-1),
        KeyCode::Right => form.cycle(1),
        KeyCode::Char('d') if key_modifiers.contains(KeyModifiers::CONTROL) => {
            // Alternative submit target of the edit form: delete the record being edited
            if let Some(name) = form.original_name().map(str::to_string) {
                let return_to = app.form.take();
                app.confirm_delete = Some(ConfirmDelete { name, return_to });
            }
        }
        KeyCode::Char('u') if key_modifiers.contains(KeyModifiers::CONTROL) => form.clear_field(),
        KeyCode::Enter => submit(app),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) => {
            if key_modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                return HandleResult::Continue;
            }
            form.insert_char(c);
        }
        _ => {}
    }

    HandleResult::Continue
}

/// Coerce the form into a record and add-or-update it. Keeps the form open on error.
fn submit(app: &mut App) {
    let Some(form) = app.form.as_mut() else {
        return;
    };
    let record = match form.to_record() {
        Ok(r) => r,
        Err(e) => {
            form.error = Some(e);
            return;
        }
    };
    let name = record.name.clone();

    match ops::add_or_update(&app.store, record) {
        Ok(placement) => {
            app.form = None;
            app.refresh();
            app.select_name(&name);
            let verb = match placement {
                Placement::Replaced(_) => "updated",
                Placement::Appended(_) => "added",
            };
            app.show_toast(format!("Model '{}' {}", name, verb));
        }
        Err(e) => {
            log::error!("{}", e);
            form.error = Some(e.to_string());
        }
    }
}
