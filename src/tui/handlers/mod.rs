//! Event handlers for the TUI: keyboard input routed to the open popup or the list.

mod confirm;
mod form;
mod list;

use crossterm::event::{KeyEvent, KeyEventKind};

use super::app::App;
use super::form::FormState;
use super::shortcuts::Shortcut;

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub fn handle_key(key: KeyEvent, app: &mut App) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    if let Some(shortcut) = Shortcut::match_key(&key) {
        match shortcut {
            Shortcut::Quit => return HandleResult::Break,
            Shortcut::AddModel => {
                if !app.has_popup() {
                    app.form = Some(FormState::add());
                }
            }
            Shortcut::Reload => {
                app.refresh();
                app.show_toast("Reloaded");
            }
        }
        return HandleResult::Continue;
    }

    // Delete confirmation (y/n) takes precedence over the form it may have come from
    if app.confirm_delete.is_some() {
        return confirm::handle_confirm_delete(key.code, app);
    }

    if app.form.is_some() {
        return form::handle_form(key.code, key.modifiers, app);
    }

    list::handle_list(key.code, key.modifiers, app)
}
