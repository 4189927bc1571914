//! Handler for the delete confirmation popup.

use crossterm::event::KeyCode;

use crate::core::ops;

use super::HandleResult;
use crate::tui::app::App;

pub(super) fn handle_confirm_delete(key_code: KeyCode, app: &mut App) -> HandleResult {
    let confirmed = matches!(key_code, KeyCode::Char('y') | KeyCode::Char('Y'));
    let cancelled = matches!(
        key_code,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc
    );
    if !confirmed && !cancelled {
        return HandleResult::Continue;
    }
    let Some(popup) = app.confirm_delete.take() else {
        return HandleResult::Continue;
    };

    if cancelled {
        app.form = popup.return_to;
        return HandleResult::Continue;
    }

    match ops::delete(&app.store, &popup.name) {
        Ok(removed) => {
            app.refresh();
            if removed == 0 {
                app.show_toast(format!("Model '{}' was already gone", popup.name));
            } else {
                app.show_toast(format!("Model '{}' deleted", popup.name));
            }
        }
        Err(e) => {
            app.show_error(&e);
            app.form = popup.return_to;
        }
    }
    HandleResult::Continue
}
