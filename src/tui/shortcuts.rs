//! Centralized keyboard shortcuts.
//!
//! Complete reference:
//!
//! | Action          | Keys                         |
//! |-----------------|------------------------------|
//! | Select          | ↑ ↓ (k j), Home, End         |
//! | Expand/collapse | Enter, Space                 |
//! | Move up / down  | Shift+↑ / Shift+↓ (K / J)    |
//! | Edit            | e                            |
//! | Delete          | d, Delete                    |
//! | Add model       | a, Ctrl+N                    |
//! | Reload          | r, Ctrl+R                    |
//! | Quit            | q, Ctrl+C                    |
//!
//! Inside a form: Tab/↓ next field, Shift+Tab/↑ previous, Space toggles,
//! ←/→ pick an icon, Enter saves, Ctrl+D deletes (edit form), Esc cancels.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected global shortcut (works with or without a popup open).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Quit (Ctrl+C)
    Quit,
    /// Open the add form (Ctrl+N)
    AddModel,
    /// Reload the document (Ctrl+R)
    Reload,
}

impl Shortcut {
    /// Returns the shortcut if the key matches.
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press || !key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }
        match key.code {
            KeyCode::Char('c') => Some(Shortcut::Quit),
            KeyCode::Char('n') => Some(Shortcut::AddModel),
            KeyCode::Char('r') => Some(Shortcut::Reload),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Shortcut;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn match_quit_ctrl_c() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Shortcut::Quit)
        );
    }

    #[test]
    fn match_add_ctrl_n() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(Shortcut::AddModel)
        );
    }

    #[test]
    fn match_reload_ctrl_r() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Some(Shortcut::Reload)
        );
    }

    #[test]
    fn plain_letters_are_not_shortcuts() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('n'), KeyModifiers::empty())),
            None
        );
    }

    #[test]
    fn match_key_release_ignored() {
        let key_release = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        assert_eq!(Shortcut::match_key(&key_release), None);
    }
}

/// Labels for the bottom bar (2 lines for readability on narrow terminals).
pub mod labels {
    use ratatui::style::Color;
    use ratatui::text::{Line, Span, Text};

    const DIM: Color = Color::DarkGray;

    pub fn bottom_bar() -> Text<'static> {
        Text::from(vec![
            Line::from(vec![
                Span::styled("↑↓ ", DIM),
                Span::raw("select"),
                Span::styled("  Enter ", DIM),
                Span::raw("expand"),
                Span::styled("  Shift+↑↓ ", DIM),
                Span::raw("move"),
                Span::styled("  e ", DIM),
                Span::raw("edit"),
                Span::styled("  d ", DIM),
                Span::raw("delete"),
            ]),
            Line::from(vec![
                Span::styled("a ", DIM),
                Span::raw("add"),
                Span::styled("  r ", DIM),
                Span::raw("reload"),
                Span::styled("  q ", DIM),
                Span::raw("quit"),
            ]),
        ])
    }

    pub fn form_hint(is_edit: bool) -> Line<'static> {
        let mut spans = vec![
            Span::styled("Tab ", DIM),
            Span::raw("next  "),
            Span::styled("Shift+Tab ", DIM),
            Span::raw("prev  "),
            Span::styled("Space ", DIM),
            Span::raw("toggle  "),
            Span::styled("Enter ", DIM),
            Span::raw("save  "),
        ];
        if is_edit {
            spans.push(Span::styled("Ctrl+D ", DIM));
            spans.push(Span::raw("delete  "));
        }
        spans.push(Span::styled("Esc ", DIM));
        spans.push(Span::raw("cancel"));
        Line::from(spans)
    }
}
