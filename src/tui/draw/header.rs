//! Header: title, document path, and load error or purpose hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::app::{TITLE, VERSION};

use super::super::app::App;
use super::super::constants::{ACCENT, ACCENT_SECONDARY};

/// Third header line: decode error, purpose hints, or the caption.
fn status_line(app: &App) -> Line<'static> {
    if let Some(ref err) = app.load_error {
        return Line::from(Span::styled(
            format!("⚠ {} (showing an empty list; the next save overwrites it)", err),
            Style::default().fg(Color::Red),
        ));
    }
    if !app.missing_purposes.is_empty() {
        let keys: Vec<_> = app.missing_purposes.iter().map(|p| p.key()).collect();
        return Line::from(Span::styled(
            format!("Hint: no model has {} enabled", keys.join(", ")),
            Style::default().fg(Color::Yellow),
        ));
    }
    Line::from(Span::styled(
        "Model list manager for One-API / FastGPT config.json",
        Style::default().fg(Color::DarkGray),
    ))
}

pub(crate) fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("◆ ", Style::default().fg(ACCENT)),
            Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" v{}", VERSION), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("  {} model(s)", app.models.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            app.store.path().display().to_string(),
            Style::default().fg(ACCENT_SECONDARY),
        )),
        status_line(app),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
