//! Popups: delete confirmation, status toast.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::super::app::App;
use super::super::constants::ACCENT;
use super::popup_area;

pub(crate) fn draw_confirm_delete_popup(f: &mut Frame, area: Rect, name: &str) {
    let popup_rect = popup_area(area, 60, 25);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Confirm delete ");

    let text = vec![
        Line::from(""),
        Line::from("Delete this model?"),
        Line::from(Span::styled(
            name.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y ", Style::default().fg(Color::Red)),
            Span::raw("delete  "),
            Span::styled("n/Esc ", Style::default().fg(Color::DarkGray)),
            Span::raw("cancel"),
        ]),
    ];
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    f.render_widget(Clear, popup_rect);
    f.render_widget(paragraph, popup_rect);
}

/// Status toast in place of the bottom bar.
pub(crate) fn draw_toast(f: &mut Frame, app: &App, area: Rect) {
    let Some(ref toast) = app.toast else {
        return;
    };
    let style = if toast.is_error {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT)
    };
    let icon = if toast.is_error { "✗ " } else { "✓ " };
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(icon, style),
            Span::styled(toast.message.clone(), style),
        ])),
        area,
    );
}
