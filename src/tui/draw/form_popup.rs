//! Add/edit form popup.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::core::avatars;

use super::super::constants::{ACCENT, LABEL_WIDTH};
use super::super::form::{FieldKey, FieldValue, FormState};
use super::super::shortcuts::labels;
use super::popup_area;

fn value_spans(key: FieldKey, value: &FieldValue, focused: bool) -> Vec<Span<'static>> {
    match value {
        FieldValue::Text(s) => {
            let mut spans = vec![Span::raw(s.clone())];
            if focused {
                spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
            } else if s.is_empty() && key == FieldKey::Name {
                spans.push(Span::styled("(required)", Style::default().fg(Color::DarkGray)));
            }
            spans
        }
        FieldValue::Flag(on) => {
            let mark = if *on { "[x]" } else { "[ ]" };
            vec![Span::styled(
                mark,
                Style::default().fg(if *on { ACCENT } else { Color::Gray }),
            )]
        }
        FieldValue::Icon(idx) => {
            let id = avatars::icons()
                .get(*idx)
                .map(String::as_str)
                .unwrap_or_default();
            vec![
                Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
                Span::raw(id.to_string()),
                Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("  {}", avatars::resolve(id)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]
        }
    }
}

pub(crate) fn draw_form_popup(f: &mut Frame, area: Rect, form: &FormState) {
    let popup_rect = popup_area(area, 80, 85);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(form.title());
    let inner = block.inner(popup_rect);
    f.render_widget(Clear, popup_rect);
    f.render_widget(block, popup_rect);

    let [fields_area, status_area, hint_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let lines: Vec<Line> = form
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let focused = i == form.focused;
            let label_style = if focused {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let pointer = if focused { "› " } else { "  " };
            let mut spans = vec![
                Span::styled(pointer, Style::default().fg(ACCENT)),
                Span::styled(
                    format!("{:<w$}", field.key.label(), w = LABEL_WIDTH),
                    label_style,
                ),
            ];
            spans.extend(value_spans(field.key, &field.value, focused));
            Line::from(spans)
        })
        .collect();

    // Scroll so the focused field stays visible.
    let height = fields_area.height as usize;
    let scroll = (form.focused + 1).saturating_sub(height);
    f.render_widget(
        Paragraph::new(lines).scroll((scroll as u16, 0)),
        fields_area,
    );

    let status = match &form.error {
        Some(err) => Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None => focus_help(form),
    };
    f.render_widget(Paragraph::new(status), status_area);
    f.render_widget(
        Paragraph::new(labels::form_hint(form.original_name().is_some())),
        hint_area,
    );
}

/// One-line help for the focused input.
fn focus_help(form: &FormState) -> Line<'static> {
    let text = match (&form.focused_field().value, form.focused_field().key) {
        (FieldValue::Icon(_), _) => "←/→ or Space to pick an icon",
        (FieldValue::Flag(_), _) => "Space to toggle",
        (_, FieldKey::DefaultConfig) => "JSON object, e.g. {\"temperature\": 0.7}",
        (_, FieldKey::Name) => "Existing name: the record is replaced in place",
        _ => "",
    };
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}
