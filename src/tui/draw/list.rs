//! Model list: one collapsible entry per record, expanded entries show a
//! two-column label/value table.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::purpose;
use crate::core::record::ModelRecord;

use super::super::app::App;
use super::super::constants::{ACCENT, ACCENT_SECONDARY, LABEL_WIDTH};

/// Fit `value` on one line of `width` columns, with an ellipsis when cut.
fn truncate(value: &str, width: usize) -> String {
    let flat = value.replace('\n', " ");
    let flat = flat.trim_end();
    let width = width.max(1);
    match textwrap::wrap(flat, width).first() {
        Some(first) if first.len() < flat.len() => format!("{}…", first.trim_end()),
        Some(first) => first.to_string(),
        None => String::new(),
    }
}

fn row_spans(label: &str, value: &str, value_width: usize) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!("{:<w$}", label, w = LABEL_WIDTH),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!(
            "{:<w$}",
            truncate(value, value_width),
            w = value_width
        )),
    ]
}

/// Detail table: rows split in half, left half in the first column.
fn detail_lines(model: &ModelRecord, width: usize) -> Vec<Line<'static>> {
    let rows = model.display_rows();
    let half = rows.len().div_ceil(2);
    let (left, right) = rows.split_at(half);
    // 4 columns of indent, 2 between the two halves.
    let column = width.saturating_sub(6) / 2;
    let value_width = column.saturating_sub(LABEL_WIDTH).max(8);

    left.iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let mut spans = vec![Span::raw("    ")];
            spans.extend(row_spans(label, value, value_width));
            if let Some((label, value)) = right.get(i) {
                spans.push(Span::raw("  "));
                spans.extend(row_spans(label, value, value_width));
            }
            Line::from(spans)
        })
        .collect()
}

fn entry_line(model: &ModelRecord, selected: bool, expanded: bool) -> Line<'static> {
    let marker = if expanded { "▾ " } else { "▸ " };
    let name_style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(ACCENT_SECONDARY)),
        Span::styled(model.name.clone(), name_style),
        Span::styled(
            format!(" ({})", model.model),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("  {}", purpose::summary(model)),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

pub(crate) fn draw_list(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Models ");
    let inner = block.inner(area);

    if app.models.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No models available. Press a to add one.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let mut lines = Vec::new();
    let mut selected_span = (0, 0);
    for (i, model) in app.models.iter().enumerate() {
        let start = lines.len();
        let expanded = app.expanded.contains(&model.name);
        lines.push(entry_line(model, i == app.selected, expanded));
        if expanded {
            lines.extend(detail_lines(model, inner.width as usize));
        }
        if i == app.selected {
            selected_span = (start, lines.len());
        }
    }

    // Keep the whole selected entry in view, its first line first.
    let height = inner.height as usize;
    let (start, end) = selected_span;
    if end > app.list_scroll + height {
        app.list_scroll = end.saturating_sub(height);
    }
    if start < app.list_scroll || end - start > height {
        app.list_scroll = start;
    }
    app.list_scroll = app.list_scroll.min(lines.len().saturating_sub(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.list_scroll.min(u16::MAX as usize) as u16, 0));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_values() {
        assert_eq!(truncate("gpt-4", 20), "gpt-4");
    }

    #[test]
    fn truncate_ignores_trailing_whitespace() {
        assert_eq!(truncate("abc ", 20), "abc");
        assert_eq!(truncate("abc\n", 20), "abc");
    }

    #[test]
    fn truncate_cuts_long_values() {
        let out = truncate("You are a helpful assistant that answers briefly", 12);
        assert!(out.ends_with('…'));
        assert!(out.chars().count() <= 13);
    }

    #[test]
    fn detail_table_has_two_columns() {
        let lines = detail_lines(&ModelRecord::default(), 120);
        assert_eq!(lines.len(), 11);
    }
}
