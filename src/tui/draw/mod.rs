//! TUI rendering: header, model list, bottom bar, popups.

mod form_popup;
mod header;
mod list;
mod popups;

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

use super::app::App;
use super::constants::{BOTTOM_BAR_LINES, HEADER_LINES};
use super::shortcuts::labels;

/// Centered rect taking the given percentage of `area`.
pub(super) fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let vertical_areas = vertical.split(area);
    let horizontal_areas = horizontal.split(vertical_areas[0]);
    horizontal_areas[0]
}

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_LINES),
            Constraint::Min(3),
            Constraint::Length(BOTTOM_BAR_LINES),
        ])
        .split(area);

    header::draw_header(f, app, chunks[0]);
    list::draw_list(f, app, chunks[1]);

    let toast_visible = app.toast.as_ref().is_some_and(|t| t.until > Instant::now());
    if toast_visible {
        popups::draw_toast(f, app, chunks[2]);
    } else {
        app.toast = None;
        f.render_widget(ratatui::widgets::Paragraph::new(labels::bottom_bar()), chunks[2]);
    }

    if let Some(ref form) = app.form {
        form_popup::draw_form_popup(f, area, form);
    }
    if let Some(ref popup) = app.confirm_delete {
        popups::draw_confirm_delete_popup(f, area, &popup.name);
    }
}
