//! Layout components (status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Quit hint drawn on the right edge of the status bar
const QUIT_HINT: &str = " Esc:quit ";

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    } else if app.config.shows_help() {
        spans.push(Span::styled(get_hints(app), Style::default().fg(Color::Gray)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_width = QUIT_HINT.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_width),
        y: status_area.y,
        width: quit_width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(QUIT_HINT).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused control
fn get_hints(app: &App) -> String {
    use crate::state::FieldKind;

    let control_hint = match app.state.active_field().map(|f| f.kind()) {
        Some(FieldKind::Select) => "←→/Space:choose  ",
        Some(FieldKind::Checkbox) => "Space:toggle  ",
        None => "",
        Some(_) => "type to edit  ",
    };
    format!("{control_hint}Tab:next  Enter/{SUBMIT_SHORTCUT}:register")
}
