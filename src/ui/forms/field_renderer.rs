//! Field rendering utilities for forms

use crate::config::TuiConfig;
use crate::state::{Field, FieldKind, FormValues, CONTROL_HEIGHT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Placeholder shown by the country select before a choice is made
const SELECT_PLACEHOLDER: &str = "Select…";

/// Text a control shows for its current value
pub fn display_value(values: &FormValues, field: Field, config: &TuiConfig) -> String {
    match field.kind() {
        FieldKind::Checkbox => {
            let mark = if values.terms { "x" } else { " " };
            format!("[{mark}] {}", field.label())
        }
        FieldKind::Select => {
            let value = values.text(field);
            if value.is_empty() {
                format!("◂ {SELECT_PLACEHOLDER} ▸")
            } else {
                format!("◂ {value} ▸")
            }
        }
        FieldKind::Password if config.masks_passwords() => {
            let len = values.text(field).chars().count();
            config.mask_char().to_string().repeat(len)
        }
        _ => values.text(field).to_string(),
    }
}

/// Title drawn on the control's border
fn title(field: Field) -> &'static str {
    match field.kind() {
        FieldKind::Checkbox => "Terms *",
        _ => field.label(),
    }
}

/// Draw one form field: a bordered control with its inline error underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: Field,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active && field.accepts_text() {
        "▌"
    } else {
        ""
    };

    let control_area = Rect {
        height: area.height.min(CONTROL_HEIGHT),
        ..area
    };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));
    let block = Block::default()
        .title(format!(" {} ", title(field)))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(content.block(block), control_area);

    if let Some(message) = error {
        if area.height > CONTROL_HEIGHT {
            let error_area = Rect {
                x: area.x + 1,
                y: area.y + CONTROL_HEIGHT,
                width: area.width.saturating_sub(1),
                height: 1,
            };
            let line = Paragraph::new(Span::styled(
                message,
                Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
            ));
            frame.render_widget(line, error_area);
        }
    }
}
