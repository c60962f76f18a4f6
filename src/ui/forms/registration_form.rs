//! Registration form rendering

use super::field_renderer::{display_value, draw_field};
use crate::app::App;
use crate::state::{Field, FormGrid, SUBMIT_BUTTON_INDEX};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the registration form over the whole screen (minus the status bar)
pub fn draw_registration(frame: &mut Frame, app: &App) {
    let screen = frame.area();
    let form_area = Rect {
        height: screen.height.saturating_sub(1),
        ..screen
    };

    let block = Block::default()
        .title(" Create Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, form_area);

    let grid = FormGrid::for_terminal(screen);
    let form = &app.state.form;

    for field in Field::ALL {
        let cell = grid.cell(field.index());
        if cell.height == 0 {
            continue;
        }
        let value = display_value(form.values(), field, &app.config);
        draw_field(
            frame,
            cell,
            field,
            &value,
            app.state.active_form_field == field.index(),
            form.error(field),
        );
    }

    let button_cell = grid.cell(SUBMIT_BUTTON_INDEX);
    if button_cell.height > 0 {
        let button_area = Rect {
            height: button_cell.height.min(BUTTON_HEIGHT),
            ..button_cell
        };
        render_button(
            frame,
            button_area,
            "Register",
            app.state.is_submit_focused(),
            Color::Green,
        );
    }
}
