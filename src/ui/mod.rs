//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    forms::draw_registration(frame, app);

    layout::draw_status_bar(frame, app);

    // Success dialog overlays everything else
    if let Some(submission) = &app.state.last_submission {
        components::render_success_dialog(frame, submission);
    }
}
