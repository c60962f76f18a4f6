//! Registration success dialog

use super::base::{render_dialog, DialogConfig};
use crate::state::Submission;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the confirmation shown after an accepted registration
pub fn render_success_dialog(frame: &mut Frame, submission: &Submission) {
    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to register another account"),
    ];

    let message = format!(
        "Welcome, {}!\nReference: {}\nSubmitted: {}",
        submission.full_name(),
        submission.reference(),
        submission
            .submitted_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M"),
    );

    render_dialog(
        frame,
        DialogConfig {
            title: "Form Submitted Successfully!",
            accent: Color::Green,
            message: &message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
