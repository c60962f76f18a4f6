//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{
    AppState, Field, FormGrid, LogSubmissionHandler, RegistrationForm, SubmitOutcome,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Window in which a second Ctrl+C quits
const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(800);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User preferences
    pub config: TuiConfig,
    /// Receives accepted registrations
    pub submissions: LogSubmissionHandler,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        let mut state = AppState::default();
        if let Some(values) = config.prefill_values() {
            state.form = RegistrationForm::with_values(values);
        }
        Self {
            state,
            config,
            submissions: LogSubmissionHandler::default(),
            quit: false,
            terminal_size: None,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Ctrl+C twice quits from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c(Instant::now());
            return Ok(());
        }
        self.last_ctrl_c = None;

        // Success dialog is modal
        if self.state.has_dialog() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_dialog();
            }
            return Ok(());
        }

        let submit_modifier = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER);
        let active = self.state.active_field();

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Char('s') if submit_modifier => self.submit(),
            // Enter submits from any control, as in a web form
            KeyCode::Enter => self.submit(),
            KeyCode::Left if active == Some(Field::Country) => self.state.cycle_country(false),
            KeyCode::Right if active == Some(Field::Country) => self.state.cycle_country(true),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.status_message = None;
                self.state.form_input_char(c);
            }
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
        Ok(())
    }

    fn handle_ctrl_c(&mut self, now: Instant) {
        match self.last_ctrl_c {
            Some(prev) if now.duration_since(prev) <= DOUBLE_TAP_WINDOW => self.quit = true,
            _ => {
                self.last_ctrl_c = Some(now);
                self.state.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return Ok(());
        };

        if self.state.has_dialog() {
            self.state.dismiss_dialog();
            return Ok(());
        }

        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        let grid = FormGrid::for_terminal(Rect::new(0, 0, width, height));
        let Some(index) = grid.hit(mouse.column, mouse.row) else {
            return Ok(());
        };

        self.state.set_active_form_field(index);
        match self.state.active_field() {
            None => self.submit(),
            Some(Field::Terms) => self.state.toggle_terms(),
            Some(Field::Country) => self.state.cycle_country(true),
            Some(_) => {}
        }
        Ok(())
    }

    fn submit(&mut self) {
        if let SubmitOutcome::Accepted(submission) = self.state.submit_form(&mut self.submissions) {
            tracing::debug!(id = %submission.id, "showing confirmation");
        }
    }
}
