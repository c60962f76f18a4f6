//! Form grid geometry shared by rendering and mouse handling
//!
//! The form is laid out as a two-column grid of focus stops. Each cell holds a
//! bordered control plus one row for its inline error message.
//!
//! ```text
//! Row 0:       Outer border (" Create Account ")
//! Rows 1-20:   5 grid rows x 4 rows each
//!              First Name | Last Name
//!              Email      | Phone
//!              Country    | Date of Birth
//!              Password   | Confirm Password
//!              Terms      | [ Register ]
//! Height-2:    Outer border
//! Bottom:      Status bar (1 row)
//! ```

use super::forms::Field;
use ratatui::layout::Rect;

/// Height of one grid cell (control with borders + error line)
pub const FIELD_CELL_HEIGHT: u16 = 4;

/// Height of the bordered control inside a cell
pub const CONTROL_HEIGHT: u16 = 3;

pub const FORM_COLUMNS: u16 = 2;

/// Nine fields plus the Register button
pub const FOCUS_STOPS: usize = Field::COUNT + 1;

/// Focus index of the Register button
pub const SUBMIT_BUTTON_INDEX: usize = Field::COUNT;

/// Height of the status bar at the bottom of the screen
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Placement of the focus stops within the form block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormGrid {
    pub area: Rect,
}

impl FormGrid {
    /// Grid for a full terminal: inside the outer border, above the status bar
    pub fn for_terminal(screen: Rect) -> Self {
        Self {
            area: Rect {
                x: screen.x.saturating_add(1),
                y: screen.y.saturating_add(1),
                width: screen.width.saturating_sub(2),
                height: screen.height.saturating_sub(2 + STATUS_BAR_HEIGHT),
            },
        }
    }

    pub fn column_width(&self) -> u16 {
        self.area.width / FORM_COLUMNS
    }

    /// Area of the focus stop at `index`, clipped to the grid
    pub fn cell(&self, index: usize) -> Rect {
        let col = index as u16 % FORM_COLUMNS;
        let row = index as u16 / FORM_COLUMNS;
        let x = self.area.x + col * self.column_width();
        let y = self.area.y.saturating_add(row * FIELD_CELL_HEIGHT);
        let bottom = self.area.y.saturating_add(self.area.height);

        let height = FIELD_CELL_HEIGHT.min(bottom.saturating_sub(y));
        Rect {
            x,
            y,
            width: self.column_width(),
            height,
        }
    }

    /// Focus stop under a screen position, if any
    pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
        let inside_x = column >= self.area.x && column < self.area.x + self.area.width;
        let inside_y = row >= self.area.y && row < self.area.y.saturating_add(self.area.height);
        if !inside_x || !inside_y || self.column_width() == 0 {
            return None;
        }

        let col = ((column - self.area.x) / self.column_width()).min(FORM_COLUMNS - 1);
        let grid_row = (row - self.area.y) / FIELD_CELL_HEIGHT;
        let index = (grid_row * FORM_COLUMNS + col) as usize;
        (index < FOCUS_STOPS).then_some(index)
    }
}
