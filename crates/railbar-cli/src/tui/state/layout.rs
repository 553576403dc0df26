//! Layout State - Cached layout areas and row/pixel conversion
//!
//! The engine works in pixels. Each terminal row is `ROW_PX` pixels tall, so
//! pointer rows, content lines and track cells all share one coordinate space.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use railbar_core::TrackSurface;

/// Pixel height of one terminal row
pub const ROW_PX: f64 = 16.0;

/// Top edge of a row in pixels
pub fn row_to_px(row: u16) -> f64 {
    row as f64 * ROW_PX
}

/// Vertical center of a row, used as the pointer position for mouse events
pub fn row_center_px(row: u16) -> f64 {
    row_to_px(row) + ROW_PX / 2.0
}

/// Pixel extent of a run of content lines
pub fn lines_to_px(lines: usize) -> f64 {
    lines as f64 * ROW_PX
}

/// Line or row containing a pixel offset
pub fn px_to_row(px: f64) -> usize {
    (px / ROW_PX).floor().max(0.0) as usize
}

/// The scrollbar track as seen by the engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackArea {
    pub rect: Rect,
}

impl TrackSurface for TrackArea {
    fn client_height(&self) -> f64 {
        row_to_px(self.rect.height)
    }

    fn bounding_top(&self) -> f64 {
        row_to_px(self.rect.y)
    }
}

/// Cached layout areas for hit testing and rendering
///
/// Recomputed from the terminal size before each frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LayoutState {
    /// Text viewport
    pub content_area: Rect,
    /// Step-up button cell
    pub up_button: Rect,
    /// Track between the step buttons
    pub track_area: Rect,
    /// Step-down button cell
    pub down_button: Rect,
    /// Bottom status line
    pub status_area: Rect,
}

impl LayoutState {
    /// Split the terminal into viewport, scrollbar column and status line
    pub fn compute(area: Rect) -> Self {
        let [body, status_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .areas(area);
        let [content_area, scrollbar] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .areas(body);
        let [up_button, track_area, down_button] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(scrollbar);

        Self {
            content_area,
            up_button,
            track_area,
            down_button,
            status_area,
        }
    }

    /// Both surfaces have a usable size
    pub fn is_measured(&self) -> bool {
        self.content_area.height > 0 && self.track_area.height > 0
    }

    pub fn hits_up_button(&self, x: u16, y: u16) -> bool {
        self.up_button.contains(Position::new(x, y))
    }

    pub fn hits_down_button(&self, x: u16, y: u16) -> bool {
        self.down_button.contains(Position::new(x, y))
    }

    pub fn hits_track(&self, x: u16, y: u16) -> bool {
        self.track_area.contains(Position::new(x, y))
    }
}
