//! Mouse event handling
//!
//! Translates crossterm mouse events into scrollbar pointer events. Rows are
//! reported at their pixel center; drag and release go to the document-level
//! listeners so a drag keeps tracking after the pointer leaves the column.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use railbar_core::{PointerEvent, StepDirection};

use crate::tui::app::App;
use crate::tui::components::thumb_rows;
use crate::tui::state::row_center_px;

/// Rows scrolled per wheel notch
const WHEEL_ROWS: i32 = 3;

impl App {
    /// Handle mouse events for wheel scrolling and the scrollbar overlay
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let client_y = row_center_px(mouse.row);
        self.last_pointer_y = client_y;

        match mouse.kind {
            MouseEventKind::ScrollDown => self.content.borrow_mut().scroll_rows(WHEEL_ROWS),
            MouseEventKind::ScrollUp => self.content.borrow_mut().scroll_rows(-WHEEL_ROWS),
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_left_down(mouse.column, mouse.row)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.dispatch_pointer(PointerEvent::moved(client_y))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.dispatch_pointer(PointerEvent::up(client_y))
            }
            _ => {}
        }
    }

    /// Terminal lost focus: the pointer has left the document
    pub fn handle_focus_lost(&mut self) {
        self.dispatch_pointer(PointerEvent::leave(self.last_pointer_y));
    }

    fn dispatch_pointer(&mut self, mut event: PointerEvent) {
        self.host.borrow_mut().dispatch_pointer(&mut event);
    }

    fn handle_left_down(&mut self, x: u16, y: u16) {
        let Some(handle) = self.scrollbar.as_ref() else {
            return;
        };
        if !handle.needs_scrollbar() {
            return;
        }

        if self.layout.hits_up_button(x, y) {
            handle.step(StepDirection::Up);
        } else if self.layout.hits_down_button(x, y) {
            handle.step(StepDirection::Down);
        } else if self.layout.hits_track(x, y) {
            let track = self.layout.track_area;
            let mut event = PointerEvent::down(row_center_px(y));

            // Hit test against the cells the thumb is drawn in
            let on_thumb = handle
                .thumb()
                .is_some_and(|thumb| thumb_rows(&thumb, track.height).contains(&(y - track.y)));
            if on_thumb {
                handle.thumb_pointer_down(&mut event);
            }

            // The event then reaches the track, which ignores it if the thumb stopped it
            handle.track_click(&event);
        }
    }
}
