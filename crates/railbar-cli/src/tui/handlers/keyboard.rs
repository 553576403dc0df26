//! Keyboard handling
//!
//! Keys scroll the content directly; the overlay follows through the
//! content's scroll notification like any other native scroll.

use crossterm::event::{KeyCode, KeyModifiers};
use railbar_core::ContentSurface;

use crate::tui::app::App;

impl App {
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let page = self.layout.content_area.height.saturating_sub(1).max(1) as i32;
        let mut content = self.content.borrow_mut();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Up | KeyCode::Char('k') => content.scroll_rows(-1),
            KeyCode::Down | KeyCode::Char('j') => content.scroll_rows(1),
            KeyCode::PageUp => content.scroll_rows(-page),
            KeyCode::PageDown | KeyCode::Char(' ') => content.scroll_rows(page),
            KeyCode::Home | KeyCode::Char('g') => content.set_scroll_top(0.0),
            KeyCode::End | KeyCode::Char('G') => {
                let end = content.scroll_height() - content.client_height();
                content.set_scroll_top(end);
            }
            _ => {}
        }
    }
}
