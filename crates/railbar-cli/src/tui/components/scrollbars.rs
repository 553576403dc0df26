//! Scrollbar rendering
//!
//! Draws the overlay from engine state: 1-char wide track with the thumb
//! inside, plus step buttons above and below.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};
use railbar_core::ThumbState;

use crate::tui::state::{px_to_row, ROW_PX};

/// Colors for the scrollbar overlay
#[derive(Debug, Clone, Copy)]
pub struct ScrollbarColors {
    pub thumb: Color,
    pub dragging_thumb: Color,
    pub track: Color,
    pub button: Color,
}

impl Default for ScrollbarColors {
    fn default() -> Self {
        Self {
            thumb: Color::Gray,
            dragging_thumb: Color::White,
            track: Color::DarkGray,
            button: Color::Gray,
        }
    }
}

/// Track rows covered by the thumb, relative to the track top
///
/// Always at least one row so a thumb never disappears between cells.
pub fn thumb_rows(thumb: &ThumbState, track_rows: u16) -> std::ops::Range<u16> {
    if track_rows == 0 {
        return 0..0;
    }
    let start = px_to_row(thumb.top).min(track_rows as usize - 1) as u16;
    let end = ((thumb.bottom() / ROW_PX).ceil().max(0.0) as u16)
        .min(track_rows)
        .max(start + 1);
    start..end
}

fn set_cell(buf: &mut Buffer, x: u16, y: u16, ch: char, color: Color) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(ch).set_fg(color);
    }
}

/// Render the track, thumb and step buttons
///
/// `thumb` is `None` when the content does not overflow; the column is then
/// cleared instead of showing a thumb that fills the track.
pub fn render_scrollbar(
    buf: &mut Buffer,
    up_button: Rect,
    track: Rect,
    down_button: Rect,
    thumb: Option<ThumbState>,
    dragging: bool,
    colors: ScrollbarColors,
) {
    // Always clear the column first so no stale glyphs survive a hidden thumb
    for area in [up_button, track, down_button] {
        for y in area.y..area.y + area.height {
            if let Some(cell) = buf.cell_mut((area.x, y)) {
                cell.set_char(' ');
                cell.set_fg(Color::Reset);
            }
        }
    }

    let Some(thumb) = thumb else {
        return;
    };

    if up_button.height > 0 {
        set_cell(buf, up_button.x, up_button.y, '▲', colors.button);
    }
    if down_button.height > 0 {
        set_cell(buf, down_button.x, down_button.y, '▼', colors.button);
    }

    let rows = thumb_rows(&thumb, track.height);
    let thumb_color = if dragging {
        colors.dragging_thumb
    } else {
        colors.thumb
    };
    for row in 0..track.height {
        let (ch, color) = if rows.contains(&row) {
            ('█', thumb_color)
        } else {
            ('░', colors.track)
        };
        set_cell(buf, track.x, track.y + row, ch, color);
    }
}
