//! Status bar component - bottom bar with file name, position and drag state

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Position summary shown on the right of the status bar
pub struct StatusPosition {
    pub first_line: usize,
    pub line_count: usize,
    pub dragging: bool,
}

/// Render the status bar at the bottom of the screen
pub fn render_status_bar(f: &mut Frame, area: Rect, title: &str, position: &StatusPosition) {
    let bg = Paragraph::new("").style(Style::default().bg(Color::DarkGray));
    f.render_widget(bg, area);

    let right = position_text(position);
    let right_width = right.width() as u16 + 1;

    let [left_area, right_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .areas(area);

    let title = truncate_to_width(title, left_area.width.saturating_sub(1) as usize);
    let left = Line::from(vec![
        Span::raw(" "),
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
    ]);
    f.render_widget(
        Paragraph::new(left).style(Style::default().bg(Color::DarkGray)),
        left_area,
    );

    let mut spans = Vec::new();
    if position.dragging {
        spans.push(Span::styled("drag ", Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::raw(position_counts(position)));
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray)),
        right_area,
    );
}

fn position_counts(position: &StatusPosition) -> String {
    if position.line_count == 0 {
        return "empty ".to_string();
    }
    format!(
        "{}/{} ",
        (position.first_line + 1).min(position.line_count),
        position.line_count
    )
}

fn position_text(position: &StatusPosition) -> String {
    let counts = position_counts(position);
    if position.dragging {
        format!("drag {counts}")
    } else {
        counts
    }
}

/// Truncate to a display width, marking the cut with an ellipsis
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("notes.md", 20), "notes.md");
        assert_eq!(truncate_to_width("a-very-long-name.txt", 8), "a-very-…");
        assert_eq!(truncate_to_width("日本語.txt", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_position_text() {
        let position = StatusPosition {
            first_line: 9,
            line_count: 120,
            dragging: false,
        };
        assert_eq!(position_text(&position), "10/120 ");

        let dragging = StatusPosition {
            dragging: true,
            ..position
        };
        assert_eq!(position_text(&dragging), "drag 10/120 ");

        let empty = StatusPosition {
            first_line: 0,
            line_count: 0,
            dragging: false,
        };
        assert_eq!(position_text(&empty), "empty ");
    }
}
