//! Text content surface
//!
//! Owns the wrapped text and the authoritative scroll offset. Offset changes
//! and size changes are queued as pending notifications; the app loop flushes
//! them to the host once the current event has been handled.

use std::time::{Duration, Instant};

use railbar_core::{ContentSurface, ScrollBehavior};

use super::layout::{lines_to_px, px_to_row, row_to_px};

/// Duration of a smooth scroll
const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(180);

/// An in-flight smooth scroll
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollAnimation {
    from: f64,
    to: f64,
    started: Instant,
}

impl ScrollAnimation {
    /// Offset at `now` (ease-out cubic), and whether the animation is done
    fn sample(&self, now: Instant) -> (f64, bool) {
        let elapsed = now.saturating_duration_since(self.started);
        let t = (elapsed.as_secs_f64() / SMOOTH_SCROLL_DURATION.as_secs_f64()).min(1.0);
        let eased = 1.0 - (1.0 - t).powi(3);
        (self.from + (self.to - self.from) * eased, t >= 1.0)
    }
}

/// Scrollable, wrapped text
#[derive(Debug)]
pub struct TextContent {
    source: String,
    lines: Vec<String>,
    wrap_width: u16,
    viewport_rows: u16,
    scroll_top: f64,
    animation: Option<ScrollAnimation>,
    scroll_pending: bool,
    resize_pending: bool,
}

impl TextContent {
    pub fn new(source: String) -> Self {
        Self {
            source,
            lines: Vec::new(),
            wrap_width: 0,
            viewport_rows: 0,
            scroll_top: 0.0,
            animation: None,
            scroll_pending: false,
            resize_pending: false,
        }
    }

    /// Re-wrap for a new viewport size; queues a resize notification on change
    pub fn set_viewport(&mut self, width: u16, rows: u16) {
        let before = (self.scroll_height(), self.client_height());
        if width != self.wrap_width {
            self.wrap_width = width;
            self.lines = wrap_source(&self.source, width);
        }
        self.viewport_rows = rows;
        if before != (self.scroll_height(), self.client_height()) {
            self.resize_pending = true;
            // Shrinking the content can leave the offset past the end
            let clamped = self.clamp(self.scroll_top);
            self.apply(clamped);
        }
    }

    /// Wrapped lines visible at the current offset
    pub fn visible_lines(&self) -> &[String] {
        let first = px_to_row(self.scroll_top).min(self.lines.len());
        let last = (first + self.viewport_rows as usize).min(self.lines.len());
        &self.lines[first..last]
    }

    /// Index of the first visible line (0-based)
    pub fn first_visible_line(&self) -> usize {
        px_to_row(self.scroll_top)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Scroll by whole rows without animation (wheel and keyboard)
    pub fn scroll_rows(&mut self, rows: i32) {
        let delta = rows as f64 * row_to_px(1);
        self.scroll_by(delta, ScrollBehavior::Instant);
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Advance a smooth scroll; returns true while the offset is still moving
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };
        let (offset, done) = animation.sample(now);
        self.apply(offset);
        if done {
            self.animation = None;
        }
        true
    }

    /// Consume the queued scroll notification
    pub fn take_scroll_pending(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }

    /// Consume the queued resize notification
    pub fn take_resize_pending(&mut self) -> bool {
        std::mem::take(&mut self.resize_pending)
    }

    fn max_scroll_top(&self) -> f64 {
        (self.scroll_height() - self.client_height()).max(0.0)
    }

    fn clamp(&self, offset: f64) -> f64 {
        if offset.is_finite() {
            offset.clamp(0.0, self.max_scroll_top())
        } else {
            self.scroll_top
        }
    }

    fn apply(&mut self, offset: f64) {
        let offset = self.clamp(offset);
        if offset != self.scroll_top {
            self.scroll_top = offset;
            self.scroll_pending = true;
        }
    }
}

impl ContentSurface for TextContent {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn scroll_height(&self) -> f64 {
        lines_to_px(self.lines.len())
    }

    fn client_height(&self) -> f64 {
        row_to_px(self.viewport_rows)
    }

    fn set_scroll_top(&mut self, offset: f64) {
        self.animation = None;
        self.apply(offset);
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        let target = self.clamp(offset);
        match behavior {
            ScrollBehavior::Instant => self.set_scroll_top(target),
            ScrollBehavior::Smooth if target == self.scroll_top => self.animation = None,
            ScrollBehavior::Smooth => {
                self.animation = Some(ScrollAnimation {
                    from: self.scroll_top,
                    to: target,
                    started: Instant::now(),
                });
            }
        }
    }

    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior) {
        // Chain onto a running animation so repeated steps accumulate
        let base = self.animation.map(|a| a.to).unwrap_or(self.scroll_top);
        self.scroll_to(base + delta, behavior);
    }
}

/// Wrap each source line to `width` columns, keeping blank lines
fn wrap_source(source: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    source
        .lines()
        .flat_map(|line| {
            if line.trim().is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, width)
                    .into_iter()
                    .map(|part| part.into_owned())
                    .collect()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(lines: usize, rows: u16) -> TextContent {
        let source = (0..lines)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let mut content = TextContent::new(source);
        content.set_viewport(40, rows);
        content
    }

    #[test]
    fn test_extents_in_pixels() {
        let content = content(100, 20);
        assert_eq!(content.scroll_height(), 1600.0);
        assert_eq!(content.client_height(), 320.0);
        assert_eq!(content.visible_lines().len(), 20);
    }

    #[test]
    fn test_wrapping_counts_rows() {
        let mut content = TextContent::new("aaaa bbbb cccc\n\ndddd".to_string());
        content.set_viewport(4, 10);
        assert_eq!(content.line_count(), 5);
    }

    #[test]
    fn test_set_scroll_top_clamps_and_queues_notification() {
        let mut content = content(100, 20);
        content.take_scroll_pending();

        content.set_scroll_top(10_000.0);
        assert_eq!(content.scroll_top(), 1280.0);
        assert!(content.take_scroll_pending());
        assert!(!content.take_scroll_pending());

        content.set_scroll_top(1280.0);
        assert!(!content.take_scroll_pending());
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut content = content(100, 20);
        content.scroll_to(400.0, ScrollBehavior::Smooth);
        assert!(content.is_animating());
        assert_eq!(content.scroll_top(), 0.0);

        let later = Instant::now() + SMOOTH_SCROLL_DURATION * 2;
        assert!(content.tick(later));
        assert_eq!(content.scroll_top(), 400.0);
        assert!(!content.is_animating());
        assert!(!content.tick(later));
    }

    #[test]
    fn test_direct_write_cancels_animation() {
        let mut content = content(100, 20);
        content.scroll_to(400.0, ScrollBehavior::Smooth);
        content.set_scroll_top(32.0);
        assert!(!content.is_animating());
        assert_eq!(content.scroll_top(), 32.0);
    }

    #[test]
    fn test_steps_accumulate_during_animation() {
        let mut content = content(100, 20);
        content.scroll_by(200.0, ScrollBehavior::Smooth);
        content.scroll_by(200.0, ScrollBehavior::Smooth);
        content.tick(Instant::now() + SMOOTH_SCROLL_DURATION * 2);
        assert_eq!(content.scroll_top(), 400.0);
    }

    #[test]
    fn test_long_files_scroll_to_the_last_line() {
        let mut content = content(70_000, 20);
        assert_eq!(content.line_count(), 70_000);
        assert_eq!(content.scroll_height(), 70_000.0 * 16.0);

        content.set_scroll_top(f64::MAX);
        assert_eq!(content.first_visible_line(), 69_980);
        assert_eq!(
            content.visible_lines().last().map(String::as_str),
            Some("line 69999")
        );
    }

    #[test]
    fn test_resize_queues_notification_and_clamps() {
        let mut content = content(100, 20);
        content.take_resize_pending();
        content.set_scroll_top(1280.0);

        content.set_viewport(40, 50);
        assert!(content.take_resize_pending());
        assert_eq!(content.scroll_top(), 800.0);

        content.set_viewport(40, 50);
        assert!(!content.take_resize_pending());
    }
}
