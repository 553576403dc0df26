//! Track click handling - jump to position
//!
//! One-shot: a click on the bare track scrolls the content so the thumb
//! centers on the click. Clicks on the thumb never get here because the
//! thumb's pointer-down stops propagation.

use tracing::debug;

use crate::geometry::{track_click_to_content_offset, ContentGeometry, TrackGeometry};
use crate::surface::{ContentSurface, PointerEvent, ScrollBehavior};

/// Content offset a click at `click_y` should scroll to
///
/// Clamped to the content's scroll range. `None` when either surface is
/// unmeasured.
pub fn track_click_target(
    click_y: f64,
    track: &TrackGeometry,
    thumb_height: f64,
    content: &ContentGeometry,
) -> Option<f64> {
    if !content.is_measured() || !track.is_measured() {
        return None;
    }
    let raw = track_click_to_content_offset(
        click_y,
        track.top,
        track.client_height,
        thumb_height,
        content.scroll_height,
    )?;
    Some(content.clamp_scroll_top(raw))
}

/// Handle a click on the track by requesting a scroll of the content
///
/// Returns the requested offset, or `None` if the event was already claimed
/// by the thumb or the geometry is unusable.
pub fn handle_track_click<C: ContentSurface + ?Sized>(
    event: &PointerEvent,
    track: &TrackGeometry,
    thumb_height: f64,
    content: &mut C,
    behavior: ScrollBehavior,
) -> Option<f64> {
    if event.propagation_stopped() {
        return None;
    }
    let geometry = ContentGeometry::read(content);
    let target = track_click_target(event.client_y, track, thumb_height, &geometry)?;
    debug!(click_y = event.client_y, target, ?behavior, "Track click");
    content.scroll_to(target, behavior);
    Some(target)
}
