//! Content scroll → thumb projection
//!
//! The thumb never moves on its own: its top is re-derived from the content
//! scroll offset every time the content scrolls or the geometry changes.

use crate::geometry::{content_offset_to_track_offset, ContentGeometry, TrackGeometry};
use crate::thumb::ThumbState;

/// Project the current scroll offset onto the thumb
///
/// Returns the thumb with a fresh `top`, or `None` when the geometry is not
/// measured yet (the caller keeps its previous state).
pub fn sync_thumb(
    content: &ContentGeometry,
    track: &TrackGeometry,
    thumb: ThumbState,
) -> Option<ThumbState> {
    if !content.is_measured() || !track.is_measured() {
        return None;
    }
    let top = content_offset_to_track_offset(
        content.scroll_top,
        content.scroll_height,
        track.client_height,
        thumb.height,
    )?;
    // The ratio can land one ulp short of the end; pin the thumb there exactly
    let top = if content.scroll_top >= content.max_scroll_top() {
        (track.client_height - thumb.height).max(0.0)
    } else {
        top
    };
    Some(ThumbState { top, ..thumb })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thumb::compute_thumb_height;

    fn content(scroll_top: f64) -> ContentGeometry {
        ContentGeometry {
            scroll_top,
            scroll_height: 1000.0,
            client_height: 200.0,
        }
    }

    const TRACK: TrackGeometry = TrackGeometry {
        client_height: 300.0,
        top: 0.0,
    };

    const THUMB: ThumbState = ThumbState {
        height: 60.0,
        top: 0.0,
    };

    #[test]
    fn test_sync_projects_scroll_top() {
        let thumb = sync_thumb(&content(400.0), &TRACK, THUMB).unwrap();
        assert!((thumb.top - 120.0).abs() < 1e-9);
        assert_eq!(thumb.height, 60.0);
    }

    #[test]
    fn test_sync_is_idempotent() {
        let once = sync_thumb(&content(250.0), &TRACK, THUMB).unwrap();
        let twice = sync_thumb(&content(250.0), &TRACK, once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sync_at_max_scroll_touches_track_end() {
        let floored = ThumbState {
            height: 20.0,
            top: 0.0,
        };
        let geometry = ContentGeometry {
            scroll_top: 9990.0,
            scroll_height: 10000.0,
            client_height: 10.0,
        };
        let thumb = sync_thumb(&geometry, &TRACK, floored).unwrap();
        assert_eq!(thumb.top, TRACK.client_height - thumb.height);
    }

    #[test]
    fn test_sync_at_max_scroll_with_proportional_thumb() {
        for (scroll_height, client_height, track_height) in [
            (7.0, 1.0, 300.0),
            (7.0, 3.0, 300.0),
            (1234.0, 320.0, 336.0),
        ] {
            let track = TrackGeometry {
                client_height: track_height,
                top: 0.0,
            };
            let height =
                compute_thumb_height(client_height, scroll_height, track_height, 20.0).unwrap();
            let geometry = ContentGeometry {
                scroll_top: scroll_height - client_height,
                scroll_height,
                client_height,
            };
            let thumb = sync_thumb(&geometry, &track, ThumbState { height, top: 0.0 }).unwrap();
            assert_eq!(thumb.top, track_height - height);
        }
    }

    #[test]
    fn test_sync_without_overflow_keeps_thumb_at_top() {
        let geometry = ContentGeometry {
            scroll_top: 0.0,
            scroll_height: 150.0,
            client_height: 200.0,
        };
        let full = ThumbState {
            height: 300.0,
            top: 0.0,
        };
        assert_eq!(sync_thumb(&geometry, &TRACK, full).unwrap().top, 0.0);
    }

    #[test]
    fn test_sync_skips_unmeasured_geometry() {
        let geometry = ContentGeometry {
            scroll_top: 0.0,
            scroll_height: 0.0,
            client_height: 200.0,
        };
        assert_eq!(sync_thumb(&geometry, &TRACK, THUMB), None);

        let no_track = TrackGeometry {
            client_height: 0.0,
            top: 0.0,
        };
        assert_eq!(sync_thumb(&content(100.0), &no_track, THUMB), None);
    }
}
