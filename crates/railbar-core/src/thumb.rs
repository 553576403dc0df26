//! Thumb sizing
//!
//! The thumb's length represents the visible fraction of the content.

use crate::geometry::is_positive;

/// Thumb geometry in track pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbState {
    pub height: f64,
    pub top: f64,
}

impl ThumbState {
    /// Initial state before anything has been measured
    pub fn initial(min_thumb: f64) -> Self {
        Self {
            height: min_thumb,
            top: 0.0,
        }
    }

    /// Bottom edge of the thumb
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether a track-relative y falls on the thumb
    pub fn contains(&self, local_y: f64) -> bool {
        local_y >= self.top && local_y < self.bottom()
    }

    /// Thumb fills the whole track, i.e. there is nothing to scroll
    pub fn is_scrollable(&self, track_height: f64) -> bool {
        self.height < track_height
    }
}

/// Thumb length for the given extents
///
/// `max((client_height / scroll_height) * track_height, min_thumb)`, capped at
/// `track_height` so content shorter than its viewport never yields a thumb
/// longer than the track.
pub fn compute_thumb_height(
    client_height: f64,
    scroll_height: f64,
    track_height: f64,
    min_thumb: f64,
) -> Option<f64> {
    if !is_positive(client_height) || !is_positive(scroll_height) || !is_positive(track_height)
    {
        return None;
    }
    let proportional = (client_height / scroll_height) * track_height;
    Some(proportional.max(min_thumb).min(track_height))
}
