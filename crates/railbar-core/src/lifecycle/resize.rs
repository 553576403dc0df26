//! Content resize reaction
//!
//! The track height is captured when observation starts and reused for every
//! notification; only the content's extents are re-read.

use tracing::trace;

use crate::geometry::ContentGeometry;
use crate::thumb::compute_thumb_height;

/// Recomputes thumb length when the content box changes size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeWatcher {
    track_height: f64,
}

impl ResizeWatcher {
    /// Start observing with the track height measured right now
    pub fn observe(track_height: f64) -> Self {
        Self { track_height }
    }

    pub fn track_height(&self) -> f64 {
        self.track_height
    }

    /// New thumb length for the content's current extents
    pub fn thumb_height(&self, content: &ContentGeometry, min_thumb: f64) -> Option<f64> {
        let height = compute_thumb_height(
            content.client_height,
            content.scroll_height,
            self.track_height,
            min_thumb,
        );
        trace!(
            scroll_height = content.scroll_height,
            client_height = content.client_height,
            track_height = self.track_height,
            ?height,
            "Resize recompute"
        );
        height
    }
}
