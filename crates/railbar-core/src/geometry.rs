//! Content-space ↔ track-space conversion
//!
//! Pure functions, no state. Content-space is measured in content pixels
//! (scroll offsets), track-space in track pixels (thumb offsets). Inputs that
//! would divide by zero or produce NaN map to `None`.

use crate::surface::{ContentSurface, TrackSurface};

/// Snapshot of the content surface's scroll geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentGeometry {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ContentGeometry {
    /// Read current geometry from the content surface
    pub fn read<C: ContentSurface + ?Sized>(content: &C) -> Self {
        Self {
            scroll_top: content.scroll_top(),
            scroll_height: content.scroll_height(),
            client_height: content.client_height(),
        }
    }

    /// True once the surface has been laid out with non-zero extents
    pub fn is_measured(&self) -> bool {
        is_positive(self.scroll_height) && is_positive(self.client_height)
    }

    /// Largest valid scroll offset
    pub fn max_scroll_top(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// Clamp an offset into `[0, max_scroll_top]`
    pub fn clamp_scroll_top(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scroll_top())
    }

    /// Content is taller than the viewport
    pub fn overflows(&self) -> bool {
        self.is_measured() && self.scroll_height > self.client_height
    }
}

/// Snapshot of the track's geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub client_height: f64,
    /// Top edge in pointer coordinates
    pub top: f64,
}

impl TrackGeometry {
    pub fn read<T: TrackSurface + ?Sized>(track: &T) -> Self {
        Self {
            client_height: track.client_height(),
            top: track.bounding_top(),
        }
    }

    pub fn is_measured(&self) -> bool {
        is_positive(self.client_height) && self.top.is_finite()
    }
}

#[inline]
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Project a content scroll offset onto the track
///
/// `(scroll_top / scroll_height) * track_height`, clamped so the thumb stays
/// inside the track: `[0, track_height - thumb_height]`.
pub fn content_offset_to_track_offset(
    scroll_top: f64,
    scroll_height: f64,
    track_height: f64,
    thumb_height: f64,
) -> Option<f64> {
    if !is_positive(scroll_height) || !is_positive(track_height) || !scroll_top.is_finite() {
        return None;
    }
    let max_top = (track_height - thumb_height).max(0.0);
    let top = (scroll_top / scroll_height) * track_height;
    Some(top.clamp(0.0, max_top))
}

/// Map a click on the track to the content offset that centers the thumb on it
///
/// `floor(((click_y - track_top) - thumb_height / 2) / track_height * scroll_height)`.
/// The result is not clamped; callers clamp against the content's scroll range.
pub fn track_click_to_content_offset(
    click_y: f64,
    track_top: f64,
    track_height: f64,
    thumb_height: f64,
    scroll_height: f64,
) -> Option<f64> {
    if !is_positive(track_height) || !is_positive(scroll_height) {
        return None;
    }
    let local_y = (click_y - track_top) - thumb_height / 2.0;
    let offset = (local_y / track_height * scroll_height).floor();
    offset.is_finite().then_some(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_content_to_track_projection() {
        let top = content_offset_to_track_offset(400.0, 1000.0, 300.0, 60.0).unwrap();
        assert!(approx(top, 120.0), "got {top}");
    }

    #[test]
    fn test_content_to_track_clamps_to_track_end() {
        // Floored thumb: raw projection would overrun the track
        let top = content_offset_to_track_offset(9990.0, 10000.0, 300.0, 20.0).unwrap();
        assert_eq!(top, 280.0);
    }

    #[test]
    fn test_content_to_track_clamps_negative_offsets() {
        let top = content_offset_to_track_offset(-50.0, 1000.0, 300.0, 60.0).unwrap();
        assert_eq!(top, 0.0);
    }

    #[test]
    fn test_content_to_track_oversized_thumb() {
        // Thumb longer than track leaves no travel, never a negative bound
        let top = content_offset_to_track_offset(10.0, 100.0, 50.0, 80.0).unwrap();
        assert_eq!(top, 0.0);
    }

    #[test]
    fn test_content_to_track_degenerate() {
        assert_eq!(content_offset_to_track_offset(10.0, 0.0, 300.0, 20.0), None);
        assert_eq!(content_offset_to_track_offset(10.0, 1000.0, 0.0, 20.0), None);
        assert_eq!(content_offset_to_track_offset(f64::NAN, 1000.0, 300.0, 20.0), None);
    }

    #[test]
    fn test_track_click_centers_thumb() {
        let offset = track_click_to_content_offset(150.0, 0.0, 300.0, 20.0, 1000.0).unwrap();
        assert_eq!(offset, 466.0);
    }

    #[test]
    fn test_track_click_respects_track_top() {
        let offset = track_click_to_content_offset(250.0, 100.0, 300.0, 20.0, 1000.0).unwrap();
        assert_eq!(offset, 466.0);
    }

    #[test]
    fn test_track_click_near_top_goes_negative() {
        let offset = track_click_to_content_offset(2.0, 0.0, 300.0, 20.0, 1000.0).unwrap();
        assert!(offset < 0.0);
    }

    #[test]
    fn test_track_click_degenerate() {
        assert_eq!(track_click_to_content_offset(10.0, 0.0, 0.0, 20.0, 1000.0), None);
        assert_eq!(track_click_to_content_offset(10.0, 0.0, 300.0, 20.0, 0.0), None);
    }

    #[test]
    fn test_content_geometry_bounds() {
        let geometry = ContentGeometry {
            scroll_top: 0.0,
            scroll_height: 1000.0,
            client_height: 200.0,
        };
        assert!(geometry.is_measured());
        assert!(geometry.overflows());
        assert_eq!(geometry.max_scroll_top(), 800.0);
        assert_eq!(geometry.clamp_scroll_top(900.0), 800.0);
        assert_eq!(geometry.clamp_scroll_top(-1.0), 0.0);

        let short = ContentGeometry {
            scroll_top: 0.0,
            scroll_height: 100.0,
            client_height: 200.0,
        };
        assert!(!short.overflows());
        assert_eq!(short.max_scroll_top(), 0.0);

        let unmeasured = ContentGeometry {
            scroll_top: 0.0,
            scroll_height: 0.0,
            client_height: 0.0,
        };
        assert!(!unmeasured.is_measured());
        assert!(!unmeasured.overflows());
    }
}
