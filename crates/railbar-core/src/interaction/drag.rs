//! Thumb drag state machine
//!
//! Idle → Dragging on pointer-down on the thumb, Dragging → Idle on pointer-up
//! or pointer-leave anywhere in the document.

use tracing::debug;

use crate::geometry::{is_positive, ContentGeometry};
use crate::surface::{ContentSurface, PointerEvent};

/// Drag state captured at pointer-down for relative dragging
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer y where the drag started
    pub start_pointer_y: f64,
    /// Content scroll offset when the drag started
    pub start_scroll_top: f64,
}

impl DragSession {
    pub fn new(start_pointer_y: f64, start_scroll_top: f64) -> Self {
        Self {
            start_pointer_y,
            start_scroll_top,
        }
    }

    /// Content offset for the current pointer y (relative to start)
    ///
    /// One pixel of thumb travel moves the content by
    /// `client_height / thumb_height` pixels. The result is clamped to the
    /// content's scroll range.
    pub fn calculate_offset(
        &self,
        client_y: f64,
        content: &ContentGeometry,
        thumb_height: f64,
    ) -> Option<f64> {
        if !content.is_measured() || !is_positive(thumb_height) || !client_y.is_finite() {
            return None;
        }
        let scale = content.client_height / thumb_height;
        let delta = (client_y - self.start_pointer_y) * scale;
        Some(content.clamp_scroll_top(self.start_scroll_top + delta))
    }
}

/// Drag state machine states
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Owns the drag state and applies pointer events to the content surface
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn session(&self) -> Option<DragSession> {
        match self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Pointer-down on the thumb
    ///
    /// Swallows the event so it never reaches the track's click handling or
    /// starts a text selection. A stale session (lost pointer-up) is replaced.
    pub fn begin<C: ContentSurface + ?Sized>(
        &mut self,
        event: &mut PointerEvent,
        content: &C,
    ) -> DragSession {
        event.prevent_default();
        event.stop_propagation();

        let session = DragSession::new(event.client_y, content.scroll_top());
        if let DragState::Dragging(stale) = self.state {
            debug!(?stale, "Replacing drag session that never saw a release");
        }
        debug!(
            start_pointer_y = session.start_pointer_y,
            start_scroll_top = session.start_scroll_top,
            "Thumb drag started"
        );
        self.state = DragState::Dragging(session);
        session
    }

    /// Pointer-move anywhere in the document
    ///
    /// Writes the new offset straight to the content surface and returns it.
    /// No-op while idle.
    pub fn drag_to<C: ContentSurface + ?Sized>(
        &self,
        event: &PointerEvent,
        content: &mut C,
        thumb_height: f64,
    ) -> Option<f64> {
        let session = self.session()?;
        let geometry = ContentGeometry::read(content);
        let offset = session.calculate_offset(event.client_y, &geometry, thumb_height)?;
        content.set_scroll_top(offset);
        Some(offset)
    }

    /// Pointer-up or pointer-leave anywhere in the document
    pub fn end(&mut self) -> Option<DragSession> {
        let session = self.session();
        self.state = DragState::Idle;
        if let Some(session) = session {
            debug!(?session, "Thumb drag ended");
        }
        session
    }
}
