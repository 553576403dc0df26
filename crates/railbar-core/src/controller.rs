//! Scrollbar controller
//!
//! Owns every piece of overlay state (thumb, track geometry, drag session,
//! resize watcher) and exposes one entry point per host event. The content
//! surface is never cached: each entry point re-reads it.

use tracing::{debug, trace};

use crate::config::ScrollbarConfig;
use crate::geometry::{ContentGeometry, TrackGeometry};
use crate::interaction::{handle_track_click, DragController, DragSession, DragState};
use crate::lifecycle::ResizeWatcher;
use crate::surface::{ContentSurface, PointerEvent, PointerKind, TrackSurface};
use crate::sync::sync_thumb;
use crate::thumb::ThumbState;

/// Direction of a step button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

impl StepDirection {
    fn sign(self) -> f64 {
        match self {
            StepDirection::Up => -1.0,
            StepDirection::Down => 1.0,
        }
    }
}

/// Scrollbar overlay state and event handling
#[derive(Debug)]
pub struct Scrollbar {
    config: ScrollbarConfig,
    track: Option<TrackGeometry>,
    resize: Option<ResizeWatcher>,
    thumb: ThumbState,
    drag: DragController,
}

impl Scrollbar {
    pub fn new(config: ScrollbarConfig) -> Self {
        Self {
            thumb: ThumbState::initial(config.min_thumb),
            config,
            track: None,
            resize: None,
            drag: DragController::new(),
        }
    }

    pub fn config(&self) -> &ScrollbarConfig {
        &self.config
    }

    /// Current thumb geometry (last valid projection)
    pub fn thumb(&self) -> ThumbState {
        self.thumb
    }

    pub fn track(&self) -> Option<TrackGeometry> {
        self.track
    }

    pub fn is_mounted(&self) -> bool {
        self.track.is_some()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Content overflows its viewport, so the overlay has something to show
    pub fn needs_scrollbar<C: ContentSurface + ?Sized>(&self, content: &C) -> bool {
        ContentGeometry::read(content).overflows()
    }

    /// Both surfaces are available: capture the track and size the thumb
    pub fn mount<C, T>(&mut self, content: &C, track: &T) -> Option<ThumbState>
    where
        C: ContentSurface + ?Sized,
        T: TrackSurface + ?Sized,
    {
        let track = TrackGeometry::read(track);
        debug!(
            track_height = track.client_height,
            track_top = track.top,
            "Scrollbar mounted"
        );
        self.track = Some(track);
        self.resize = Some(ResizeWatcher::observe(track.client_height));
        self.on_geometry_changed(content)
    }

    /// Re-measure the track after a layout change and recompute everything
    pub fn remeasure_track<C, T>(&mut self, content: &C, track: &T) -> Option<ThumbState>
    where
        C: ContentSurface + ?Sized,
        T: TrackSurface + ?Sized,
    {
        if !self.is_mounted() {
            return None;
        }
        self.mount(content, track)
    }

    /// Teardown: drop track geometry and any live drag session
    pub fn unmount(&mut self) {
        self.drag.end();
        self.track = None;
        self.resize = None;
        debug!("Scrollbar unmounted");
    }

    /// Content scrolled: re-project the thumb top
    pub fn on_scroll<C: ContentSurface + ?Sized>(&mut self, content: &C) -> Option<ThumbState> {
        let track = self.track?;
        let geometry = ContentGeometry::read(content);
        let thumb = sync_thumb(&geometry, &track, self.thumb)?;
        trace!(top = thumb.top, height = thumb.height, "Thumb synced");
        self.thumb = thumb;
        Some(thumb)
    }

    /// Content resized: recompute thumb length, then re-project its top
    pub fn on_geometry_changed<C: ContentSurface + ?Sized>(
        &mut self,
        content: &C,
    ) -> Option<ThumbState> {
        let watcher = self.resize?;
        let geometry = ContentGeometry::read(content);
        let height = watcher.thumb_height(&geometry, self.config.min_thumb)?;
        let previous = self.thumb;
        self.thumb.height = height;
        let synced = self.on_scroll(content);
        if synced.is_none() {
            self.thumb = previous;
        }
        synced
    }

    /// Pointer-down on the thumb starts a drag session
    pub fn thumb_pointer_down<C: ContentSurface + ?Sized>(
        &mut self,
        event: &mut PointerEvent,
        content: &C,
    ) -> Option<DragSession> {
        if !self.is_mounted() {
            return None;
        }
        Some(self.drag.begin(event, content))
    }

    /// Document-level pointer-move; writes the content offset while dragging
    pub fn pointer_move<C: ContentSurface + ?Sized>(
        &mut self,
        event: &PointerEvent,
        content: &mut C,
    ) -> Option<f64> {
        self.drag.drag_to(event, content, self.thumb.height)
    }

    /// Document-level pointer-up or pointer-leave ends the drag session
    pub fn pointer_release(&mut self, event: &PointerEvent) -> Option<DragSession> {
        match event.kind {
            PointerKind::Up | PointerKind::Leave => self.drag.end(),
            PointerKind::Down | PointerKind::Move => None,
        }
    }

    /// Click on the bare track: smooth-scroll the content there
    pub fn track_click<C, T>(
        &mut self,
        event: &PointerEvent,
        content: &mut C,
        track: &T,
    ) -> Option<f64>
    where
        C: ContentSurface + ?Sized,
        T: TrackSurface + ?Sized,
    {
        if !self.is_mounted() {
            return None;
        }
        if self.drag.is_dragging() {
            debug!("Ignoring track click during thumb drag");
            return None;
        }
        let track = TrackGeometry::read(track);
        handle_track_click(
            event,
            &track,
            self.thumb.height,
            content,
            self.config.track_click_behavior,
        )
    }

    /// Step button: scroll by a fixed amount
    pub fn step<C: ContentSurface + ?Sized>(
        &self,
        direction: StepDirection,
        content: &mut C,
    ) -> Option<f64> {
        if !self.is_mounted() {
            return None;
        }
        let delta = direction.sign() * self.config.step_amount;
        debug!(?direction, delta, "Step scroll");
        content.scroll_by(delta, self.config.step_behavior);
        Some(delta)
    }
}

impl Default for Scrollbar {
    fn default() -> Self {
        Self::new(ScrollbarConfig::default())
    }
}
