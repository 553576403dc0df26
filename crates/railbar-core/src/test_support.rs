//! In-memory collaborators for unit tests

use std::collections::BTreeMap;

use crate::surface::{
    ContentSurface, EventHost, Listener, ListenerId, PointerEvent, ScrollBehavior, TrackSurface,
};

/// Content surface that applies every scroll request immediately
#[derive(Debug, Clone, Default)]
pub struct FakeContent {
    scroll_top: f64,
    scroll_height: f64,
    client_height: f64,
    writes: usize,
    requests: Vec<(f64, ScrollBehavior)>,
    scroll_pending: bool,
}

impl FakeContent {
    pub fn new(scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_height,
            client_height,
            ..Default::default()
        }
    }

    pub fn scrolled_to(mut self, offset: f64) -> Self {
        self.scroll_top = offset;
        self
    }

    /// Simulate a reflow that changes the content's extents
    pub fn resize(&mut self, scroll_height: f64, client_height: f64) {
        self.scroll_height = scroll_height;
        self.client_height = client_height;
        let max = (scroll_height - client_height).max(0.0);
        self.scroll_top = self.scroll_top.clamp(0.0, max);
    }

    /// Number of direct offset writes
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn last_request(&self) -> Option<(f64, ScrollBehavior)> {
        self.requests.last().copied()
    }

    /// Consume the pending scroll notification, if any
    pub fn take_scroll_pending(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }

    fn apply(&mut self, offset: f64) {
        let max = (self.scroll_height - self.client_height).max(0.0);
        let clamped = offset.clamp(0.0, max);
        if clamped != self.scroll_top {
            self.scroll_top = clamped;
            self.scroll_pending = true;
        }
    }
}

impl ContentSurface for FakeContent {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn scroll_height(&self) -> f64 {
        self.scroll_height
    }

    fn client_height(&self) -> f64 {
        self.client_height
    }

    fn set_scroll_top(&mut self, offset: f64) {
        self.writes += 1;
        self.apply(offset);
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        self.requests.push((offset, behavior));
        self.apply(offset);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FakeTrack {
    pub height: f64,
    pub top: f64,
}

impl TrackSurface for FakeTrack {
    fn client_height(&self) -> f64 {
        self.height
    }

    fn bounding_top(&self) -> f64 {
        self.top
    }
}

/// Event host that dispatches synchronously on demand
#[derive(Debug, Default)]
pub struct FakeHost {
    next_id: u64,
    listeners: BTreeMap<ListenerId, Listener>,
    pub added: usize,
    pub removed: usize,
}

impl FakeHost {
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn dispatch_scroll(&mut self) {
        for listener in self.listeners.values_mut() {
            if let Listener::ContentScroll(callback) = listener {
                callback();
            }
        }
    }

    pub fn dispatch_resize(&mut self) {
        for listener in self.listeners.values_mut() {
            if let Listener::ContentResize(callback) = listener {
                callback();
            }
        }
    }

    pub fn dispatch_pointer(&mut self, event: &mut PointerEvent) {
        use crate::surface::PointerKind;

        for listener in self.listeners.values_mut() {
            match (listener, event.kind) {
                (Listener::DocumentPointerMove(callback), PointerKind::Move) => {
                    callback(&mut *event)
                }
                (
                    Listener::DocumentPointerRelease(callback),
                    PointerKind::Up | PointerKind::Leave,
                ) => callback(&mut *event),
                _ => {}
            }
        }
    }
}

impl EventHost for FakeHost {
    fn add_listener(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, listener);
        self.added += 1;
        id
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        let removed = self.listeners.remove(&id).is_some();
        if removed {
            self.removed += 1;
        }
        removed
    }
}
