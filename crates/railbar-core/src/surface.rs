//! Host collaborator contracts
//!
//! The overlay never owns the scrollable element, the track, or the event
//! source. Hosts implement these traits so the engine can read geometry,
//! request scrolls, and register listeners.

use serde::{Deserialize, Serialize};

/// How a requested scroll is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    /// Jump straight to the target
    Instant,
    /// Animate towards the target
    #[default]
    Smooth,
}

/// The scrollable element whose content the user is viewing
///
/// The surface is the authoritative store of the scroll offset and clamps it
/// to `[0, scroll_height - client_height]` itself. Every offset change must be
/// reported as a scroll notification through the [`EventHost`], delivered after
/// the write has landed and after the current handler has returned.
pub trait ContentSurface {
    /// Current scroll offset in content pixels
    fn scroll_top(&self) -> f64;

    /// Total scrollable extent in content pixels
    fn scroll_height(&self) -> f64;

    /// Visible extent in content pixels
    fn client_height(&self) -> f64;

    /// Write the scroll offset directly (no animation)
    fn set_scroll_top(&mut self, offset: f64);

    /// Request a scroll to an absolute offset
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior);

    /// Request a scroll relative to the current offset
    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior) {
        let target = self.scroll_top() + delta;
        self.scroll_to(target, behavior);
    }
}

/// The fixed-length channel the thumb travels within
pub trait TrackSurface {
    /// Track length in pixels
    fn client_height(&self) -> f64;

    /// Track top edge in the same coordinate space as pointer `client_y`
    fn bounding_top(&self) -> f64;
}

/// Phase of a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    /// Pointer left the window (or the host lost focus mid-gesture)
    Leave,
}

/// A pointer event delivered by the host
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Vertical position in viewport coordinates
    pub client_y: f64,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, client_y: f64) -> Self {
        Self {
            kind,
            client_y,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn down(client_y: f64) -> Self {
        Self::new(PointerKind::Down, client_y)
    }

    pub fn moved(client_y: f64) -> Self {
        Self::new(PointerKind::Move, client_y)
    }

    pub fn up(client_y: f64) -> Self {
        Self::new(PointerKind::Up, client_y)
    }

    pub fn leave(client_y: f64) -> Self {
        Self::new(PointerKind::Leave, client_y)
    }

    /// Suppress the host's default handling (text selection, focus)
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Keep the event from reaching ancestor handlers such as the track
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Opaque id for a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// A callback the overlay registers with its host
pub enum Listener {
    /// Content scroll offset changed
    ContentScroll(Box<dyn FnMut()>),
    /// Content box size changed
    ContentResize(Box<dyn FnMut()>),
    /// Pointer moved anywhere in the document
    DocumentPointerMove(Box<dyn FnMut(&mut PointerEvent)>),
    /// Pointer released or left the window, anywhere in the document
    DocumentPointerRelease(Box<dyn FnMut(&mut PointerEvent)>),
}

impl Listener {
    /// Short name for logging
    pub fn kind_name(&self) -> &'static str {
        match self {
            Listener::ContentScroll(_) => "content_scroll",
            Listener::ContentResize(_) => "content_resize",
            Listener::DocumentPointerMove(_) => "document_pointer_move",
            Listener::DocumentPointerRelease(_) => "document_pointer_release",
        }
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.kind_name())
    }
}

/// Event source the overlay subscribes to
///
/// Hosts must not dispatch into a listener while the overlay is already
/// handling an event; scroll notifications in particular are queued and
/// delivered once the handler that caused them has returned.
pub trait EventHost {
    /// Register a listener, returning the id needed to remove it
    fn add_listener(&mut self, listener: Listener) -> ListenerId;

    /// Remove a listener; returns false if the id was unknown
    fn remove_listener(&mut self, id: ListenerId) -> bool;
}
