//! Terminal event host
//!
//! Stores the listeners the scrollbar registers and dispatches terminal
//! events to them. Pointer listeners are document-level: they see every
//! mouse move and release regardless of where the pointer is.

use railbar_core::{EventHost, Listener, ListenerId, PointerEvent, PointerKind};

#[derive(Debug, Default)]
pub struct TerminalHost {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Content scroll offset changed
    pub fn dispatch_scroll(&mut self) {
        for (_, listener) in &mut self.listeners {
            if let Listener::ContentScroll(callback) = listener {
                callback();
            }
        }
    }

    /// Content box size changed
    pub fn dispatch_resize(&mut self) {
        for (_, listener) in &mut self.listeners {
            if let Listener::ContentResize(callback) = listener {
                callback();
            }
        }
    }

    /// Document-level pointer move, release or leave
    pub fn dispatch_pointer(&mut self, event: &mut PointerEvent) {
        for (_, listener) in &mut self.listeners {
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
            if event.propagation_stopped() {
                break;
            }
        }
    }
}

impl EventHost for TerminalHost {
    fn add_listener(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        tracing::debug!(?id, kind = listener.kind_name(), "Listener added");
        self.listeners.push((id, listener));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}
