//! Railbar Core - Headless scrollbar overlay engine
//!
//! This crate keeps a custom scrollbar in sync with a scrollable surface it
//! does not own:
//! - Geometry mapping between content pixels and track pixels
//! - Thumb sizing with a minimum length
//! - Thumb drag and track click, both writing the content scroll offset
//! - Resize handling and an attach/detach lifecycle over host listeners
//!
//! The content scroll offset is the single source of truth; the thumb is
//! always re-derived from it.

pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod lifecycle;
pub mod surface;
pub mod sync;
pub mod thumb;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use config::ScrollbarConfig;
pub use controller::{Scrollbar, StepDirection};
pub use error::{RailbarError, Result};
pub use geometry::{ContentGeometry, TrackGeometry};
pub use interaction::{DragSession, DragState};
pub use lifecycle::{attach, Handle};
pub use surface::{
    ContentSurface, EventHost, Listener, ListenerId, PointerEvent, PointerKind, ScrollBehavior,
    TrackSurface,
};
pub use thumb::ThumbState;
