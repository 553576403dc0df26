//! Pointer interaction pathways
//!
//! Both pathways write the content scroll offset and nothing else; the thumb
//! follows through the resulting scroll notification.
//! - `drag`: pointer-down on the thumb starts a session, moves scale the delta
//! - `track_click`: a click on the bare track jumps the content there

pub mod drag;
pub mod track_click;

pub use drag::{DragController, DragSession, DragState};
pub use track_click::{handle_track_click, track_click_target};
