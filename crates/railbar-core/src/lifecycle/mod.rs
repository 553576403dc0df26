//! Overlay lifecycle
//!
//! Mount/observe/teardown as an explicit attach → handle → detach pair.

mod attach;
mod resize;

pub use attach::{attach, Handle, ThumbCallback};
pub use resize::ResizeWatcher;
