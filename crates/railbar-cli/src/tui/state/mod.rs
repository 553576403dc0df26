//! App State Components
//!
//! The terminal-side collaborators the scrollbar engine talks to.

mod content;
mod host;
mod layout;

pub use content::TextContent;
pub use host::TerminalHost;
pub use layout::{px_to_row, row_center_px, LayoutState, TrackArea, ROW_PX};
