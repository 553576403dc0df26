//! UI components

mod scrollbars;
mod status_bar;

pub use scrollbars::{render_scrollbar, thumb_rows, ScrollbarColors};
pub use status_bar::{render_status_bar, StatusPosition};
