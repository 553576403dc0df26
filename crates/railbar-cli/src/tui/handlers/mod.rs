//! Terminal event handlers

mod keyboard;
mod mouse;
