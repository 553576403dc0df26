//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

/// Thumb geometry
pub mod thumb {
    /// Smallest thumb length in pixels, keeps the thumb grabbable on very long content
    pub const MIN_THUMB: f64 = 20.0;
}

/// Step button behavior
pub mod step {
    /// Content units scrolled per step button activation
    pub const STEP_AMOUNT: f64 = 200.0;
}

/// Configuration file locations
pub mod config {
    /// Config directory name under the platform config dir
    pub const CONFIG_DIR_NAME: &str = "railbar";

    /// Config file name
    pub const CONFIG_FILE_NAME: &str = "config.toml";
}
