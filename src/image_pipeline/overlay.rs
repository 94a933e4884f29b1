//! Still image overlay module
//!
//! Composites a converted still onto video frames at the top-left corner, unscaled.

mod frame_overlay;


pub use frame_overlay::{check_fits, overlay};
