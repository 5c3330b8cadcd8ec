//! Shared utilities.

/// Frame delta and FPS tracking.
pub mod frame_timing;
