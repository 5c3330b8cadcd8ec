//! Camera system driven by touch input.
//!
//! Provides the narrow [`CameraRig`] interface a controller steers, a
//! first-person [`FreeCamera`] implementing it, and the
//! [`TouchCameraController`] that maps pointer movement onto a rig.

/// Touch controller: attachment lifecycle, event handling, per-frame mapping.
pub mod controller;
/// First-person camera with inertia.
pub mod free;
/// Interface between controllers and the camera they drive.
pub mod rig;

pub use controller::TouchCameraController;
pub use free::FreeCamera;
pub use rig::CameraRig;
