// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Touch-driven first-person camera control.
//!
//! touchcam turns raw multi-pointer touch, pen and mouse input into
//! incremental rotation and movement for a 3D camera. One finger looks
//! left/right and walks forward/back; two or more fingers look around
//! without moving.
//!
//! # Key entry points
//!
//! - [`camera::TouchCameraController`] - pointer tracking, attach/detach
//!   lifecycle and the per-frame mapping
//! - [`camera::CameraRig`] - the narrow interface a controller steers
//! - [`camera::FreeCamera`] - a first-person camera with inertia
//! - [`input::InputSurface`] / [`input::FocusChannel`] - event sources a
//!   controller attaches to
//! - [`options::Options`] - sensitivity and camera settings with TOML presets
//!
//! # Frame cycle
//!
//! Surfaces broadcast [`input::InputEvent`]s into the attached controller's
//! queue. Once per frame the host calls
//! [`TouchCameraController::update`](camera::TouchCameraController::update),
//! which handles the queued events in delivery order, pushes the resulting
//! yaw, pitch and movement into the rig, and lets the rig integrate.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{CameraRig, FreeCamera, TouchCameraController};
pub use error::TouchCamError;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
