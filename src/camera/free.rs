use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

use super::rig::CameraRig;
use crate::options::CameraOptions;

/// Pending components smaller than this are snapped to zero after inertia.
const EPSILON: f32 = 0.001;

/// Pitch is kept strictly inside ±90° so the view never flips.
const PITCH_LIMIT: f32 = FRAC_PI_2 * 0.95;

/// Frame rate assumed until the host reports one.
const DEFAULT_FPS: f32 = 60.0;

/// First-person camera with inertia, left-handed, looking down +Z at rest.
///
/// Input controllers push rotation and movement into the pending
/// accumulators; [`integrate`](CameraRig::integrate) applies them to the
/// pose and lets them decay by `inertia`, so a single push glides to a stop
/// over a few frames.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeCamera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Orientation in radians: `x` is pitch, `y` is yaw.
    pub rotation: Vec2,
    /// Movement scale multiplier.
    pub speed: f32,
    /// Fraction of pending motion kept each frame (0 stops instantly).
    pub inertia: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    camera_rotation: Vec2,
    camera_direction: Vec3,
    delta_time: f32,
    fps: f32,
}

impl Default for FreeCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, &CameraOptions::default())
    }
}

impl FreeCamera {
    /// Create a camera at `position` facing +Z.
    #[must_use]
    pub fn new(position: Vec3, options: &CameraOptions) -> Self {
        Self {
            position,
            rotation: Vec2::ZERO,
            speed: options.speed,
            inertia: options.inertia,
            aspect: 16.0 / 9.0,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
            camera_rotation: Vec2::ZERO,
            camera_direction: Vec3::ZERO,
            delta_time: 0.0,
            fps: DEFAULT_FPS,
        }
    }

    /// Apply speed, inertia and projection settings.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.speed = options.speed;
        self.inertia = options.inertia;
        self.fovy = options.fovy;
        self.znear = options.znear;
        self.zfar = options.zfar;
    }

    /// Record the duration of the current frame in seconds, keeping the
    /// last reported frame rate.
    pub fn set_delta_time(&mut self, dt: f32) {
        self.delta_time = dt.max(0.0);
    }

    /// Record the current frame duration (seconds) and the smoothed frame
    /// rate that [`local_speed`](CameraRig::local_speed) divides by.
    pub fn set_frame_timing(&mut self, dt: f32, fps: f32) {
        self.set_delta_time(dt);
        self.fps = fps.max(0.0);
    }

    /// Smoothed frames per second last reported by the host.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Duration of the current frame in seconds.
    #[must_use]
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Update the aspect ratio after a viewport resize.
    #[allow(clippy::cast_precision_loss)]
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Rotation not yet applied (`x` pitch, `y` yaw).
    #[must_use]
    pub fn pending_rotation(&self) -> Vec2 {
        self.camera_rotation
    }

    /// Movement not yet applied, in world space.
    #[must_use]
    pub fn pending_direction(&self) -> Vec3 {
        self.camera_direction
    }

    /// Orientation as a quaternion (yaw, then pitch, no roll).
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.rotation.y, self.rotation.x, 0.0)
    }

    /// Unit view direction in world space.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::Z
    }

    /// World-to-view transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        let orientation = self.orientation();
        Mat4::look_to_lh(
            self.position,
            orientation * Vec3::Z,
            orientation * Vec3::Y,
        )
    }

    /// Perspective projection with a `0..=1` depth range.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_lh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Scale `v` by `inertia`, flushing tiny results to exactly zero.
fn decay(v: f32, inertia: f32) -> f32 {
    if v.abs() < EPSILON {
        0.0
    } else {
        v * inertia
    }
}

impl CameraRig for FreeCamera {
    fn yaw(&self) -> f32 {
        self.rotation.y
    }

    fn pitch(&self) -> f32 {
        self.rotation.x
    }

    fn add_yaw(&mut self, delta: f32) {
        self.camera_rotation.y += delta;
    }

    fn add_pitch(&mut self, delta: f32) {
        self.camera_rotation.x += delta;
    }

    /// Frame-rate dependent movement scale: `speed * ms / (fps * 10)`,
    /// linear in the frame duration for a given smoothed frame rate.
    fn local_speed(&self) -> f32 {
        if self.delta_time <= 0.0 || self.fps <= 0.0 {
            return 0.0;
        }
        let millis = self.delta_time * 1000.0;
        self.speed * (millis / (self.fps * 10.0))
    }

    fn add_direction(&mut self, delta: Vec3) {
        self.camera_direction += delta;
    }

    fn integrate(&mut self) {
        let need_to_move = self.camera_direction != Vec3::ZERO;
        let need_to_rotate = self.camera_rotation != Vec2::ZERO;

        if need_to_move {
            self.position += self.camera_direction;
        }

        if need_to_rotate {
            self.rotation += self.camera_rotation;
            self.rotation.x = self.rotation.x.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        if need_to_move {
            let d = self.camera_direction;
            self.camera_direction = Vec3::new(
                decay(d.x, self.inertia),
                decay(d.y, self.inertia),
                decay(d.z, self.inertia),
            );
        }

        if need_to_rotate {
            let r = self.camera_rotation;
            self.camera_rotation =
                Vec2::new(decay(r.x, self.inertia), decay(r.y, self.inertia));
        }
    }
}
