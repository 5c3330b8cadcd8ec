use glam::Vec3;

/// The slice of a first-person camera that touch control drives.
///
/// Rotation deltas and movement directions are *pending* values: the rig
/// folds them into its pose in [`integrate`](Self::integrate), which runs
/// once per frame after the controller has pushed its contributions.
pub trait CameraRig {
    /// Current yaw (rotation around +Y) in radians.
    fn yaw(&self) -> f32;

    /// Current pitch (rotation around +X) in radians.
    fn pitch(&self) -> f32;

    /// Add to the pending yaw rotation.
    fn add_yaw(&mut self, delta: f32);

    /// Add to the pending pitch rotation.
    fn add_pitch(&mut self, delta: f32);

    /// Movement scale for the current frame.
    fn local_speed(&self) -> f32;

    /// Add a world-space vector to the pending movement.
    fn add_direction(&mut self, delta: Vec3);

    /// Apply pending rotation and movement to the pose.
    fn integrate(&mut self);
}
