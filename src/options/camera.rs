use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Base camera projection and motion parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Movement speed multiplier.
    #[schemars(title = "Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub speed: f32,
    /// Fraction of pending motion kept per frame.
    #[schemars(title = "Inertia", range(min = 0.0, max = 0.99), extend("step" = 0.01))]
    pub inertia: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
            speed: 2.0,
            inertia: 0.9,
        }
    }
}
