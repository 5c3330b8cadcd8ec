use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Touch", inline)]
#[serde(default)]
/// Touch-to-camera sensitivity.
///
/// Both sensibilities are divisors: larger values make the camera less
/// responsive. They must be non-zero.
pub struct TouchOptions {
    /// Divides pointer offset (pixels) into yaw/pitch deltas (radians).
    #[schemars(title = "Angular Sensibility", range(min = 1000.0, max = 1000000.0), extend("step" = 1000.0))]
    pub angular_sensibility: f32,
    /// Divides vertical pointer offset into forward movement.
    #[schemars(title = "Move Sensibility", range(min = 10.0, max = 5000.0), extend("step" = 10.0))]
    pub move_sensibility: f32,
    /// Ask the host to skip its default handling of consumed pointer events.
    #[schemars(skip)]
    pub prevent_default: bool,
}

impl Default for TouchOptions {
    fn default() -> Self {
        Self {
            angular_sensibility: 200_000.0,
            move_sensibility: 500.0,
            prevent_default: true,
        }
    }
}

impl TouchOptions {
    /// First sensibility that is zero, negative or not finite, by field name.
    #[must_use]
    pub fn invalid_field(&self) -> Option<&'static str> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if !usable(self.angular_sensibility) {
            Some("angular_sensibility")
        } else if !usable(self.move_sensibility) {
            Some("move_sensibility")
        } else {
            None
        }
    }
}
