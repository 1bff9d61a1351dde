use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionPreferences {
    /// Screen distance, in pixels, that a drag must travel before its axis is
    /// locked.
    pub min_move_distance: f32,
    /// Layer rotation per pixel of drag, in radians.
    pub rotation_rad_per_px: f32,
    /// Minimum magnitude of a face normal component for it to be snapped to
    /// that axis.
    pub normal_snap_threshold: f32,
}
impl Default for InteractionPreferences {
    fn default() -> Self {
        Self {
            min_move_distance: 10.0,
            rotation_rad_per_px: 0.01,
            normal_snap_threshold: 0.9,
        }
    }
}
