use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Duration of one layer animation, in seconds.
    pub twist_duration: f32,
    /// Delay between recoloring successive cubelets during a pattern
    /// transition, in milliseconds.
    pub pattern_cell_delay_ms: u64,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            twist_duration: 0.3,
            pattern_cell_delay_ms: 500,
        }
    }
}
impl AnimationPreferences {
    /// Returns the duration of one layer animation, clamped to at most one
    /// minute.
    pub fn twist_duration(&self) -> Duration {
        Duration::from_secs_f32(self.twist_duration.max(0.0).min(60.0))
    }
    /// Returns the delay between recoloring successive cubelets.
    pub fn pattern_cell_delay(&self) -> Duration {
        Duration::from_millis(self.pattern_cell_delay_ms)
    }
}
