//! User preferences and state persistence.

#![allow(missing_docs)] // plain data sections mirroring `default.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

mod animation;
mod interaction;
pub mod paths;
pub mod persist;

pub use animation::*;
pub use interaction::*;
pub use persist::{FileStore, MemoryStore, StateStore};

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub interaction: InteractionPreferences,
    pub animation: AnimationPreferences,
    pub shuffle: ShufflePreferences,
    pub solver: SolverPreferences,
    pub persistence: PersistencePreferences,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ShufflePreferences {
    /// Number of moves in a generated shuffle.
    pub length: usize,
}
impl Default for ShufflePreferences {
    fn default() -> Self {
        Self { length: 20 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SolverPreferences {
    /// Maximum solution length searched by the built-in solver.
    pub max_depth: usize,
}
impl Default for SolverPreferences {
    fn default() -> Self {
        Self { max_depth: 5 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PersistencePreferences {
    /// Key under which the cube pattern is stored.
    pub state_key: String,
}
impl Default for PersistencePreferences {
    fn default() -> Self {
        Self {
            state_key: "fd".to_owned(),
        }
    }
}

impl Preferences {
    /// Loads preferences from the built-in defaults, overridden by `user_file`
    /// if it exists. If loading fails, the default preferences are returned.
    pub fn load(user_file: Option<&Path>) -> Self {
        let mut config = config::Config::builder().add_source(config::File::from_str(
            DEFAULT_PREFS_STR,
            PREFS_FILE_FORMAT,
        ));

        match user_file {
            Some(path) => {
                log::debug!("loading user preferences from {}", path.display());
                config = config.add_source(
                    config::File::from(path)
                        .format(PREFS_FILE_FORMAT)
                        .required(false),
                );
            }
            None => log::debug!("no user preferences file"),
        }

        config
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                Self::default()
            })
    }

    /// Loads preferences from the default user preferences file.
    pub fn load_default_file() -> Self {
        match paths::prefs_file() {
            Ok(path) => Self::load(Some(path)),
            Err(e) => {
                log::warn!("Error loading user preferences: {e}");
                Self::load(None)
            }
        }
    }

    /// Saves preferences to a YAML file, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> eyre::Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_yaml_matches_default_impl() {
        let from_yaml: Preferences = serde_norway::from_str(DEFAULT_PREFS_STR).unwrap();
        assert_eq!(Preferences::default(), from_yaml);
        assert_eq!(Preferences::default(), Preferences::load(None));
    }

    #[test]
    fn test_user_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.yaml");
        std::fs::write(
            &path,
            "shuffle:\n  length: 7\ninteraction:\n  min_move_distance: 4.0\n",
        )
        .unwrap();

        let prefs = Preferences::load(Some(&path));
        assert_eq!(7, prefs.shuffle.length);
        assert_eq!(4.0, prefs.interaction.min_move_distance);
        assert_eq!(0.01, prefs.interaction.rotation_rad_per_px);
        assert_eq!("fd", prefs.persistence.state_key);
    }

    #[test]
    fn test_missing_or_broken_user_file() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.yaml");
        assert_eq!(Preferences::default(), Preferences::load(Some(&missing)));

        let broken = dir.path().join("broken.yaml");
        std::fs::write(&broken, "shuffle: [not, a, section").unwrap();
        assert_eq!(Preferences::default(), Preferences::load(Some(&broken)));
    }

    #[test]
    fn test_animation_durations() {
        let mut animation = AnimationPreferences::default();
        assert!((animation.twist_duration().as_secs_f32() - 0.3).abs() < 1e-6);
        assert_eq!(Duration::from_millis(500), animation.pattern_cell_delay());

        animation.twist_duration = -1.0;
        assert_eq!(Duration::ZERO, animation.twist_duration());
        animation.twist_duration = 1e9;
        assert_eq!(Duration::from_secs(60), animation.twist_duration());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.yaml");

        let mut prefs = Preferences::default();
        prefs.solver.max_depth = 3;
        prefs.animation.pattern_cell_delay_ms = 0;
        prefs.save(&path).unwrap();

        assert_eq!(prefs, Preferences::load(Some(&path)));
    }
}
