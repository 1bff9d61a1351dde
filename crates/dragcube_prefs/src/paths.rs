//! Default locations of files read and written by dragcube.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{OptionExt, Result};
use lazy_static::lazy_static;

const PREFS_FILE_NAME: &str = "dragcube-prefs.yaml";
const STATE_FILE_NAME: &str = "dragcube-state.json";

lazy_static! {
    static ref PATHS: Option<AppPaths> = app_paths();
}

struct AppPaths {
    prefs_file: PathBuf,
    state_file: PathBuf,
}

fn get() -> Result<&'static AppPaths> {
    PATHS.as_ref().ok_or_eyre("no paths")
}

/// Returns the user preferences file.
pub fn prefs_file() -> Result<&'static Path> {
    Ok(&get()?.prefs_file)
}
/// Returns the file storing the persisted cube state.
pub fn state_file() -> Result<&'static Path> {
    Ok(&get()?.state_file)
}

fn app_paths() -> Option<AppPaths> {
    match ProjectDirs::from("", "", "dragcube") {
        Some(dirs) => Some(AppPaths {
            prefs_file: dirs.config_dir().join(PREFS_FILE_NAME),
            state_file: dirs.data_dir().join(STATE_FILE_NAME),
        }),
        None => {
            log::error!("Error getting project directories");
            None
        }
    }
}
