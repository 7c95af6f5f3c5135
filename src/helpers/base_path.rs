use std::{env, path::PathBuf};

use once_cell::sync::Lazy;

use crate::constants::{defaults, envvars};

pub static ROOT_DIR: Lazy<PathBuf> = Lazy::new(|| {
    if let Ok(root_dir) = env::var(envvars::ROOT_DIR) {
        return root_dir.into();
    }
    PathBuf::from(defaults::ROOT_DIR)
});

/// Render a path under `ROOT_DIR` as the string form used in config files
pub fn under_root(relative: &str) -> String {
    ROOT_DIR.join(relative).to_string_lossy().into_owned()
}
