use std::path::Path;

use dotenvy::{dotenv, from_path};

/// Loads environment variables from a `.env` file.
///
/// Tries `<dir>/.env` first and falls back to the usual dotenv lookup from
/// the current working directory upwards. A missing file is not an error.
pub fn load_env_from_dir(dir: &Path) {
    if from_path(dir.join(".env")).is_err() {
        dotenv().ok();
    }
}
