//! Settings loaded via OrthoConfig.

use std::ffi::OsString;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Environment and configuration-file settings for the `qngng` binary.
///
/// Command-line flags take precedence over these values.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "QNGNG")]
pub struct QngngSettings {
    /// Spin the wheel even without `--wheel`.
    #[ortho_config(default = false)]
    pub wheel: bool,
    /// Directory of `{key}.json` name lists replacing the packaged data.
    pub data_dir: Option<PathBuf>,
    /// Fixed RNG seed, for reproducible output.
    pub seed: Option<u64>,
}

impl QngngSettings {
    /// Loads settings from the environment and configuration files.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first value that failed to load.
    pub fn load_ambient() -> Result<Self, String> {
        Self::load_from_iter([OsString::from("qngng")]).map_err(|e| e.to_string())
    }
}
