//! `phlox.toml` loading and discovery.
//!
//! Configuration is resolved per input path: the nearest `phlox.toml`
//! walking upward from the path's directory wins, and no file at all
//! means defaults. An explicit `--config` bypasses discovery.

use std::path::{Path, PathBuf};

use thiserror::Error;

use phlox_rules::FixConfig;

/// Name of the discovered configuration file.
pub const CONFIG_FILE_NAME: &str = "phlox.toml";

/// A configuration file that could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
}

/// Load and parse a configuration file.
pub fn load(path: &Path) -> Result<FixConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

/// Find the nearest `phlox.toml` at or above `start`.
///
/// `start` may be a file or a directory; discovery begins at the
/// containing directory for files.
pub fn discover(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_dir() {
        start
    } else {
        start.parent()?
    };
    loop {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Resolve the configuration for one input path: explicit file if
/// given, else discovery, else defaults.
pub fn resolve(input: &Path, explicit: Option<&Path>) -> Result<FixConfig, ConfigError> {
    match explicit {
        Some(path) => load(path),
        None => match discover(input) {
            Some(path) => load(&path),
            None => Ok(FixConfig::default()),
        },
    }
}
