//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the per-user configuration directory under the home directory.
pub const USER_CONFIG_DIR: &str = ".xhelpers";

/// Name of the configuration file inside [`USER_CONFIG_DIR`].
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use xhelpers::config::ConfigLoader;
///
/// let sources = ConfigLoader::load_all(None, None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user file and, if given, an explicit file.
    ///
    /// 1. User config at `~/.xhelpers/config.yaml`, or `{user_dir}/config.yaml`
    ///    when `user_dir` is given (precedence 1, optional)
    /// 2. `explicit` (precedence 2, must exist)
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing, or if any file
    /// exists but cannot be read or parsed.
    pub fn load_all(explicit: Option<&Path>, user_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user) = Self::load_user_config(user_dir)? {
            sources.push(user);
        }

        if let Some(path) = explicit {
            sources.push(ConfigSource {
                path: path.to_path_buf(),
                precedence: 2,
                config: Self::load_file(path)?,
            });
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_user_config(user_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match user_dir {
            Some(dir) => dir.join(CONFIG_FILE_NAME),
            None => match Self::user_config_path() {
                Ok(path) => path,
                Err(e) => {
                    log::debug!("skipping user configuration: {e}");
                    return Ok(None);
                }
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        log::debug!("loading configuration from {}", path.display());
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Path of the per-user configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn user_config_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or_else(|| Error::NotFound {
            resource: "home directory".into(),
        })?;
        Ok(home.join(USER_CONFIG_DIR).join(CONFIG_FILE_NAME))
    }
}
