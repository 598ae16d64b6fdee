#[cfg(test)]
use mockall::automock;

use error_stack::{IntoReport, Report, Result, ResultExt};
use log::debug;
use std::{
    fs,
    path::{Path, PathBuf},
};

use super::configStruct::{ConfigError, ShortcutsConfig};

pub type ConfigResult<T> = Result<T, ConfigError>;

pub const CONFIG_FILENAME: &str = "fiplsim_shortcuts.toml";

/// Reads `fiplsim_shortcuts.toml` from the install dir, or an explicit file.
/// Only an explicit file is required to exist.
pub struct ShortcutsConfigProvider {
    filename: Option<PathBuf>,
}

#[cfg_attr(test, automock)]
pub trait ConfigProvider {
    fn load_from_file(&self, install_dir: &Path) -> ConfigResult<ShortcutsConfig>;
}

impl ConfigProvider for ShortcutsConfigProvider {
    fn load_from_file(&self, install_dir: &Path) -> ConfigResult<ShortcutsConfig> {
        let path = match &self.filename {
            Some(filename) => filename.to_owned(),
            None => {
                let default_path = install_dir.join(CONFIG_FILENAME);
                if !default_path.exists() {
                    debug!("No config at {}, using defaults", default_path.display());
                    return Ok(ShortcutsConfig::default());
                }
                default_path
            }
        };

        let content = fs::read_to_string(&path)
            .report()
            .change_context(ConfigError::ConfigFile)
            .attach_printable_lazy(|| format!("Error reading {}", path.display()))?;

        deserialize(&content).attach_printable_lazy(|| format!("In {}", path.display()))
    }
}

impl ShortcutsConfigProvider {
    pub fn new(filename: Option<impl AsRef<Path>>) -> Self {
        ShortcutsConfigProvider {
            filename: filename.map(|it| it.as_ref().to_path_buf()),
        }
    }
}

pub fn deserialize(content: &str) -> ConfigResult<ShortcutsConfig> {
    toml::from_str::<ShortcutsConfig>(content)
        .map_err(|err| Report::new(ConfigError::Deserializer).attach_printable(err.to_string()))
}
