use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    fs,
    path::{Path, PathBuf},
};

use error_stack::{IntoReport, Result, ResultExt};
use log::{debug, info};

use crate::LAUNCHER_FILENAME;

const LAUNCHER_CONTENT: &str = "@echo off\r\n\
cd /d \"%~dp0\"\r\n\
streamlit run app.py\r\n";

#[derive(Debug)]
pub struct LauncherError;

impl Display for LauncherError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        fmt.write_str("Launcher error")
    }
}

impl Error for LauncherError {}

/// Writes the batch launcher into `install_dir` unless one is already there.
/// Returns the path when a new file was written.
pub fn write_launcher(install_dir: impl AsRef<Path>) -> Result<Option<PathBuf>, LauncherError> {
    let launcher = install_dir.as_ref().join(LAUNCHER_FILENAME);
    if launcher.exists() {
        debug!("Launcher already exists {}", launcher.display());
        return Ok(None);
    }

    fs::write(&launcher, LAUNCHER_CONTENT)
        .report()
        .change_context(LauncherError)
        .attach_printable_lazy(|| format!("Could not write {}", launcher.display()))?;
    info!("Launcher written {}", launcher.display());
    Ok(Some(launcher))
}
