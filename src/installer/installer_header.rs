use std::{
    fmt,
    path::PathBuf,
};

use error_stack::Result;

use crate::{
    shortcut::descriptor::LinkDescriptor,
    tomlConf::config::ConfigProvider,
    utils::{
        known_folders::{DesktopResolver, InstallDirResolver},
        mslink::ShortcutWriter,
    },
};

pub type ResultInstallerErr<T> = Result<T, InstallerError>;

pub struct ShortcutInstaller {
    pub desktop_resolver: Box<dyn DesktopResolver>,
    pub install_dir_resolver: Box<dyn InstallDirResolver>,
    pub config_provider: Box<dyn ConfigProvider>,
    pub writer: Box<dyn ShortcutWriter>,
    pub options: InstallerOptions,
}

#[derive(Debug, Default, Clone)]
pub struct InstallerOptions {
    pub write_launcher: bool,
    pub write_icon: bool,
    /// Log level came from the command line, config file must not override it.
    pub level_from_cli: bool,
}

/// Outcome of a successful run.
#[derive(Debug, PartialEq)]
pub struct InstallReport {
    pub links: Vec<LinkDescriptor>,
    pub missing_resources: Vec<PathBuf>,
    pub launcher_written: Option<PathBuf>,
    pub icon_written: Option<PathBuf>,
}

impl fmt::Display for InstallReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let files = self
            .links
            .iter()
            .map(|link| link.file_path.display().to_string())
            .collect::<Vec<_>>()
            .join(" and ");
        write!(f, "Desktop shortcuts created: {}", files)
    }
}

#[derive(Debug, PartialEq)]
pub enum InstallerError {
    DesktopNotFound,
    InstallDirNotFound,
    LoadConfigError,
    LauncherError,
    IconError,
    InvalidDescriptor(String),
    WriteFailed(String),
}

impl fmt::Display for InstallerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallerError::DesktopNotFound => write!(f, "DesktopNotFound"),
            InstallerError::InstallDirNotFound => write!(f, "InstallDirNotFound"),
            InstallerError::LoadConfigError => write!(f, "LoadConfigError"),
            InstallerError::LauncherError => write!(f, "LauncherError"),
            InstallerError::IconError => write!(f, "IconError"),
            InstallerError::InvalidDescriptor(info) => write!(f, "InvalidDescriptor {}", info),
            InstallerError::WriteFailed(info) => write!(f, "WriteFailed {}", info),
        }
    }
}

impl std::error::Error for InstallerError {}
