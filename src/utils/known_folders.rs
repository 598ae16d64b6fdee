#[cfg(test)]
use mockall::automock;

use std::{
    env,
    error::Error,
    fmt::{self, Display, Formatter},
    path::PathBuf,
};

use error_stack::{IntoReport, Report, Result, ResultExt};

pub type ResolveResult<T> = Result<T, ResolveError>;

#[derive(Debug, PartialEq)]
pub enum ResolveError {
    DesktopNotFound,
    CurrentExe,
    NoParentDir,
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::DesktopNotFound => f.write_str("Could not determine desktop directory"),
            ResolveError::CurrentExe => f.write_str("Could not locate running executable"),
            ResolveError::NoParentDir => f.write_str("Executable has no parent directory"),
        }
    }
}

impl Error for ResolveError {}

#[cfg_attr(test, automock)]
pub trait DesktopResolver {
    fn desktop_dir(&self) -> ResolveResult<PathBuf>;
}

/// Directory the installer ships from, base for the launcher and the icon.
#[cfg_attr(test, automock)]
pub trait InstallDirResolver {
    fn install_dir(&self) -> ResolveResult<PathBuf>;
}

/// Special folders as reported by the OS.
pub struct KnownFolders;

impl DesktopResolver for KnownFolders {
    fn desktop_dir(&self) -> ResolveResult<PathBuf> {
        dirs::desktop_dir().ok_or_else(|| Report::new(ResolveError::DesktopNotFound))
    }
}

impl InstallDirResolver for KnownFolders {
    fn install_dir(&self) -> ResolveResult<PathBuf> {
        let exe = env::current_exe()
            .report()
            .change_context(ResolveError::CurrentExe)?;
        exe.parent()
            .map(|dir| dir.to_path_buf())
            .ok_or_else(|| {
                Report::new(ResolveError::NoParentDir)
                    .attach_printable(format!("Executable {}", exe.display()))
            })
    }
}

/// Folder given on the command line, skips OS lookup.
pub struct FixedFolder(pub PathBuf);

impl DesktopResolver for FixedFolder {
    fn desktop_dir(&self) -> ResolveResult<PathBuf> {
        Ok(self.0.clone())
    }
}

impl InstallDirResolver for FixedFolder {
    fn install_dir(&self) -> ResolveResult<PathBuf> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{DesktopResolver, FixedFolder, InstallDirResolver, KnownFolders};

    #[test]
    fn install_dir_is_parent_of_running_binary() {
        let dir = KnownFolders.install_dir().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(exe.parent().unwrap(), dir.as_path());
    }

    #[test]
    fn fixed_folder_is_returned_as_is() {
        let folder = FixedFolder(PathBuf::from("D:/Users/kim/Desktop"));
        assert_eq!(folder.desktop_dir().unwrap(), PathBuf::from("D:/Users/kim/Desktop"));
        assert_eq!(folder.install_dir().unwrap(), PathBuf::from("D:/Users/kim/Desktop"));
    }
}
