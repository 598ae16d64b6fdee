#[cfg(test)]
use mockall::automock;

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use error_stack::Result;

use crate::shortcut::descriptor::LinkDescriptor;

pub type WriterResult<T> = Result<T, WriterError>;

#[derive(Debug, PartialEq)]
pub enum WriterError {
    ShellLink,
    Create,
    UnsupportedPlatform,
}

impl Display for WriterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            WriterError::ShellLink => f.write_str("Could not build shell link"),
            WriterError::Create => f.write_str("Could not write link file"),
            WriterError::UnsupportedPlatform => {
                f.write_str("Link files can only be created on Windows")
            }
        }
    }
}

impl Error for WriterError {}

#[cfg_attr(test, automock)]
pub trait ShortcutWriter {
    /// Creates the link file, overwriting one that already exists.
    fn write_link(&self, link: &LinkDescriptor) -> WriterResult<()>;
}

pub struct MsLinkWriter;

impl ShortcutWriter for MsLinkWriter {
    #[cfg(target_os = "windows")]
    fn write_link(&self, link: &LinkDescriptor) -> WriterResult<()> {
        use error_stack::{IntoReport, ResultExt};
        use log::debug;
        use mslnk::{ShellLink, ShowCommand};

        use crate::shortcut::descriptor::{LinkTarget, WindowStyle};

        let mut sl = match &link.target {
            LinkTarget::Local(path) if path.exists() => ShellLink::new(path)
                .report()
                .change_context(WriterError::ShellLink)
                .attach_printable_lazy(|| format!("Target {}", path.display()))?,
            // ShellLink::new needs the target on disk, a missing one only gets its path recorded
            LinkTarget::Local(path) => {
                debug!("Target {} missing, writing path only", path.display());
                let mut sl = ShellLink::default();
                sl.set_relative_path(Some(path.display().to_string()));
                sl
            }
            // Urls can't be resolved by ShellLink::new so they go through explorer
            LinkTarget::Url(url) => {
                let explorer = explorer_path();
                let mut sl = ShellLink::new(&explorer)
                    .report()
                    .change_context(WriterError::ShellLink)
                    .attach_printable_lazy(|| format!("Explorer {}", explorer.display()))?;
                sl.set_arguments(Some(url.to_string()));
                sl
            }
        };

        sl.set_name(link.description.clone());
        sl.set_working_dir(
            link.working_directory
                .as_ref()
                .map(|dir| dir.display().to_string()),
        );
        sl.set_icon_location(link.icon_path.as_ref().map(|icon| icon.display().to_string()));
        if let Some(style) = link.window_style {
            let show_command = match style {
                WindowStyle::Normal => ShowCommand::ShowNormal,
                WindowStyle::Maximized => ShowCommand::ShowMaximized,
                WindowStyle::MinimizedNoActive => ShowCommand::ShowMinNoActive,
            };
            sl.header_mut().set_show_command(show_command);
        }

        sl.create_lnk(&link.file_path)
            .report()
            .change_context(WriterError::Create)
            .attach_printable_lazy(|| format!("Link file {}", link.file_path.display()))?;
        Ok(())
    }

    #[cfg(not(target_os = "windows"))]
    fn write_link(&self, link: &LinkDescriptor) -> WriterResult<()> {
        use error_stack::Report;

        Err(Report::new(WriterError::UnsupportedPlatform)
            .attach_printable(format!("Link file {}", link.file_path.display())))
    }
}

#[cfg(target_os = "windows")]
fn explorer_path() -> std::path::PathBuf {
    let system_root = std::env::var("SystemRoot").unwrap_or_else(|_| r"C:\Windows".to_string());
    std::path::Path::new(&system_root).join("explorer.exe")
}

#[cfg(test)]
mod tests {
    use super::{MsLinkWriter, ShortcutWriter};
    use crate::shortcut::descriptor::LinkDescriptor;

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn writing_links_outside_windows_is_unsupported() {
        use super::WriterError;

        let dir = tempfile::tempdir().unwrap();
        let link = LinkDescriptor::url(
            dir.path().join("FiPLSim Cloud.lnk"),
            "https://fiplsim.streamlit.app",
        );

        let err = MsLinkWriter.write_link(&link).unwrap_err();

        assert_eq!(err.current_context(), &WriterError::UnsupportedPlatform);
        assert!(!link.file_path.exists());
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn writes_local_link_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("launch_fiplsim.bat");
        std::fs::write(&target, "@echo off").unwrap();
        let link = LinkDescriptor::local(dir.path().join("FiPLSim Local.lnk"), &target)
            .working_directory(dir.path());

        MsLinkWriter.write_link(&link).unwrap();
        MsLinkWriter.write_link(&link).unwrap();

        assert!(link.file_path.exists());
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn writes_link_to_missing_launcher() {
        use crate::shortcut::descriptor::WindowStyle;

        let dir = tempfile::tempdir().unwrap();
        let link = LinkDescriptor::local(
            dir.path().join("FiPLSim Local.lnk"),
            dir.path().join("launch_fiplsim.bat"),
        )
        .working_directory(dir.path())
        .icon(dir.path().join("fiplsim.ico"))
        .description("FiPLSim")
        .window_style(WindowStyle::Normal);

        MsLinkWriter.write_link(&link).unwrap();

        let bytes = std::fs::read(&link.file_path).unwrap();
        // header size field of a shell link
        assert_eq!(&bytes[..4], &[0x4c, 0, 0, 0]);
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn writes_url_link() {
        let dir = tempfile::tempdir().unwrap();
        let link = LinkDescriptor::url(
            dir.path().join("FiPLSim Cloud.lnk"),
            "https://fiplsim.streamlit.app",
        )
        .description("FiPLSim");

        MsLinkWriter.write_link(&link).unwrap();

        assert!(link.file_path.exists());
    }
}
