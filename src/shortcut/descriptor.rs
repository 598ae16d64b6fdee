use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    path::PathBuf,
};

use error_stack::{Report, Result};

pub const LINK_EXTENSION: &str = "lnk";

pub type LinkResult<T> = Result<T, LinkError>;

#[derive(Debug, PartialEq)]
pub enum LinkError {
    MissingLinkExtension(String),
    EmptyTarget(String),
}

impl Display for LinkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::MissingLinkExtension(path) => {
                write!(f, "Link file {} does not end with .{}", path, LINK_EXTENSION)
            }
            LinkError::EmptyTarget(path) => write!(f, "Link file {} has an empty target", path),
        }
    }
}

impl Error for LinkError {}

/// Initial window mode of a launched process, values as stored in the link header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStyle {
    Normal = 1,
    Maximized = 3,
    MinimizedNoActive = 7,
}

/// What a link points at. Urls have no filesystem representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Local(PathBuf),
    Url(String),
}

impl LinkTarget {
    fn is_empty(&self) -> bool {
        match self {
            LinkTarget::Local(path) => path.as_os_str().is_empty(),
            LinkTarget::Url(url) => url.trim().is_empty(),
        }
    }
}

impl Display for LinkTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LinkTarget::Local(path) => write!(f, "{}", path.display()),
            LinkTarget::Url(url) => f.write_str(url),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDescriptor {
    pub file_path: PathBuf,
    pub target: LinkTarget,
    pub working_directory: Option<PathBuf>,
    pub icon_path: Option<PathBuf>,
    pub description: Option<String>,
    pub window_style: Option<WindowStyle>,
}

impl LinkDescriptor {
    pub fn new(file_path: impl Into<PathBuf>, target: LinkTarget) -> Self {
        Self {
            file_path: file_path.into(),
            target,
            working_directory: None,
            icon_path: None,
            description: None,
            window_style: None,
        }
    }

    pub fn local(file_path: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self::new(file_path, LinkTarget::Local(target.into()))
    }

    pub fn url(file_path: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self::new(file_path, LinkTarget::Url(url.into()))
    }

    pub fn working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    pub fn icon(mut self, icon_path: impl Into<PathBuf>) -> Self {
        self.icon_path = Some(icon_path.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn window_style(mut self, style: WindowStyle) -> Self {
        self.window_style = Some(style);
        self
    }

    pub fn validate(&self) -> LinkResult<()> {
        let has_link_extension = self
            .file_path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case(LINK_EXTENSION));
        if !has_link_extension {
            return Err(Report::new(LinkError::MissingLinkExtension(
                self.file_path.display().to_string(),
            )));
        }
        if self.target.is_empty() {
            return Err(Report::new(LinkError::EmptyTarget(
                self.file_path.display().to_string(),
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{LinkDescriptor, LinkError, LinkTarget, WindowStyle};

    #[test]
    fn constructors_pick_target_kind() {
        let link = LinkDescriptor::url("D:/Desktop/Cloud.lnk", "https://fiplsim.streamlit.app");
        assert_eq!(
            link.target,
            LinkTarget::Url("https://fiplsim.streamlit.app".to_string())
        );

        let link = LinkDescriptor::local("D:/Desktop/Local.lnk", "C:/FiPLSim/launch_fiplsim.bat");
        assert_eq!(
            link.target,
            LinkTarget::Local(Path::new("C:/FiPLSim/launch_fiplsim.bat").to_path_buf())
        );
        assert_eq!(link.target.to_string(), "C:/FiPLSim/launch_fiplsim.bat");
    }

    #[cfg(unix)]
    #[test]
    fn local_target_keeps_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = Path::new(OsStr::from_bytes(b"/opt/fipl\xffsim"));
        let link = LinkDescriptor::local("/home/kim/Desktop/Local.lnk", dir.join("launch_fiplsim.bat"));

        assert_eq!(
            link.target,
            LinkTarget::Local(dir.join("launch_fiplsim.bat"))
        );
        assert!(link.validate().is_ok());
    }

    #[test]
    fn validate_requires_lnk_extension() {
        let link = LinkDescriptor::local("D:/Desktop/FiPLSim Local.url", "C:/app.bat");
        let err = link.validate().unwrap_err();
        assert!(matches!(
            err.current_context(),
            LinkError::MissingLinkExtension(_)
        ));

        let link = LinkDescriptor::local("D:/Desktop/FiPLSim Local", "C:/app.bat");
        assert!(link.validate().is_err());

        let link = LinkDescriptor::local("D:/Desktop/FiPLSim Local.LNK", "C:/app.bat");
        assert!(link.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_target() {
        let link = LinkDescriptor::url("D:/Desktop/FiPLSim Cloud.lnk", "  ");
        let err = link.validate().unwrap_err();
        assert!(matches!(err.current_context(), LinkError::EmptyTarget(_)));

        let link = LinkDescriptor::local("D:/Desktop/FiPLSim Local.lnk", "");
        assert!(link.validate().is_err());
    }

    #[test]
    fn builder_sets_optional_fields() {
        let link = LinkDescriptor::local("D:/Desktop/FiPLSim Local.lnk", "C:/app.bat")
            .working_directory("C:/")
            .icon("C:/fiplsim.ico")
            .description("FiPLSim")
            .window_style(WindowStyle::Normal);

        assert_eq!(link.working_directory.as_deref(), Some(Path::new("C:/")));
        assert_eq!(link.icon_path.as_deref(), Some(Path::new("C:/fiplsim.ico")));
        assert_eq!(link.description.as_deref(), Some("FiPLSim"));
        assert_eq!(link.window_style.map(|style| style as i32), Some(1));
    }
}
