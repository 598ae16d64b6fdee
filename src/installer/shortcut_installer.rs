use std::path::{Path, PathBuf};

use error_stack::ResultExt;
use log::{debug, info, trace, warn};

use crate::{
    installer::installer_header::{
        InstallReport, InstallerError, InstallerOptions, ResultInstallerErr, ShortcutInstaller,
    },
    shortcut::descriptor::{LinkDescriptor, WindowStyle},
    tomlConf::{
        config::ConfigProvider,
        configStruct::{Main, ShortcutsConfig},
    },
    utils::{
        icon::write_icon,
        init_logger::set_level,
        known_folders::{DesktopResolver, InstallDirResolver},
        launcher::write_launcher,
        mslink::ShortcutWriter,
    },
    CLOUD_DESCRIPTION, CLOUD_LINK_NAME, CLOUD_URL, ICON_FILENAME, LAUNCHER_FILENAME,
    LOCAL_DESCRIPTION, LOCAL_LINK_NAME,
};

impl ShortcutInstaller {
    pub fn new(
        desktop_resolver: Box<dyn DesktopResolver>,
        install_dir_resolver: Box<dyn InstallDirResolver>,
        config_provider: Box<dyn ConfigProvider>,
        writer: Box<dyn ShortcutWriter>,
        options: InstallerOptions,
    ) -> Self {
        Self {
            desktop_resolver,
            install_dir_resolver,
            config_provider,
            writer,
            options,
        }
    }

    /// Writes the local and the cloud shortcut onto the desktop.
    ///
    /// Nothing is written when either folder can't be resolved or the
    /// descriptors are invalid. A failed write is not retried.
    pub fn install(&self) -> ResultInstallerErr<InstallReport> {
        let desktop = self
            .desktop_resolver
            .desktop_dir()
            .change_context(InstallerError::DesktopNotFound)?;
        let install_dir = self
            .install_dir_resolver
            .install_dir()
            .change_context(InstallerError::InstallDirNotFound)?;
        debug!(
            "Desktop {} install dir {}",
            desktop.display(),
            install_dir.display()
        );

        let config = self.load_config(&install_dir)?;
        self.attach_logger(&config);

        let links = vec![
            local_link(&desktop, &install_dir, &config.main),
            cloud_link(&desktop, &install_dir, &config.main),
        ];
        links.iter().try_for_each(|link| -> ResultInstallerErr<()> {
            link.validate().change_context(InstallerError::InvalidDescriptor(
                link.file_path.display().to_string(),
            ))
        })?;

        let launcher_written = match self.options.write_launcher {
            true => write_launcher(&install_dir).change_context(InstallerError::LauncherError)?,
            false => None,
        };
        let icon_written = match self.options.write_icon {
            true => write_icon(&install_dir).change_context(InstallerError::IconError)?,
            false => None,
        };

        let missing_resources = missing_resources(&install_dir);
        missing_resources.iter().for_each(|path| {
            warn!(
                "{} not found, shortcut will point to a missing file",
                path.display()
            )
        });

        for link in &links {
            trace!("{:#?}", link);
            self.writer
                .write_link(link)
                .change_context(InstallerError::WriteFailed(
                    link.file_path.display().to_string(),
                ))?;
            info!("Shortcut created {}", link.file_path.display());
        }

        Ok(InstallReport {
            links,
            missing_resources,
            launcher_written,
            icon_written,
        })
    }

    fn load_config(&self, install_dir: &Path) -> ResultInstallerErr<ShortcutsConfig> {
        let config = self
            .config_provider
            .load_from_file(install_dir)
            .change_context(InstallerError::LoadConfigError)?;
        trace!("Full config: \n {:#?}", config);
        Ok(config)
    }

    fn attach_logger(&self, config: &ShortcutsConfig) {
        if self.options.level_from_cli {
            return;
        }
        if let Some(level) = config.main.error_level {
            set_level(level.into());
        }
    }
}

pub fn local_link(desktop: &Path, install_dir: &Path, main: &Main) -> LinkDescriptor {
    let name = main.local_link_name.as_deref().unwrap_or(LOCAL_LINK_NAME);
    LinkDescriptor::local(desktop.join(name), install_dir.join(LAUNCHER_FILENAME))
    .working_directory(install_dir)
    .icon(install_dir.join(ICON_FILENAME))
    .description(LOCAL_DESCRIPTION)
    .window_style(WindowStyle::Normal)
}

pub fn cloud_link(desktop: &Path, install_dir: &Path, main: &Main) -> LinkDescriptor {
    let name = main.cloud_link_name.as_deref().unwrap_or(CLOUD_LINK_NAME);
    let url = main.cloud_url.as_deref().unwrap_or(CLOUD_URL);
    LinkDescriptor::url(desktop.join(name), url)
        .icon(install_dir.join(ICON_FILENAME))
        .description(CLOUD_DESCRIPTION)
}

fn missing_resources(install_dir: &Path) -> Vec<PathBuf> {
    [LAUNCHER_FILENAME, ICON_FILENAME]
        .iter()
        .map(|name| install_dir.join(name))
        .filter(|path| !path.exists())
        .collect()
}
