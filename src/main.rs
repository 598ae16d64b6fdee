use args::ArgsClap;

use clap::Parser;
use error_stack::Report;
use installer::installer_header::{InstallerError, InstallerOptions, ShortcutInstaller};
use log::LevelFilter;
use tomlConf::config::ShortcutsConfigProvider;
use utils::{
    init_logger::init_logger,
    known_folders::{DesktopResolver, FixedFolder, InstallDirResolver, KnownFolders},
    mslink::MsLinkWriter,
};

pub mod shortcut {
    pub mod descriptor;
}
mod utils {
    pub mod icon;
    pub mod init_logger;
    pub mod known_folders;
    pub mod launcher;
    pub mod mslink;
}
pub mod installer {
    pub mod installer_header;
    pub mod shortcut_installer;
}
mod args;
mod tomlConf {
    pub mod config;
    pub mod configStruct;
}
#[cfg(test)]
mod tests {
    pub mod integration;
    pub mod resolver_mock;
    pub mod writer_mock;
}

static LOCAL_LINK_NAME: &str = "FiPLSim Local.lnk";
static CLOUD_LINK_NAME: &str = "FiPLSim Cloud.lnk";
static LAUNCHER_FILENAME: &str = "launch_fiplsim.bat";
static ICON_FILENAME: &str = "fiplsim.ico";
static CLOUD_URL: &str = "https://fiplsim.streamlit.app";
static LOCAL_DESCRIPTION: &str = "FiPLSim - Fire Protection Pipe Let Simulator (Local)";
static CLOUD_DESCRIPTION: &str = "FiPLSim - Fire Protection Pipe Let Simulator (Cloud)";

fn main() -> Result<(), Report<InstallerError>> {
    let args = ArgsClap::parse();
    init_logger(args.level.map_or(LevelFilter::Warn, LevelFilter::from));

    let desktop_resolver: Box<dyn DesktopResolver> = match args.desktop {
        Some(dir) => Box::new(FixedFolder(dir)),
        None => Box::new(KnownFolders),
    };
    let install_dir_resolver: Box<dyn InstallDirResolver> = match args.base_dir {
        Some(dir) => Box::new(FixedFolder(dir)),
        None => Box::new(KnownFolders),
    };

    let installer = ShortcutInstaller::new(
        desktop_resolver,
        install_dir_resolver,
        Box::new(ShortcutsConfigProvider::new(args.config)),
        Box::new(MsLinkWriter),
        InstallerOptions {
            write_launcher: args.write_launcher,
            write_icon: args.write_icon,
            level_from_cli: args.level.is_some(),
        },
    );

    let report = installer.install()?;
    println!("{}", report);
    Ok(())
}
