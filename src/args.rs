use std::path::PathBuf;

use clap::Parser;

use crate::tomlConf::configStruct::ErrorLevel;

/// Creates the FiPLSim Local and FiPLSim Cloud desktop shortcuts
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct ArgsClap {
    /// Log level, overrides the config file. One of: info, debug, warn, error, trace
    #[clap(short, long, value_enum)]
    pub level: Option<ErrorLevel>,

    /// Config file, defaults to fiplsim_shortcuts.toml next to the executable
    #[clap(short, long, value_parser)]
    pub config: Option<PathBuf>,

    /// Write the shortcuts into this folder instead of the desktop
    #[clap(long, value_parser)]
    pub desktop: Option<PathBuf>,

    /// Folder holding launch_fiplsim.bat and fiplsim.ico, defaults to the executable's folder
    #[clap(long, value_parser)]
    pub base_dir: Option<PathBuf>,

    /// Create launch_fiplsim.bat in the base folder if it is missing
    #[clap(long)]
    pub write_launcher: bool,

    /// Create fiplsim.ico in the base folder if it is missing
    #[clap(long)]
    pub write_icon: bool,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::ArgsClap;
    use crate::tomlConf::configStruct::ErrorLevel;

    #[test]
    fn no_flags_means_defaults() {
        let args = ArgsClap::try_parse_from(["fiplsim-shortcuts"]).unwrap();
        assert_eq!(args.level, None);
        assert_eq!(args.config, None);
        assert_eq!(args.desktop, None);
        assert_eq!(args.base_dir, None);
        assert!(!args.write_launcher);
        assert!(!args.write_icon);
    }

    #[test]
    fn parses_all_flags() {
        let args = ArgsClap::try_parse_from([
            "fiplsim-shortcuts",
            "--level",
            "debug",
            "--desktop",
            "D:/Desktop",
            "--base-dir",
            "C:/FiPLSim",
            "--write-launcher",
            "--write-icon",
        ])
        .unwrap();
        assert_eq!(args.level, Some(ErrorLevel::Debug));
        assert_eq!(args.desktop, Some(PathBuf::from("D:/Desktop")));
        assert_eq!(args.base_dir, Some(PathBuf::from("C:/FiPLSim")));
        assert!(args.write_launcher);
        assert!(args.write_icon);
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(ArgsClap::try_parse_from(["fiplsim-shortcuts", "-l", "loud"]).is_err());
    }
}
