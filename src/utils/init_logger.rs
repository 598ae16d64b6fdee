use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

/// Logs go to stderr so stdout only carries the completion message.
/// The logger itself passes everything, `set_level` does the filtering.
pub fn init_logger(level: LevelFilter) {
    match CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]) {
        Ok(it) => it,
        Err(err) => {
            eprintln!("Logger error {:?}", err);
        }
    };
    set_level(level);
}

pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}
