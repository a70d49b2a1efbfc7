use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

/// Initializes a colored terminal logger at the given level. Call once at
/// program start; a second call returns the set-logger error.
pub fn init_console_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
}
