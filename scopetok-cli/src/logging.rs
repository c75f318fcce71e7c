//! Logger setup
//!
//! Stdout carries exactly one response, so every log line goes to stderr.

use log::LevelFilter;

pub fn base(level: LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new().level(level)
}

pub fn stderr(base: fern::Dispatch) -> fern::Dispatch {
    base.format(|out, message, record| {
        out.finish(format_args!(
            "{}: [{}] {}",
            record.level().to_string().to_lowercase(),
            record.target(),
            message
        ))
    })
    .chain(std::io::stderr())
}

/// Install the stderr logger. Fails if a logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    stderr(base(level)).apply()
}
