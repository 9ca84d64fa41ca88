use super::{error::WriteError, uuid::generate_uuid};
use crate::structs::toml::Output;
use log::{error, LevelFilter};
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::{create_dir_all, File};

/// Map a logging level string to a `LevelFilter`. Unknown levels default to `Warn`
pub fn log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        _ => LevelFilter::Warn,
    }
}

/// Create log output file and logging level based on TOML `Output` configuration
pub(crate) fn create_log_file(output: &Output) -> Result<(File, LevelFilter), WriteError> {
    let path = &output.directory;
    if let Err(err) = create_dir_all(path) {
        error!("[lnkcore] Failed to create logging output directory for {path}. Error: {err:?}");
        return Err(WriteError::CreateDirectory);
    }

    let log_file = match File::create(format!("{path}/{}.log", generate_uuid())) {
        Ok(result) => result,
        Err(err) => {
            error!("[lnkcore] Failed to create log file at {path}. Error: {err:?}");
            return Err(WriteError::LogFile);
        }
    };

    let level = match &output.logging {
        Some(level) => log_level(level),
        None => LevelFilter::Warn,
    };

    Ok((log_file, level))
}

/**
 * Install the global logger. `terminal` adds a terminal logger at that level.
 * An `Output` with `logging` set adds a log file in its directory.
 * Both share one `CombinedLogger`, the global logger can only be set once
 */
pub fn setup_logging(
    terminal: Option<LevelFilter>,
    output: Option<&Output>,
) -> Result<(), WriteError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if let Some(level) = terminal {
        loggers.push(TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }

    if let Some(output) = output.filter(|entry| entry.logging.is_some()) {
        let (log_file, level) = create_log_file(output)?;
        loggers.push(WriteLogger::new(level, Config::default(), log_file));
    }

    if loggers.is_empty() {
        return Ok(());
    }

    if let Err(err) = CombinedLogger::init(loggers) {
        error!("[lnkcore] Could not set logger: {err:?}");
        return Err(WriteError::SetLogger);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{create_log_file, log_level, setup_logging};
    use crate::structs::toml::Output;
    use log::LevelFilter;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level("debug"), LevelFilter::Debug);
        assert_eq!(log_level("INFO"), LevelFilter::Info);
        assert_eq!(log_level("error"), LevelFilter::Error);
        assert_eq!(log_level("verbose"), LevelFilter::Warn);
    }

    #[test]
    fn test_create_log_file() {
        let test = Output {
            directory: String::from("tmp/logging"),
            logging: Some(String::from("info")),
        };

        let (_, level) = create_log_file(&test).unwrap();
        assert_eq!(level, LevelFilter::Info);
    }

    #[test]
    fn test_setup_logging_nothing_requested() {
        let test = Output {
            directory: String::from("tmp/logging"),
            logging: None,
        };
        setup_logging(None, Some(&test)).unwrap();
        setup_logging(None, None).unwrap();
    }
}
