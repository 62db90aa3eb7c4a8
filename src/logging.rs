//! Logger setup for the binary.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Default log4rs configuration file, looked up in the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

const STDERR_PATTERN: &str = "{d(%H:%M:%S)} {h({l:5})} {t} - {m}{n}";

/// Initialise log4rs from `config_file` when it exists, otherwise log to stderr at `level`.
pub fn init(config_file: &str, level: LevelFilter) -> Result<(), Box<dyn Error>> {
    if Path::new(config_file).exists() {
        log4rs::init_file(config_file, Default::default())?;
        log::debug!("Logging configured from {config_file}");
    } else {
        log4rs::init_config(stderr_config(level)?)?;
        log::debug!("{config_file} not found, logging to stderr at {level}");
    }
    Ok(())
}

/// Console-only configuration writing to stderr so stdout stays machine readable.
pub fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
