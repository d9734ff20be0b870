//! log4rs setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {h({l}):5.5} {M} - {m}{n}";

/// Initialise log4rs from `config_file`, or log warnings to stderr if the file is missing.
pub fn init_logging(config_file: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(config_file).exists() {
        log4rs::init_file(config_file, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {config_file}: {e}"))?;
        log::debug!("logging configured from {config_file}");
        return Ok(());
    }

    log4rs::init_config(fallback_config()?)?;
    log::debug!("{config_file} not found, logging warnings to stderr");
    Ok(())
}

fn fallback_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_config_builds() {
        let config = fallback_config().expect("fallback config");
        assert_eq!(config.root().level(), LevelFilter::Warn);
        assert_eq!(config.appenders().len(), 1);
    }
}
