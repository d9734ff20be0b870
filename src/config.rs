//! Runtime configuration read from environment variables.
//!
//! `main` loads an optional `.env` file first, so every setting can live there.

use crate::output::OutputFormat;
use crate::AnyError;
use chrono_tz::Tz;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_AZ_COMMAND: &str = "VNET_REPORT_AZ_COMMAND";
pub const ENV_RETRIES: &str = "VNET_REPORT_RETRIES";
pub const ENV_RETRY_DELAY_MS: &str = "VNET_REPORT_RETRY_DELAY_MS";
pub const ENV_CONCURRENCY: &str = "VNET_REPORT_CONCURRENCY";
pub const ENV_FORMAT: &str = "VNET_REPORT_FORMAT";
pub const ENV_SNAPSHOT: &str = "VNET_REPORT_SNAPSHOT";
pub const ENV_TZ: &str = "VNET_REPORT_TZ";
pub const ENV_QUIET: &str = "VNET_REPORT_QUIET";
pub const ENV_LOG_CONFIG: &str = "VNET_REPORT_LOG_CONFIG";

/// Base pause between retries of a failed az query.
pub const RETRY_DELAY_MSEC: u64 = 500;

#[derive(Debug, Clone)]
pub struct Config {
    /// Command used to invoke the Azure CLI, e.g. `az` or `/opt/az/bin/az --only-show-errors`.
    pub az_command: String,
    /// Extra attempts after a failed query.
    pub retries: u32,
    pub retry_delay_ms: u64,
    /// Max in-flight queries, 1 means sequential.
    pub concurrency: usize,
    pub format: OutputFormat,
    /// Read from this JSON snapshot instead of calling az.
    pub snapshot_file: Option<String>,
    /// Zone of the report timestamp.
    pub timezone: Tz,
    pub quiet: bool,
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            az_command: "az".to_string(),
            retries: 2,
            retry_delay_ms: RETRY_DELAY_MSEC,
            concurrency: 1,
            format: OutputFormat::Table,
            snapshot_file: None,
            timezone: chrono_tz::Pacific::Auckland,
            quiet: false,
            log_config: "log4rs.yml".to_string(),
        }
    }
}

impl Config {
    /// Build the config from the process environment.
    pub fn from_env() -> Result<Config, AnyError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Unset and blank values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, AnyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Config::default();

        let concurrency = parse_var(get(ENV_CONCURRENCY), ENV_CONCURRENCY, defaults.concurrency)?;
        if concurrency == 0 {
            return Err(format!("{ENV_CONCURRENCY} must be at least 1").into());
        }

        Ok(Config {
            az_command: get(ENV_AZ_COMMAND).unwrap_or(defaults.az_command),
            retries: parse_var(get(ENV_RETRIES), ENV_RETRIES, defaults.retries)?,
            retry_delay_ms: parse_var(
                get(ENV_RETRY_DELAY_MS),
                ENV_RETRY_DELAY_MS,
                defaults.retry_delay_ms,
            )?,
            concurrency,
            format: parse_var(get(ENV_FORMAT), ENV_FORMAT, defaults.format)?,
            snapshot_file: get(ENV_SNAPSHOT),
            timezone: parse_var(get(ENV_TZ), ENV_TZ, defaults.timezone)?,
            quiet: match get(ENV_QUIET) {
                Some(v) => parse_bool(&v).ok_or(format!("{ENV_QUIET}: invalid boolean '{v}'"))?,
                None => defaults.quiet,
            },
            log_config: get(ENV_LOG_CONFIG).unwrap_or(defaults.log_config),
        })
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

fn parse_var<T>(value: Option<String>, key: &str, default: T) -> Result<T, AnyError>
where
    T: FromStr,
    T::Err: Display,
{
    match value {
        Some(v) => v
            .parse::<T>()
            .map_err(|e| format!("{key}: invalid value '{v}': {e}").into()),
        None => Ok(default),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
