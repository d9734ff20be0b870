//! Azure CLI command execution.
//!
//! Provides utilities for running Azure CLI commands and parsing their output.

use crate::AnyError;
use colored::Colorize;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::process::Command;
use std::sync::OnceLock;

/// Largest stdout accepted from a single command.
pub const MAX_OUTPUT_BYTES: usize = 5_000_000;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Run a program with already split arguments and return its stdout.
///
/// # Returns
/// * `Ok(String)` - The stdout output on success
/// * `Err` - If the command fails to start, exits non-zero or produces too much output
pub fn run_args(program: &str, args: &[String]) -> Result<String, AnyError> {
    let cmd_line = format!("{program} {}", args.join(" "));
    log::debug!("run({cmd})", cmd = cmd_line.on_blue());

    let output = Command::new(program).args(args).output().map_err(|e| {
        log::error!("Command execution failed: {}", e);
        format!("Failed to execute '{program}': {e}")
    })?;

    if output.status.success() {
        log::debug!("Success output.stdout.len(): {}", output.stdout.len());

        if output.stdout.len() > MAX_OUTPUT_BYTES {
            return Err(format!(
                "Response too large: {} bytes for command: {cmd_line}",
                output.stdout.len()
            )
            .into());
        }
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd_line.on_blue()
        );
        return Err(format!("ERROR running {cmd_line}: {}", stderr.trim()).into());
    }

    let stdout = String::from_utf8(output.stdout).map_err(|e| format!("Invalid UTF-8: {}", e))?;

    Ok(stdout)
}

/// Decode command output, reporting the JSON path that failed.
pub fn parse_json<T: DeserializeOwned>(output: &str, what: &str) -> Result<T, AnyError> {
    let mut deserializer = serde_json::Deserializer::from_str(output);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::trace!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", output);
        format!("Error parsing JSON for {what}: path={} error={}", e.path(), e).into()
    })
}

/// Split a command string into owned, non-empty words.
pub fn split_command(cmd: &str) -> Vec<String> {
    split_and_strip(cmd)
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}
