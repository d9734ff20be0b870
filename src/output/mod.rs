//! Output formatting for the VNet report.
//!
//! This module handles formatting and outputting report rows:
//! - [`terminal`] - Aligned text table (default)
//! - [`csv`] - CSV output
//! - [`progress`] - Status messages while the report is built

mod csv;
mod progress;
mod terminal;

use crate::models::{ReportRow, HEADERS};
use crate::AnyError;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub use csv::render_csv;
pub use progress::Progress;
pub use terminal::{format_field, render_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl OutputFormat {
    /// Where progress goes so that machine-readable output stays clean on stdout.
    pub fn progress(&self, quiet: bool) -> Progress {
        match (quiet, self) {
            (true, _) => Progress::Silent,
            (false, OutputFormat::Table) => Progress::Stdout,
            (false, _) => Progress::Stderr,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}', expected table, csv or json")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// One row as a JSON object keyed by the column headers.
#[derive(Serialize)]
struct JsonRow<'a> {
    #[serde(rename = "Subscription")]
    subscription: &'a str,
    #[serde(rename = "VNET_Name")]
    vnet_name: &'a str,
    #[serde(rename = "ResourceGroup")]
    resource_group: &'a str,
    #[serde(rename = "AddressSpace")]
    address_space: &'a str,
    #[serde(rename = "Subnet")]
    subnet: &'a str,
    #[serde(rename = "SubnetAddressPrefix")]
    subnet_address_prefix: &'a str,
}

impl<'a> From<&'a ReportRow> for JsonRow<'a> {
    fn from(row: &'a ReportRow) -> Self {
        let [subscription, vnet_name, resource_group, address_space, subnet, subnet_address_prefix] =
            row.cells();
        JsonRow {
            subscription,
            vnet_name,
            resource_group,
            address_space,
            subnet,
            subnet_address_prefix,
        }
    }
}

pub fn render_json(rows: &[ReportRow]) -> Result<String, AnyError> {
    let json_rows: Vec<JsonRow> = rows.iter().map(JsonRow::from).collect();
    let mut json = serde_json::to_string_pretty(&json_rows)?;
    json.push('\n');
    Ok(json)
}

/// Title line of the report, stamped in the configured time zone.
pub fn report_banner(now: DateTime<Utc>, tz: Tz) -> String {
    format!(
        "Azure VNET / subnet report, {}",
        now.with_timezone(&tz).format("%Y-%m-%d %H:%M:%S %Z")
    )
}

/// Render rows in the requested format.
pub fn render(rows: &[ReportRow], format: OutputFormat) -> Result<String, AnyError> {
    log::debug!(
        "render {} rows as {format} ({} columns)",
        rows.len(),
        HEADERS.len()
    );
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Csv => Ok(render_csv(rows)),
        OutputFormat::Json => render_json(rows),
    }
}
