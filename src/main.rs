use azure_vnet_report::azure::{AzCli, NetworkSource, SnapshotSource};
use azure_vnet_report::logging::init_logging;
use azure_vnet_report::output::{render, report_banner, OutputFormat};
use azure_vnet_report::{build_report, AnyError, Config, ReportOutcome};
use std::process::ExitCode;
use std::sync::Arc;

/// Exit status when the scan found nothing to report.
const EXIT_EMPTY: u8 = 1;
/// Exit status for configuration or Azure CLI failures.
const EXIT_FATAL: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            return ExitCode::from(EXIT_FATAL);
        }
    };
    if let Err(e) = init_logging(&config.log_config) {
        eprintln!("❌ {e}");
        return ExitCode::from(EXIT_FATAL);
    }
    log::info!("#Start main() {config:?}");

    match run(&config).await {
        Ok(code) => code,
        Err(e) => {
            log::error!("report failed: {e}");
            config.format.progress(false).fail(&format!("{e}"));
            ExitCode::from(EXIT_FATAL)
        }
    }
}

async fn run(config: &Config) -> Result<ExitCode, AnyError> {
    let progress = config.format.progress(config.quiet);
    // Empty results are always announced, even when quiet.
    let notice = config.format.progress(false);
    let source: Arc<dyn NetworkSource> = match &config.snapshot_file {
        Some(path) => Arc::new(SnapshotSource::load(path)?),
        None => Arc::new(AzCli::new(config)?),
    };

    progress.info(&report_banner(chrono::Utc::now(), config.timezone));

    match build_report(source, config.concurrency, progress).await? {
        ReportOutcome::NoVnets => {
            notice.fail("No VNETs found in any enabled subscription");
            Ok(ExitCode::from(EXIT_EMPTY))
        }
        ReportOutcome::NoRows => {
            notice.fail("No subnet rows produced, every VNET was skipped");
            Ok(ExitCode::from(EXIT_EMPTY))
        }
        ReportOutcome::Rows(rows) => {
            progress.ok(&format!("Report ready: {} row(s)", rows.len()));
            if config.format == OutputFormat::Table && !config.quiet {
                println!();
            }
            print!("{}", render(&rows, config.format)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
