use clap::{Parser, ValueEnum};
use pkg_client::{KubeQuotaSource, QuotaSource, StaticQuotaSource};
use pkg_constants::output::DEFAULT_LOG_FILTER;
use pkg_constants::paths::DEFAULT_CONFIG;
use pkg_controllers::{QuotaWatchController, RunSummary};
use pkg_types::config::{QuotaWatchConfig, load_config_file};
use std::io::BufWriter;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(
    name = "quota-watch",
    about = "Report ResourceQuota utilization as JSON log lines"
)]
struct Cli {
    /// Path to YAML config file
    #[arg(default_value = DEFAULT_CONFIG)]
    config: String,

    /// Format of diagnostic logs written to stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Read quota statuses from a YAML file instead of the cluster
    #[arg(long)]
    status_file: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Compact,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let config = load_config_file(&cli.config)?;
    info!("Config file: {}", cli.config);

    let summary = match &cli.status_file {
        Some(path) => run(config, StaticQuotaSource::load_file(path)?).await?,
        None => run(config, KubeQuotaSource::from_env().await?).await?,
    };

    if !summary.is_success() {
        anyhow::bail!(
            "{} of {} quota sections failed",
            summary.failed,
            summary.sections
        );
    }
    Ok(())
}

async fn run<S: QuotaSource>(config: QuotaWatchConfig, source: S) -> anyhow::Result<RunSummary> {
    let controller = QuotaWatchController::new(config, source);
    let mut out = BufWriter::new(std::io::stdout());
    controller.run_once(&mut out).await
}

// Records own stdout; diagnostics go to stderr.
fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["quota-watch"]);
        assert_eq!(cli.config, DEFAULT_CONFIG);
        assert!(matches!(cli.log_format, LogFormat::Compact));
        assert!(cli.status_file.is_none());
    }

    #[test]
    fn explicit_arguments() {
        let cli = Cli::parse_from([
            "quota-watch",
            "/tmp/config.yaml",
            "--log-format",
            "json",
            "--status-file",
            "/tmp/status.yaml",
        ]);
        assert_eq!(cli.config, "/tmp/config.yaml");
        assert!(matches!(cli.log_format, LogFormat::Json));
        assert_eq!(cli.status_file.as_deref(), Some("/tmp/status.yaml"));
    }
}
