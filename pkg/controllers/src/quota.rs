use futures_util::future::join_all;
use pkg_client::QuotaSource;
use pkg_quota::evaluate;
use pkg_types::config::{QuotaSection, QuotaWatchConfig};
use pkg_types::quota::{QuotaStatus, Severity, UsageRecord};
use std::io::Write;
use tracing::{error, info};

/// Outcome of a single pass over all configured sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sections: usize,
    pub failed: usize,
    pub records: usize,
    pub warnings: usize,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Quota watch controller.
/// Evaluates every configured `ResourceQuota` and writes one JSON line per
/// resource.
pub struct QuotaWatchController<S> {
    config: QuotaWatchConfig,
    source: S,
}

impl<S: QuotaSource> QuotaWatchController<S> {
    pub fn new(config: QuotaWatchConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Run one pass, writing records to `out` in configuration order.
    ///
    /// A section that cannot be fetched or evaluated is logged and skipped as
    /// a whole; the others are still emitted. Only a failure to write `out`
    /// aborts the pass.
    pub async fn run_once<W: Write>(&self, out: &mut W) -> anyhow::Result<RunSummary> {
        info!(
            "QuotaWatchController pass started ({} sections, defaultThreshold={})",
            self.config.quotas.len(),
            self.config.default_threshold
        );

        // Sections are independent, fetch them together
        let statuses = join_all(
            self.config
                .quotas
                .iter()
                .map(|s| self.source.fetch(&s.namespace, &s.resource_quota)),
        )
        .await;

        let mut summary = RunSummary {
            sections: self.config.quotas.len(),
            ..Default::default()
        };

        for (section, status) in self.config.quotas.iter().zip(statuses) {
            let records = match status.and_then(|s| self.evaluate_section(section, &s)) {
                Ok(records) => records,
                Err(e) => {
                    error!(
                        "Quota {}/{} skipped: {:#}",
                        section.namespace, section.resource_quota, e
                    );
                    summary.failed += 1;
                    continue;
                }
            };

            for record in &records {
                writeln!(out, "{}", record.to_json_line()?)?;
                if record.level == Severity::Warning {
                    summary.warnings += 1;
                }
            }
            summary.records += records.len();
        }
        out.flush()?;

        info!(
            "QuotaWatchController pass finished: {} records ({} warnings), {}/{} sections failed",
            summary.records, summary.warnings, summary.failed, summary.sections
        );
        Ok(summary)
    }

    fn evaluate_section(
        &self,
        section: &QuotaSection,
        status: &QuotaStatus,
    ) -> anyhow::Result<Vec<UsageRecord>> {
        let records = evaluate(
            &section.namespace,
            &section.resource_quota,
            &status.hard,
            &status.used,
            section.threshold.as_ref(),
            self.config.default_threshold,
        )?;
        Ok(records)
    }
}
