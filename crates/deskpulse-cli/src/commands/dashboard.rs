//! Dashboard figures and breakdowns.

use chrono::Utc;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use deskpulse_core::config::AppConfig;
use deskpulse_core::error::AppError;
use deskpulse_service::{ChartData, Dimension};

use super::filter::FilterArgs;
use crate::output::{self, OutputFormat};

/// Breakdown dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BreakdownBy {
    Priority,
    Status,
    Department,
    Category,
    Weekday,
    Sla,
    Trend,
}

/// Arguments for the breakdown command
#[derive(Debug, Args)]
pub struct BreakdownArgs {
    /// Dimension to group by
    #[arg(long, value_enum)]
    pub by: BreakdownBy,
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Display row for counted groups
#[derive(Debug, Serialize, Tabled)]
struct CountRow {
    /// Group label
    label: String,
    /// Tickets in the group
    count: usize,
}

/// Display row for SLA compliance
#[derive(Debug, Serialize, Tabled)]
struct SlaRow {
    priority: String,
    total: usize,
    met: usize,
    percentage: String,
    below_target: bool,
}

/// Display row for the daily trend
#[derive(Debug, Serialize, Tabled)]
struct TrendRow {
    date: String,
    created: usize,
    resolved: usize,
}

/// Execute the kpis command
pub fn kpis(args: &FilterArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let criteria = args.criteria()?;
    let session = super::load_session(config)?;
    let kpis = session.kpis(&criteria, Utc::now());

    match format {
        OutputFormat::Json => output::print_json(&kpis),
        OutputFormat::Table => {
            output::print_kv("Total tickets", &kpis.total_tickets.to_string());
            output::print_kv("Open tickets", &kpis.open_tickets.to_string());
            output::print_kv(
                "SLA compliance",
                &format!(
                    "{:.1}% (target {:.1}%)",
                    kpis.sla_compliance_percent, kpis.sla_target_percent
                ),
            );
            output::print_kv(
                "Avg resolution (h)",
                &output::opt_number(kpis.avg_resolution_hours),
            );
            if !kpis.target_met {
                output::print_warning("SLA compliance is below target");
            }
        }
    }
    Ok(())
}

/// Execute the breakdown command
pub fn breakdown(
    args: &BreakdownArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let criteria = args.filter.criteria()?;
    let session = super::load_session(config)?;

    match args.by {
        BreakdownBy::Priority | BreakdownBy::Status | BreakdownBy::Department | BreakdownBy::Category => {
            let dimension = match args.by {
                BreakdownBy::Priority => Dimension::Priority,
                BreakdownBy::Status => Dimension::Status,
                BreakdownBy::Department => Dimension::Department,
                _ => Dimension::Category,
            };
            print_chart(session.distribution(&criteria, dimension), format, |counts| {
                counts
                    .into_iter()
                    .map(|c| CountRow {
                        label: c.label,
                        count: c.count,
                    })
                    .collect()
            });
        }
        BreakdownBy::Weekday => {
            print_chart(session.weekday(&criteria), format, |days| {
                days.into_iter()
                    .map(|d| CountRow {
                        label: d.day.to_string(),
                        count: d.count,
                    })
                    .collect()
            });
        }
        BreakdownBy::Sla => {
            print_chart(session.sla_compliance(&criteria, Utc::now()), format, |buckets| {
                buckets
                    .into_iter()
                    .map(|b| SlaRow {
                        priority: b.priority.to_string(),
                        total: b.total,
                        met: b.met,
                        percentage: format!("{:.1}%", b.percentage),
                        below_target: b.below_target,
                    })
                    .collect()
            });
        }
        BreakdownBy::Trend => {
            print_chart(session.trends(&criteria), format, |series| {
                merge_trend(&series.created, &series.resolved)
            });
        }
    }
    Ok(())
}

fn print_chart<T, R>(chart: ChartData<T>, format: OutputFormat, rows: impl FnOnce(T) -> Vec<R>)
where
    T: Serialize,
    R: Serialize + Tabled,
{
    match (format, chart) {
        (OutputFormat::Json, chart) => output::print_json(&chart),
        (OutputFormat::Table, ChartData::NoData) => {
            output::print_warning("No tickets match the selected filters");
        }
        (OutputFormat::Table, ChartData::Ok(data)) => output::print_list(&rows(data), format),
    }
}

// Table display only: the two series stay independent in the JSON output.
fn merge_trend(
    created: &[deskpulse_service::DailyCount],
    resolved: &[deskpulse_service::DailyCount],
) -> Vec<TrendRow> {
    let mut days: std::collections::BTreeMap<chrono::NaiveDate, (usize, usize)> =
        std::collections::BTreeMap::new();
    for d in created {
        days.entry(d.date).or_default().0 = d.count;
    }
    for d in resolved {
        days.entry(d.date).or_default().1 = d.count;
    }
    days.into_iter()
        .map(|(date, (created, resolved))| TrendRow {
            date: date.to_string(),
            created,
            resolved,
        })
        .collect()
}
