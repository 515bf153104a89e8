//! Daily created/resolved time series.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use deskpulse_entity::TicketView;

/// Tickets counted on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Two independent series: tickets created per day and tickets resolved per day.
///
/// A day appears in a series only if it has a nonzero count there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrendSeries {
    pub created: Vec<DailyCount>,
    pub resolved: Vec<DailyCount>,
}

impl TrendSeries {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.resolved.is_empty()
    }
}

/// Count creations and resolutions per calendar day, in date order.
pub fn trend_series(view: &TicketView<'_>) -> TrendSeries {
    TrendSeries {
        created: daily(view.iter().map(|t| t.created_day())),
        resolved: daily(view.iter().filter_map(|t| t.resolved_day())),
    }
}

fn daily(days: impl Iterator<Item = NaiveDate>) -> Vec<DailyCount> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for day in days {
        *counts.entry(day).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}
