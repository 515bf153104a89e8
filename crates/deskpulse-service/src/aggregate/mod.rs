//! Aggregation engine.
//!
//! Independent reducers over a filtered [`TicketView`](deskpulse_entity::TicketView).
//! Each one treats an empty view as a valid input and returns an empty or
//! zero-filled result.

mod distribution;
mod kpi;
mod options;
mod sla;
mod trend;
mod weekday;

pub use distribution::{CategoryCount, Dimension, distribution};
pub use kpi::{KpiSummary, kpi_summary};
pub use options::{FilterOptions, filter_options};
pub use sla::{SlaBucket, sla_by_priority};
pub use trend::{DailyCount, TrendSeries, trend_series};
pub use weekday::{WEEKDAYS, WeekdayCount, weekday_distribution};

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part / whole` as a percentage, or `None` when `whole` is zero.
pub(crate) fn percentage(part: usize, whole: usize) -> Option<f64> {
    (whole > 0).then(|| part as f64 / whole as f64 * 100.0)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(83.333), 83.3);
        assert_eq!(round1(-1.26), -1.3);
    }

    #[test]
    fn test_percentage_of_nothing_is_undefined() {
        assert_eq!(percentage(0, 0), None);
        assert_eq!(percentage(1, 4), Some(25.0));
    }
}
