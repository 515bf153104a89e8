//! Day-of-week distribution.

use chrono::Weekday;
use serde::Serialize;

use deskpulse_entity::TicketView;

/// Canonical display order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Tickets created on one day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayCount {
    pub day: &'static str,
    pub count: usize,
}

/// Count tickets by creation weekday.
///
/// Always seven entries, Monday first, with zero for days without tickets.
pub fn weekday_distribution(view: &TicketView<'_>) -> Vec<WeekdayCount> {
    let mut counts = [0usize; 7];
    for ticket in view {
        counts[ticket.created_weekday().num_days_from_monday() as usize] += 1;
    }

    WEEKDAYS
        .iter()
        .zip(counts)
        .map(|(day, count)| WeekdayCount {
            day: day_name(*day),
            count,
        })
        .collect()
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
