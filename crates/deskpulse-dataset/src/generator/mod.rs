//! Sample ticket generator.
//!
//! Produces tickets with realistic distributions: weighted priorities,
//! statuses, categories, and departments, SLA targets by priority, and
//! resolution times scattered around the target so that some tickets meet
//! their SLA and some do not.

mod vocabulary;

use chrono::{DateTime, Duration, DurationRound, Utc};
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use deskpulse_core::config::generator::GeneratorConfig;
use deskpulse_core::error::AppError;
use deskpulse_core::result::AppResult;
use deskpulse_entity::{Priority, Ticket, TicketStatus};

const PRIORITY_WEIGHTS: [(Priority, f64); 4] = [
    (Priority::Low, 0.40),
    (Priority::Medium, 0.35),
    (Priority::High, 0.20),
    (Priority::Critical, 0.05),
];

const STATUS_WEIGHTS: [(TicketStatus, f64); 5] = [
    (TicketStatus::Open, 0.15),
    (TicketStatus::InProgress, 0.25),
    (TicketStatus::Resolved, 0.35),
    (TicketStatus::Closed, 0.20),
    (TicketStatus::Pending, 0.05),
];

const CATEGORY_WEIGHTS: [(&str, f64); 8] = [
    ("Hardware", 0.20),
    ("Software", 0.25),
    ("Network", 0.15),
    ("Security", 0.10),
    ("Access", 0.12),
    ("Email", 0.08),
    ("Printer", 0.06),
    ("Phone", 0.04),
];

const DEPARTMENT_WEIGHTS: [(&str, f64); 7] = [
    ("IT", 0.30),
    ("HR", 0.15),
    ("Finance", 0.12),
    ("Marketing", 0.13),
    ("Sales", 0.15),
    ("Operations", 0.12),
    ("Legal", 0.03),
];

const SATISFACTION_WEIGHTS: [(u8, f64); 5] = [(1, 0.05), (2, 0.10), (3, 0.20), (4, 0.40), (5, 0.25)];

/// Longest supported lookback window, in days.
pub const MAX_LOOKBACK_DAYS: i64 = 36_500;

/// Tunables for generation.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// How far back creation dates may reach, in days. Clamped to
    /// `1..=MAX_LOOKBACK_DAYS` when sampling.
    pub lookback_days: i64,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self { lookback_days: 182 }
    }
}

impl From<&GeneratorConfig> for GeneratorOptions {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            lookback_days: config.lookback_days.clamp(1, MAX_LOOKBACK_DAYS),
        }
    }
}

/// A weighted pick over a fixed set of values.
#[derive(Debug, Clone)]
struct WeightedChoice<T> {
    values: Vec<T>,
    index: WeightedIndex<f64>,
}

impl<T: Copy> WeightedChoice<T> {
    fn new(table: &[(T, f64)]) -> AppResult<Self> {
        let index = WeightedIndex::new(table.iter().map(|(_, w)| *w))
            .map_err(|e| AppError::internal(format!("Invalid generator weights: {e}")))?;
        Ok(Self {
            values: table.iter().map(|(v, _)| *v).collect(),
            index,
        })
    }

    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.values[self.index.sample(rng)]
    }
}

/// Generates synthetic tickets.
#[derive(Debug)]
pub struct TicketGenerator<R = StdRng> {
    options: GeneratorOptions,
    rng: R,
    priorities: WeightedChoice<Priority>,
    statuses: WeightedChoice<TicketStatus>,
    categories: WeightedChoice<&'static str>,
    departments: WeightedChoice<&'static str>,
    satisfaction: WeightedChoice<u8>,
}

impl TicketGenerator<StdRng> {
    /// A generator with a fixed seed; the same seed and `now` give the same tickets.
    pub fn seeded(options: GeneratorOptions, seed: u64) -> AppResult<Self> {
        Self::with_rng(options, StdRng::seed_from_u64(seed))
    }

    /// A generator seeded from the operating system.
    pub fn from_entropy(options: GeneratorOptions) -> AppResult<Self> {
        Self::with_rng(options, StdRng::from_entropy())
    }

    /// Build from the generator configuration section.
    pub fn from_config(config: &GeneratorConfig) -> AppResult<Self> {
        let options = GeneratorOptions::from(config);
        match config.seed {
            Some(seed) => Self::seeded(options, seed),
            None => Self::from_entropy(options),
        }
    }
}

impl<R: Rng> TicketGenerator<R> {
    /// A generator drawing from the given random source.
    pub fn with_rng(options: GeneratorOptions, rng: R) -> AppResult<Self> {
        Ok(Self {
            options,
            rng,
            priorities: WeightedChoice::new(&PRIORITY_WEIGHTS)?,
            statuses: WeightedChoice::new(&STATUS_WEIGHTS)?,
            categories: WeightedChoice::new(&CATEGORY_WEIGHTS)?,
            departments: WeightedChoice::new(&DEPARTMENT_WEIGHTS)?,
            satisfaction: WeightedChoice::new(&SATISFACTION_WEIGHTS)?,
        })
    }

    /// Generate `count` tickets created within the lookback window before `now`.
    pub fn generate(&mut self, count: usize, now: DateTime<Utc>) -> Vec<Ticket> {
        let now = now.duration_trunc(Duration::seconds(1)).unwrap_or(now);
        (1..=count).map(|n| self.ticket(n, now)).collect()
    }

    fn ticket(&mut self, number: usize, now: DateTime<Utc>) -> Ticket {
        let window = self.options.lookback_days.clamp(1, MAX_LOOKBACK_DAYS) * 24 * 3600;
        let created_date = now - Duration::seconds(self.rng.gen_range(0..=window));

        let priority = self.priorities.pick(&mut self.rng);
        let status = self.statuses.pick(&mut self.rng);
        let category = self.categories.pick(&mut self.rng);
        let department = self.departments.pick(&mut self.rng);
        let sla_target_hours = priority.default_sla_target_hours();

        let (resolved_date, resolution_hours) = if status.is_resolved() {
            let hours = self.resolution_hours(sla_target_hours, created_date, now);
            let resolved = created_date + Duration::seconds((hours * 3600.0).round() as i64);
            (Some(resolved), Some(hours))
        } else {
            (None, None)
        };

        let assignee = (status != TicketStatus::Open).then(|| self.person());
        let customer_satisfaction =
            (status == TicketStatus::Closed).then(|| self.satisfaction.pick(&mut self.rng));

        Ticket {
            ticket_id: format!("TKT-{number:06}"),
            title: self.pick(vocabulary::titles_for(category)).to_string(),
            description: format!(
                "{} {}",
                self.pick(vocabulary::DESCRIPTION_OPENERS),
                self.pick(vocabulary::DESCRIPTION_CLOSERS)
            ),
            priority,
            status,
            category: category.to_string(),
            department: department.to_string(),
            requester: self.person(),
            assignee,
            created_date,
            resolved_date,
            sla_target_hours,
            resolution_hours,
            customer_satisfaction,
        }
    }

    /// Resolution time around 80% of the target, at least one hour, never
    /// past `now`. Rounded to hundredths.
    fn resolution_hours(&mut self, target: f64, created: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
        let mean = target * 0.8;
        let sampled = Normal::new(mean, target * 0.4)
            .map(|normal| normal.sample(&mut self.rng))
            .unwrap_or(mean);
        let available = (now - created).num_seconds() as f64 / 3600.0;
        let hours = sampled.max(1.0).min(available.max(0.0));
        (hours * 100.0).floor() / 100.0
    }

    fn person(&mut self) -> String {
        format!(
            "{} {}",
            self.pick(vocabulary::FIRST_NAMES),
            self.pick(vocabulary::LAST_NAMES)
        )
    }

    fn pick(&mut self, words: &'static [&'static str]) -> &'static str {
        words.choose(&mut self.rng).copied().unwrap_or_default()
    }
}
