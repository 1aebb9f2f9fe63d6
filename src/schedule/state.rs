// src/schedule/state.rs

use crate::domain::listing::DetailedListing;
use chrono::{Days, Duration, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Time of day for the first run each day.
    pub daily_run_at: NaiveTime,
    /// Empty results stop being retried at or after this time of day.
    pub cutoff: NaiveTime,
    pub retry_interval: Duration,
    /// When set, the first run happens this long after startup instead of
    /// at tomorrow's `daily_run_at`.
    pub startup_delay: Option<Duration>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            daily_run_at: NaiveTime::from_hms_opt(0, 3, 0).unwrap_or_default(),
            cutoff: NaiveTime::from_hms_opt(1, 0, 0).unwrap_or_default(),
            retry_interval: Duration::minutes(3),
            startup_delay: None,
        }
    }
}

/// Scheduler state between runs.
/// `attempts` counts runs since the last email went out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerState {
    pub attempts: u32,
}

impl SchedulerState {
    pub fn initial() -> Self {
        Self { attempts: 0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Nothing found before the cutoff; try again shortly.
    Retrying,
    /// Email sent; next run is tomorrow.
    Rescheduled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    NotifyFound(Vec<DetailedListing>),
    NotifyNothing { attempts: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: SchedulerState,
    pub branch: Branch,
    pub fire_at: NaiveDateTime,
    pub action: Action,
}

/// Decide what follows a finished run.
///
/// Empty results before the cutoff retry after `retry_interval` and keep
/// counting attempts. Anything else produces an email, resets the counter,
/// and moves the next run to tomorrow at `daily_run_at`.
pub fn transition(
    state: &SchedulerState,
    results: Vec<DetailedListing>,
    now: NaiveDateTime,
    cfg: &ScheduleConfig,
) -> Transition {
    let attempts = state.attempts + 1;

    if results.is_empty() && now.time() < cfg.cutoff {
        return Transition {
            next: SchedulerState { attempts },
            branch: Branch::Retrying,
            fire_at: now + cfg.retry_interval,
            action: Action::None,
        };
    }

    let action = if results.is_empty() {
        Action::NotifyNothing { attempts }
    } else {
        Action::NotifyFound(results)
    };

    Transition {
        next: SchedulerState::initial(),
        branch: Branch::Rescheduled,
        fire_at: next_daily_run(now, cfg),
        action,
    }
}

pub fn next_daily_run(now: NaiveDateTime, cfg: &ScheduleConfig) -> NaiveDateTime {
    (now.date() + Days::new(1)).and_time(cfg.daily_run_at)
}

pub fn initial_fire_at(now: NaiveDateTime, cfg: &ScheduleConfig) -> NaiveDateTime {
    match cfg.startup_delay {
        Some(delay) => now + delay,
        None => next_daily_run(now, cfg),
    }
}
