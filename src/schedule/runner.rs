// src/schedule/runner.rs

use crate::mailer::Mailer;
use crate::notifier::Notifier;
use crate::schedule::state::{
    initial_fire_at, transition, Action, Branch, ScheduleConfig, SchedulerState,
};
use crate::scraper::Pipeline;
use chrono::{Local, NaiveDateTime};
use tracing::{error, info};

/// Wall clock plus the ability to wait for a point in time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
    fn sleep_until(&self, at: NaiveDateTime);
}

/// Local time, blocking sleep.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn sleep_until(&self, at: NaiveDateTime) {
        // Negative waits (fire time already passed) run immediately.
        if let Ok(wait) = (at - self.now()).to_std() {
            std::thread::sleep(wait);
        }
    }
}

/// Owns the single pending fire time and drives runs one after another.
/// The next fire time is only armed after the run and its email finish.
pub struct Scheduler<P, M, C> {
    pipeline: P,
    notifier: Notifier<M>,
    clock: C,
    cfg: ScheduleConfig,
    state: SchedulerState,
    fire_at: NaiveDateTime,
}

impl<P: Pipeline, M: Mailer, C: Clock> Scheduler<P, M, C> {
    pub fn new(pipeline: P, notifier: Notifier<M>, clock: C, cfg: ScheduleConfig) -> Self {
        let fire_at = initial_fire_at(clock.now(), &cfg);

        Self {
            pipeline,
            notifier,
            clock,
            cfg,
            state: SchedulerState::initial(),
            fire_at,
        }
    }

    pub fn state(&self) -> &SchedulerState {
        &self.state
    }

    pub fn fire_at(&self) -> NaiveDateTime {
        self.fire_at
    }

    /// Startup confirmation email.
    pub fn announce_start(&mut self) {
        self.notifier.send_startup(self.clock.now(), &self.cfg);
        self.state = SchedulerState::initial();
    }

    /// Wait for the fire time, run once, act on the result and re-arm.
    ///
    /// A failed run is logged and treated as an empty result, so the
    /// scheduler always re-arms.
    pub fn step(&mut self) -> Branch {
        info!("Waiting until {}", self.fire_at.format("%Y-%m-%d %H:%M:%S"));
        self.clock.sleep_until(self.fire_at);

        let results = match self.pipeline.run() {
            Ok(results) => results,
            Err(e) => {
                error!("Scrape failed, treating as empty result: {e}");
                Vec::new()
            }
        };

        let now = self.clock.now();
        let t = transition(&self.state, results, now, &self.cfg);

        match &t.action {
            Action::None => info!(
                attempts = t.next.attempts,
                "No result.. trying again at {}",
                t.fire_at.format("%H:%M:%S")
            ),
            Action::NotifyFound(listings) => self.notifier.send_found(listings),
            Action::NotifyNothing { attempts } => self.notifier.send_nothing(*attempts),
        }

        self.state = t.next;
        self.fire_at = t.fire_at;
        t.branch
    }

    pub fn run_forever(&mut self) -> ! {
        loop {
            self.step();
        }
    }
}
