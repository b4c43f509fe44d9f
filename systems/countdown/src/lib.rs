#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Countdown system converting elapsed time into one-second round ticks.
//!
//! The countdown is bound to the round announced by the latest
//! [`Event::RoundStarted`]. Adopting a new round discards the previous binding
//! together with any partially accumulated second, which is how restarting a
//! round cancels the old timer. The countdown never emits more ticks than the
//! round has seconds left, however much time a single update reports.

use std::time::Duration;

use log::debug;
use word_search_core::{Command, Event, RoundId};

/// Granularity of the countdown.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Periodic timer emitting [`Command::Tick`] for the active round.
#[derive(Clone, Debug, Default)]
pub struct Countdown {
    round: Option<RoundId>,
    remaining: u32,
    accumulator: Duration,
}

impl Countdown {
    /// Creates a stopped countdown.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            round: None,
            remaining: 0,
            accumulator: Duration::ZERO,
        }
    }

    /// Consumes round events and elapsed time to emit tick commands.
    pub fn handle(&mut self, events: &[Event], dt: Duration, out: &mut Vec<Command>) {
        for event in events {
            match event {
                Event::RoundStarted {
                    round,
                    time_remaining,
                    ..
                } => {
                    if let Some(previous) = self.round {
                        debug!(
                            "cancelling countdown for round {} in favour of round {}",
                            previous.get(),
                            round.get()
                        );
                    }
                    self.round = Some(*round);
                    self.remaining = *time_remaining;
                    self.accumulator = Duration::ZERO;
                }
                Event::RoundEnded { round, .. } => {
                    if self.round == Some(*round) {
                        self.stop();
                    }
                }
                Event::TimeAdvanced { .. } | Event::WordFound { .. } => {}
            }
        }

        let Some(round) = self.round else {
            return;
        };

        self.accumulator = self.accumulator.saturating_add(dt);
        let due = self.accumulator.as_nanos() / TICK_INTERVAL.as_nanos();
        let ticks = u32::try_from(due).unwrap_or(u32::MAX).min(self.remaining);
        self.remaining -= ticks;
        if self.remaining == 0 {
            self.accumulator = Duration::ZERO;
        } else {
            self.accumulator -= TICK_INTERVAL * ticks;
        }
        out.extend(std::iter::repeat(Command::Tick { round }).take(ticks as usize));
    }

    /// Stops the countdown, discarding any partial second.
    pub fn stop(&mut self) {
        self.round = None;
        self.remaining = 0;
        self.accumulator = Duration::ZERO;
    }

    /// Round the countdown is currently bound to.
    #[must_use]
    pub const fn round(&self) -> Option<RoundId> {
        self.round
    }

    /// Reports whether the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.round.is_some()
    }
}
