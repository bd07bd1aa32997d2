// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The clock capability.
//!
//! Every temporal decision in the engine is a function of one injected
//! clock reading; nothing reads the wall clock directly. `SystemClock` is
//! the production implementation; `FixedClock` lets tests pin and advance
//! "now" without sleeping real time.

use chrono::{Duration, Local, NaiveDateTime};
use std::cell::Cell;

/// Supplies the current instant to the engine.
pub trait Clock {
    /// Returns the current local wall-clock instant.
    fn now(&self) -> NaiveDateTime;
}

/// The production clock: reads the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new `SystemClock`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A deterministic clock pinned to an explicit instant.
///
/// The instant is held in a `Cell` so a test can advance time between
/// calls while the clock is borrowed immutably by the code under test.
/// Not for concurrent use, matching the engine's execution model.
#[derive(Debug)]
pub struct FixedClock {
    /// The instant the clock currently reports.
    now: Cell<NaiveDateTime>,
}

impl FixedClock {
    /// Creates a clock pinned to the given instant.
    #[must_use]
    pub const fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Re-pins the clock to a new instant.
    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    /// Advances the clock by a number of minutes.
    pub fn advance_minutes(&self, minutes: i64) {
        self.now.set(self.now.get() + Duration::minutes(minutes));
    }

    /// Advances the clock by a number of days.
    pub fn advance_days(&self, days: i64) {
        self.now.set(self.now.get() + Duration::days(days));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}
