// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-scoped trip counters with pure refresh.
//!
//! The card tracks how many trips it has taken today and this month. Both
//! counters are refreshed by value: `refreshed(now)` returns the counter
//! as it stands at the given instant, zeroed if the period rolled over.
//! The settlement state machine holds refreshed counters as locals and
//! commits them only when the whole settlement succeeds, so a rejected
//! trip leaves the stored counters untouched.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthPeriod {
    /// The calendar year.
    year: i32,
    /// The calendar month (1-12).
    month: u32,
}

impl MonthPeriod {
    /// Derives the period containing a date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

/// Trips taken on a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DailyCounter {
    /// Trips counted so far in the stored day.
    count: u32,
    /// The day the count belongs to. `None` until the first refresh.
    day: Option<NaiveDate>,
}

impl DailyCounter {
    /// Creates a counter with no recorded trips.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            day: None,
        }
    }

    /// Returns the counter as it stands on the given day.
    ///
    /// A counter stored for a different day (or never stamped) comes back
    /// zeroed and stamped with `today`.
    #[must_use]
    pub fn refreshed(self, today: NaiveDate) -> Self {
        if self.day == Some(today) {
            self
        } else {
            Self {
                count: 0,
                day: Some(today),
            }
        }
    }

    /// Returns the counter with one more trip recorded.
    #[must_use]
    pub const fn incremented(self) -> Self {
        Self {
            count: self.count + 1,
            day: self.day,
        }
    }

    /// Returns the trip count.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.count
    }
}

/// Trips taken in a single calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthlyCounter {
    /// Trips counted so far in the stored period.
    count: u32,
    /// The period the count belongs to. `None` until the first refresh.
    period: Option<MonthPeriod>,
}

impl MonthlyCounter {
    /// Creates a counter with no recorded trips.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            period: None,
        }
    }

    /// Returns the counter as it stands in the month containing `today`.
    #[must_use]
    pub fn refreshed(self, today: NaiveDate) -> Self {
        let current: MonthPeriod = MonthPeriod::from_date(today);
        if self.period == Some(current) {
            self
        } else {
            Self {
                count: 0,
                period: Some(current),
            }
        }
    }

    /// Returns the counter with one more trip recorded.
    #[must_use]
    pub const fn incremented(self) -> Self {
        Self {
            count: self.count + 1,
            period: self.period,
        }
    }

    /// Returns the trip count.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.count
    }
}
