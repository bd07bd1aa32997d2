// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod card_kind;
mod clock;
mod error;
mod fare_schedule;
mod money;
mod trip_counters;
mod types;

#[cfg(test)]
mod tests;

pub use card_kind::CardKind;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::DomainError;
pub use fare_schedule::{
    ACCEPTED_LOAD_AMOUNTS, BALANCE_CEILING, BASE_FARE, FRANCHISE_DAILY_QUOTA, FrequentRiderTier,
    HALF_FARE_MINIMUM_INTERVAL_MINUTES, INTERCITY_FARE, NEGATIVE_BALANCE_FLOOR,
    TRANSFER_WINDOW_MINUTES, base_fare, fare_due, is_accepted_load_amount,
};
pub use money::Money;
pub use trip_counters::{DailyCounter, MonthPeriod, MonthlyCounter};
pub use types::{CardId, Line};
