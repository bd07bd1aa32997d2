// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fare schedule: base fares, load denominations, balance limits, and
//! pure fare resolution.
//!
//! Fare resolution is a deterministic function of the card kind, the trip
//! context, and the trip counters observed *before* the trip is recorded.
//! The monthly counter convention is read-before-increment: pricing trip N
//! observes a counter value of N-1, so the 30th trip of the month (counter
//! 29) is the first to earn the 20% frequent-rider tier.

use crate::card_kind::CardKind;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The undiscounted urban fare.
pub const BASE_FARE: Money = Money::from_pesos(1580);

/// The undiscounted intercity fare.
pub const INTERCITY_FARE: Money = Money::from_pesos(3000);

/// The highest balance a card may hold; loads beyond it become pending
/// credit.
pub const BALANCE_CEILING: Money = Money::from_pesos(56_000);

/// The lowest balance a Standard card may reach.
pub const NEGATIVE_BALANCE_FLOOR: Money = Money::from_pesos(-1200);

/// The load amounts accepted by `Card::load`, in pesos.
pub const ACCEPTED_LOAD_AMOUNTS: [Money; 10] = [
    Money::from_pesos(2000),
    Money::from_pesos(3000),
    Money::from_pesos(4000),
    Money::from_pesos(5000),
    Money::from_pesos(8000),
    Money::from_pesos(10_000),
    Money::from_pesos(15_000),
    Money::from_pesos(20_000),
    Money::from_pesos(25_000),
    Money::from_pesos(30_000),
];

/// Daily trips a franchise card may take at its discounted fare.
pub const FRANCHISE_DAILY_QUOTA: u32 = 2;

/// Longest gap, in minutes, between two trips that still counts as a
/// transfer.
pub const TRANSFER_WINDOW_MINUTES: i64 = 60;

/// Minutes a half-fare card must wait between two non-transfer trips.
pub const HALF_FARE_MINIMUM_INTERVAL_MINUTES: i64 = 5;

/// Percentage of the base fare a half-fare card pays within its daily
/// quota.
const HALF_FARE_PERCENT: u8 = 50;

/// The frequent-rider discount tier earned by a Standard card's monthly
/// trip count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrequentRiderTier {
    /// Full fare: fewer than 30 trips this month, or 81 and beyond.
    Full,
    /// 20% discount: trips 30 through 59 of the month.
    Saver20,
    /// 25% discount: trips 60 through 80 of the month.
    Saver25,
}

impl FrequentRiderTier {
    /// Resolves the tier for a monthly trip count observed before the trip
    /// being priced is recorded.
    #[must_use]
    pub const fn for_monthly_count(count: u32) -> Self {
        match count {
            29..=58 => Self::Saver20,
            59..=79 => Self::Saver25,
            _ => Self::Full,
        }
    }

    /// Returns the percentage of the base fare charged at this tier.
    #[must_use]
    pub const fn percent(self) -> u8 {
        match self {
            Self::Full => 100,
            Self::Saver20 => 80,
            Self::Saver25 => 75,
        }
    }

    /// Applies the tier to a base fare.
    #[must_use]
    pub fn apply(self, fare: Money) -> Money {
        fare.scale_percent(self.percent())
    }
}

/// Returns the undiscounted base fare for a trip context.
#[must_use]
pub const fn base_fare(intercity: bool) -> Money {
    if intercity { INTERCITY_FARE } else { BASE_FARE }
}

/// Resolves the fare due for a non-transfer trip.
///
/// # Arguments
///
/// * `kind` - The card kind
/// * `intercity` - Whether the trip uses the intercity base fare
/// * `daily_count` - Non-transfer trips already taken today
/// * `monthly_count` - Non-transfer trips already taken this month
///
/// # Returns
///
/// The amount to charge. Zero is a valid fare (a full-exemption card
/// within its daily quota).
#[must_use]
pub fn fare_due(kind: CardKind, intercity: bool, daily_count: u32, monthly_count: u32) -> Money {
    let base: Money = base_fare(intercity);

    match kind {
        CardKind::Standard => FrequentRiderTier::for_monthly_count(monthly_count).apply(base),
        CardKind::HalfFare => {
            if daily_count < FRANCHISE_DAILY_QUOTA {
                base.scale_percent(HALF_FARE_PERCENT)
            } else {
                base
            }
        }
        CardKind::FullExemption => {
            if daily_count < FRANCHISE_DAILY_QUOTA {
                Money::ZERO
            } else {
                base
            }
        }
    }
}

/// Returns whether an amount is an accepted load denomination.
#[must_use]
pub fn is_accepted_load_amount(amount: Money) -> bool {
    ACCEPTED_LOAD_AMOUNTS.contains(&amount)
}
