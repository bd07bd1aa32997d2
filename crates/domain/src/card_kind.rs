// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Card kinds as pure policy objects.
//!
//! A kind bundles everything variant-dependent about a card (balance
//! floor, daily discount quota, payment and transfer windows, minimum trip
//! interval), so the settlement state machine lives in one place and never
//! branches on anything but the policy accessors here.
//!
//! ## Invariants
//!
//! - Standard cards may run a negative balance down to the floor; the
//!   franchise kinds never go below zero.
//! - Franchise kinds pay only Monday-Friday, hour in [6, 22).
//! - Transfers are granted within hour [7, 22); Standard any day except
//!   Sunday, franchise kinds Monday-Friday.

use crate::error::DomainError;
use crate::fare_schedule::{HALF_FARE_MINIMUM_INTERVAL_MINUTES, NEGATIVE_BALANCE_FLOOR};
use crate::money::Money;
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Opening hour of the franchise payment window.
const PAYMENT_WINDOW_OPENING_HOUR: u32 = 6;

/// Opening hour of the transfer window.
const TRANSFER_WINDOW_OPENING_HOUR: u32 = 7;

/// Closing hour shared by both windows (exclusive).
const WINDOW_CLOSING_HOUR: u32 = 22;

/// The kind of a fare card, determining its fare and balance policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CardKind {
    /// Full-price card. May run a negative balance down to the floor and
    /// earns the frequent-rider monthly discount.
    #[default]
    Standard,
    /// Half-fare franchise: 50% fare for the first two trips of the day,
    /// weekday daytime use only, no negative balance.
    HalfFare,
    /// Full-exemption franchise: two free trips per day, weekday daytime
    /// use only, no negative balance.
    FullExemption,
}

impl FromStr for CardKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(Self::Standard),
            "Half Fare" => Ok(Self::HalfFare),
            "Full Exemption" => Ok(Self::FullExemption),
            _ => Err(DomainError::UnknownCardKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl CardKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::HalfFare => "Half Fare",
            Self::FullExemption => "Full Exemption",
        }
    }

    /// Returns the lowest balance a charge may leave on the card.
    #[must_use]
    pub const fn balance_floor(self) -> Money {
        match self {
            Self::Standard => NEGATIVE_BALANCE_FLOOR,
            Self::HalfFare | Self::FullExemption => Money::ZERO,
        }
    }

    /// Returns whether the kind tolerates a negative balance at all.
    #[must_use]
    pub const fn allows_negative_balance(self) -> bool {
        matches!(self, Self::Standard)
    }

    /// Returns the minimum number of minutes that must elapse between two
    /// non-transfer trips, if the kind enforces one.
    #[must_use]
    pub const fn minimum_trip_interval_minutes(self) -> Option<i64> {
        match self {
            Self::HalfFare => Some(HALF_FARE_MINIMUM_INTERVAL_MINUTES),
            Self::Standard | Self::FullExemption => None,
        }
    }

    /// Returns whether the card may pay a bus trip at the given instant.
    ///
    /// Standard cards pay at any time. Franchise kinds pay Monday-Friday
    /// with the hour in [6, 22).
    #[must_use]
    pub fn payment_window_allows(self, at: NaiveDateTime) -> bool {
        match self {
            Self::Standard => true,
            Self::HalfFare | Self::FullExemption => {
                is_weekday(at.weekday())
                    && (PAYMENT_WINDOW_OPENING_HOUR..WINDOW_CLOSING_HOUR).contains(&at.hour())
            }
        }
    }

    /// Returns whether a transfer may be granted at the given instant.
    ///
    /// The hour must fall in [7, 22) for every kind. Standard cards
    /// transfer any day except Sunday; franchise kinds Monday-Friday.
    #[must_use]
    pub fn transfer_window_allows(self, at: NaiveDateTime) -> bool {
        let day_allowed: bool = match self {
            Self::Standard => at.weekday() != Weekday::Sun,
            Self::HalfFare | Self::FullExemption => is_weekday(at.weekday()),
        };
        day_allowed && (TRANSFER_WINDOW_OPENING_HOUR..WINDOW_CLOSING_HOUR).contains(&at.hour())
    }
}

/// Returns whether a weekday falls Monday-Friday.
const fn is_weekday(weekday: Weekday) -> bool {
    !matches!(weekday, Weekday::Sat | Weekday::Sun)
}
