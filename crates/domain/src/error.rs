// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::card_kind::CardKind;
use crate::money::Money;
use chrono::NaiveDateTime;

/// Errors that can occur when a fare rule rejects an operation.
///
/// Every rejection leaves the card exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The load amount is not an accepted denomination.
    UnsupportedLoadAmount {
        /// The rejected amount.
        amount: Money,
    },
    /// Charging the amount would push the balance below the kind's floor.
    InsufficientBalance {
        /// The balance at the time of the charge.
        balance: Money,
        /// The amount that was requested.
        amount: Money,
        /// The lowest balance the card kind permits.
        floor: Money,
    },
    /// The card kind may not pay at this instant.
    OutsidePaymentWindow {
        /// The card kind.
        kind: CardKind,
        /// The rejected instant.
        at: NaiveDateTime,
    },
    /// The minimum interval between trips has not elapsed.
    TripTooSoon {
        /// Minutes elapsed since the previous non-transfer trip.
        elapsed_minutes: i64,
        /// Minutes the card kind requires between trips.
        required_minutes: i64,
    },
    /// A card kind string could not be parsed.
    UnknownCardKind(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLoadAmount { amount } => {
                write!(f, "Load amount {amount} is not an accepted denomination")
            }
            Self::InsufficientBalance {
                balance,
                amount,
                floor,
            } => {
                write!(
                    f,
                    "Cannot charge {amount}: balance {balance} would fall below the {floor} floor"
                )
            }
            Self::OutsidePaymentWindow { kind, at } => {
                write!(f, "A {kind} card cannot pay at {at}")
            }
            Self::TripTooSoon {
                elapsed_minutes,
                required_minutes,
            } => {
                write!(
                    f,
                    "Only {elapsed_minutes} minutes since the previous trip; {required_minutes} required"
                )
            }
            Self::UnknownCardKind(value) => write!(f, "Unknown card kind: {value}"),
        }
    }
}

impl std::error::Error for DomainError {}
