// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDateTime;
use farebox_domain::{CardId, CardKind, Line, Money};

/// An immutable settlement receipt.
///
/// Tickets are created only by a successful bus settlement and never
/// mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// The fare charged. Zero for transfers and exempt trips.
    fare_charged: Money,
    /// The line the trip was taken on.
    line: Line,
    /// The operator running the line.
    operator: String,
    /// The card balance after settlement.
    remaining_balance: Money,
    /// The settlement instant.
    timestamp: NaiveDateTime,
    /// The kind of the paying card.
    card_kind: CardKind,
    /// The id of the paying card.
    card_id: CardId,
    /// Whether the trip settled as a free transfer.
    is_transfer: bool,
}

impl Ticket {
    /// Creates a new `Ticket`.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        fare_charged: Money,
        line: Line,
        operator: String,
        remaining_balance: Money,
        timestamp: NaiveDateTime,
        card_kind: CardKind,
        card_id: CardId,
        is_transfer: bool,
    ) -> Self {
        Self {
            fare_charged,
            line,
            operator,
            remaining_balance,
            timestamp,
            card_kind,
            card_id,
            is_transfer,
        }
    }

    /// Returns the fare charged.
    #[must_use]
    pub const fn fare_charged(&self) -> Money {
        self.fare_charged
    }

    /// Returns the line the trip was taken on.
    #[must_use]
    pub const fn line(&self) -> &Line {
        &self.line
    }

    /// Returns the operator running the line.
    #[must_use]
    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// Returns the card balance after settlement.
    #[must_use]
    pub const fn remaining_balance(&self) -> Money {
        self.remaining_balance
    }

    /// Returns the settlement instant.
    #[must_use]
    pub const fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the kind of the paying card.
    #[must_use]
    pub const fn card_kind(&self) -> CardKind {
        self.card_kind
    }

    /// Returns the id of the paying card.
    #[must_use]
    pub const fn card_id(&self) -> CardId {
        self.card_id
    }

    /// Returns whether the trip settled as a free transfer.
    #[must_use]
    pub const fn is_transfer(&self) -> bool {
        self.is_transfer
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let transfer_marker: &str = if self.is_transfer { " (TRANSFER)" } else { "" };
        writeln!(
            f,
            "Ticket{} - {}",
            transfer_marker,
            self.timestamp.format("%d/%m/%Y %H:%M")
        )?;
        writeln!(f, "Line: {} - Operator: {}", self.line, self.operator)?;
        writeln!(f, "Card: {} (ID: {})", self.card_kind, self.card_id)?;
        writeln!(f, "Fare charged: {}", self.fare_charged)?;
        write!(f, "Remaining balance: {}", self.remaining_balance)
    }
}
