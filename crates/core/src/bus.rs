// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The bus: one-trip orchestrator.
//!
//! A bus is immutable and stateless across trips. Paying runs the horario
//! gate, delegates settlement to the card, and turns a successful
//! settlement into a [`Ticket`].

use crate::error::CoreError;
use crate::{Card, Ticket};
use chrono::NaiveDateTime;
use farebox_domain::{Clock, DomainError, Line};

/// A bus serving one line for one operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    /// The line this bus serves.
    line: Line,
    /// The operator running the line.
    operator: String,
    /// Whether trips use the intercity base fare.
    intercity: bool,
}

impl Bus {
    /// Creates an urban bus.
    #[must_use]
    pub fn new(line: &str, operator: &str) -> Self {
        Self {
            line: Line::new(line),
            operator: operator.to_string(),
            intercity: false,
        }
    }

    /// Creates an intercity bus, which charges the intercity base fare.
    #[must_use]
    pub fn intercity(line: &str, operator: &str) -> Self {
        Self {
            line: Line::new(line),
            operator: operator.to_string(),
            intercity: true,
        }
    }

    /// Returns the line this bus serves.
    #[must_use]
    pub const fn line(&self) -> &Line {
        &self.line
    }

    /// Returns the operator running the line.
    #[must_use]
    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// Returns whether trips use the intercity base fare.
    #[must_use]
    pub const fn is_intercity(&self) -> bool {
        self.intercity
    }

    /// Settles one trip against a card.
    ///
    /// # Arguments
    ///
    /// * `card` - The paying card
    /// * `clock` - The clock supplying the settlement instant
    ///
    /// # Returns
    ///
    /// A [`Ticket`] built from the card's post-trip state.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DomainViolation` if the card may not pay at
    /// this instant or the settlement itself is rejected. A failed payment
    /// leaves the card unchanged and produces no ticket.
    pub fn pay_with(&self, card: &mut Card, clock: &dyn Clock) -> Result<Ticket, CoreError> {
        let at: NaiveDateTime = clock.now();

        if !card.can_pay_at(at) {
            tracing::debug!(card = %card.id(), line = %self.line, %at, "outside payment window");
            return Err(CoreError::DomainViolation(
                DomainError::OutsidePaymentWindow {
                    kind: card.kind(),
                    at,
                },
            ));
        }

        card.settle_trip(&self.line, self.intercity, at)?;

        tracing::debug!(
            card = %card.id(),
            line = %self.line,
            fare = %card.last_fare_charged(),
            transfer = card.last_trip_was_transfer(),
            "trip settled"
        );

        Ok(Ticket::new(
            card.last_fare_charged(),
            self.line.clone(),
            self.operator.clone(),
            card.balance(),
            at,
            card.kind(),
            card.id(),
            card.last_trip_was_transfer(),
        ))
    }
}
