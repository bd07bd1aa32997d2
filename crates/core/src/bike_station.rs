// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The bike-share rental station.
//!
//! Per card the station is a two-state machine: no rental, or one open
//! checkout. Overstaying a return accrues a fine on the station's books;
//! fines are billed in full with the fee of the *next* checkout, never
//! immediately and never reset by a calendar-day change. The station owns
//! no balance state of its own.

use crate::card::Card;
use crate::error::CoreError;
use chrono::NaiveDateTime;
use farebox_domain::{CardId, Clock, Money};
use std::collections::HashMap;

/// Fee charged at every checkout.
pub const DAILY_RENTAL_FEE: Money = Money::from_centavos(177_750);

/// Fine accrued per overstayed return.
pub const OVERSTAY_FINE: Money = Money::from_pesos(1000);

/// Longest rental, in minutes, that returns without a fine.
pub const MAX_RENTAL_MINUTES: i64 = 60;

/// A bike-share station renting against fare cards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BikeStation {
    /// The station's name.
    name: String,
    /// Open checkouts: card id to checkout instant.
    checkouts: HashMap<CardId, NaiveDateTime>,
    /// Fines accrued per card, awaiting the next checkout.
    pending_fines: HashMap<CardId, u32>,
}

impl BikeStation {
    /// Creates an empty station.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            checkouts: HashMap::new(),
            pending_fines: HashMap::new(),
        }
    }

    /// Returns the station's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks a bike out against a card.
    ///
    /// The amount charged is the daily fee plus every fine pending for the
    /// card. On success the checkout instant is recorded and the card's
    /// pending fines are zeroed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::RentalAlreadyOpen` if the card already has an
    /// open checkout, or `CoreError::DomainViolation` if the charge is
    /// rejected. Either way neither the card nor the station changes.
    pub fn checkout(&mut self, card: &mut Card, clock: &dyn Clock) -> Result<(), CoreError> {
        if self.checkouts.contains_key(&card.id()) {
            return Err(CoreError::RentalAlreadyOpen { card: card.id() });
        }

        let due: Money = self.amount_due(card.id());
        card.charge(due)?;

        self.checkouts.insert(card.id(), clock.now());
        if let Some(fines) = self.pending_fines.get_mut(&card.id()) {
            *fines = 0;
        }

        tracing::debug!(station = %self.name, card = %card.id(), %due, "bike checked out");
        Ok(())
    }

    /// Returns a bike previously checked out by the card.
    ///
    /// A return past the maximum rental window accrues one fine, billed on
    /// the next checkout. The checkout record is cleared unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NoOpenRental` if the card has no open checkout.
    pub fn return_bike(&mut self, card: &Card, clock: &dyn Clock) -> Result<(), CoreError> {
        let Some(checked_out_at) = self.checkouts.remove(&card.id()) else {
            return Err(CoreError::NoOpenRental { card: card.id() });
        };

        let minutes_used: i64 = (clock.now() - checked_out_at).num_minutes();
        if minutes_used > MAX_RENTAL_MINUTES {
            *self.pending_fines.entry(card.id()).or_insert(0) += 1;
            tracing::warn!(
                station = %self.name,
                card = %card.id(),
                minutes_used,
                "late return, fine accrued"
            );
        }

        Ok(())
    }

    /// Returns the fines pending for a card.
    #[must_use]
    pub fn pending_fines(&self, card: CardId) -> u32 {
        self.pending_fines.get(&card).copied().unwrap_or(0)
    }

    /// Returns whether a card has an open checkout.
    #[must_use]
    pub fn has_open_rental(&self, card: CardId) -> bool {
        self.checkouts.contains_key(&card)
    }

    /// Returns what the next checkout would charge the card: the daily
    /// fee plus all pending fines.
    #[must_use]
    pub fn amount_due(&self, card: CardId) -> Money {
        DAILY_RENTAL_FEE + OVERSTAY_FINE * self.pending_fines(card)
    }
}
