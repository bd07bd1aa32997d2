// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The card: balance ledger, fare computation, and the trip settlement
//! state machine.
//!
//! ## Invariants
//!
//! - `floor(kind) <= balance <= ceiling` at all times.
//! - `pending_credit` is positive only while `balance` sits at the ceiling.
//! - Settlements are atomic: a rejected trip leaves balance, counters, and
//!   timestamps exactly as they were. Refreshed counters are computed as
//!   locals and committed only on success.

use chrono::NaiveDateTime;
use farebox_domain::{
    BALANCE_CEILING, CardId, CardKind, DailyCounter, DomainError, Line, Money, MonthlyCounter,
    TRANSFER_WINDOW_MINUTES, fare_due, is_accepted_load_amount,
};

/// A stored-value fare card.
///
/// Cards are issued by a [`crate::CardIssuer`], created with a zero
/// balance, and mutated only through [`Card::load`], [`Card::charge`], and
/// [`Card::settle_trip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// The issuer-assigned identifier.
    id: CardId,
    /// The fare policy this card follows.
    kind: CardKind,
    /// Current balance. May be negative for Standard cards only.
    balance: Money,
    /// Load amount deferred because the balance ceiling was reached.
    pending_credit: Money,
    /// Instant of the most recent successful trip.
    last_trip_at: Option<NaiveDateTime>,
    /// Instant of the most recent non-transfer trip. The half-fare
    /// minimum interval measures from here, so a free transfer never
    /// pushes it forward.
    last_paid_trip_at: Option<NaiveDateTime>,
    /// Line of the most recent successful trip.
    last_trip_line: Option<Line>,
    /// Whether the most recent trip settled as a transfer.
    transfer_active: bool,
    /// Fare charged by the most recent trip.
    last_fare_charged: Money,
    /// Non-transfer trips taken today.
    daily_trips: DailyCounter,
    /// Non-transfer trips taken this month. Advanced by Standard cards
    /// only.
    monthly_trips: MonthlyCounter,
}

impl Card {
    /// Creates a card with a zero balance.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier assigned by the issuing authority
    /// * `kind` - The fare policy the card follows
    #[must_use]
    pub const fn new(id: CardId, kind: CardKind) -> Self {
        Self {
            id,
            kind,
            balance: Money::ZERO,
            pending_credit: Money::ZERO,
            last_trip_at: None,
            last_paid_trip_at: None,
            last_trip_line: None,
            transfer_active: false,
            last_fare_charged: Money::ZERO,
            daily_trips: DailyCounter::new(),
            monthly_trips: MonthlyCounter::new(),
        }
    }

    /// Returns the card's identifier.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Returns the card's kind.
    #[must_use]
    pub const fn kind(&self) -> CardKind {
        self.kind
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> Money {
        self.balance
    }

    /// Returns the credit awaiting ceiling headroom.
    #[must_use]
    pub const fn pending_credit(&self) -> Money {
        self.pending_credit
    }

    /// Returns the fare charged by the most recent trip.
    #[must_use]
    pub const fn last_fare_charged(&self) -> Money {
        self.last_fare_charged
    }

    /// Returns whether the most recent trip settled as a transfer.
    #[must_use]
    pub const fn last_trip_was_transfer(&self) -> bool {
        self.transfer_active
    }

    /// Returns the instant of the most recent successful trip.
    #[must_use]
    pub const fn last_trip_at(&self) -> Option<NaiveDateTime> {
        self.last_trip_at
    }

    /// Returns the non-transfer trips recorded for the current day, as of
    /// the last settlement.
    #[must_use]
    pub const fn daily_trip_count(&self) -> u32 {
        self.daily_trips.count()
    }

    /// Returns the non-transfer trips recorded for the current month, as
    /// of the last settlement.
    #[must_use]
    pub const fn monthly_trip_count(&self) -> u32 {
        self.monthly_trips.count()
    }

    /// Loads a denomination onto the card.
    ///
    /// A negative balance is cleared first; the remainder fills the
    /// balance up to the ceiling and any excess becomes pending credit.
    /// Once the denomination check passes the load always succeeds, even
    /// when the whole increment is deferred.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnsupportedLoadAmount` if `amount` is not an
    /// accepted denomination. The card is left unchanged.
    pub fn load(&mut self, amount: Money) -> Result<(), DomainError> {
        if !is_accepted_load_amount(amount) {
            return Err(DomainError::UnsupportedLoadAmount { amount });
        }

        let mut remaining: Money = amount;

        if self.balance.is_negative() {
            let repayment: Money = remaining.min(self.balance.abs());
            self.balance += repayment;
            remaining -= repayment;
        }

        let headroom: Money = BALANCE_CEILING - self.balance;
        let credited: Money = remaining.min(headroom);
        self.balance += credited;
        self.pending_credit += remaining - credited;

        Ok(())
    }

    /// Debits an amount from the balance.
    ///
    /// After a successful debit, pending credit is reconciled into the
    /// freed headroom.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InsufficientBalance` if the debit would push
    /// the balance below the kind's floor. The card is left unchanged.
    pub fn charge(&mut self, amount: Money) -> Result<(), DomainError> {
        let floor: Money = self.kind.balance_floor();

        if self.balance - amount < floor {
            return Err(DomainError::InsufficientBalance {
                balance: self.balance,
                amount,
                floor,
            });
        }

        self.balance -= amount;
        self.credit_pending();
        Ok(())
    }

    /// Moves as much pending credit into the balance as ceiling headroom
    /// allows. Idempotent; a no-op without pending credit.
    fn credit_pending(&mut self) {
        if self.pending_credit <= Money::ZERO {
            return;
        }

        let headroom: Money = BALANCE_CEILING - self.balance;
        let applied: Money = self.pending_credit.min(headroom);
        self.balance += applied;
        self.pending_credit -= applied;
    }

    /// Returns whether the card may pay a bus trip at the given instant.
    #[must_use]
    pub fn can_pay_at(&self, at: NaiveDateTime) -> bool {
        self.kind.payment_window_allows(at)
    }

    /// Returns whether a charge of `amount` could be covered by running
    /// the balance negative.
    ///
    /// Only Standard cards may go negative, and only down to the floor.
    #[must_use]
    pub fn can_cover_with_negative_balance(&self, amount: Money) -> bool {
        self.kind.allows_negative_balance()
            && self.balance - amount >= self.kind.balance_floor()
    }

    /// Quotes the fare a non-transfer trip would cost at the given
    /// instant, without recording anything.
    #[must_use]
    pub fn current_fare(&self, intercity: bool, at: NaiveDateTime) -> Money {
        let daily: DailyCounter = self.daily_trips.refreshed(at.date());
        let monthly: MonthlyCounter = self.monthly_trips.refreshed(at.date());
        fare_due(self.kind, intercity, daily.count(), monthly.count())
    }

    /// Settles one bus trip.
    ///
    /// A transfer-eligible trip is free, keeps the daily quota untouched,
    /// and never advances the monthly counter. Otherwise the fare is
    /// resolved from the refreshed counters and charged; half-fare cards
    /// must additionally respect the minimum interval since the previous
    /// non-transfer trip.
    ///
    /// # Arguments
    ///
    /// * `line` - The line being boarded
    /// * `intercity` - Whether the trip uses the intercity base fare
    /// * `at` - The settlement instant
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TripTooSoon` if the kind's minimum interval
    /// has not elapsed, or `DomainError::InsufficientBalance` if the fare
    /// cannot be charged. Either way the card is left unchanged.
    pub fn settle_trip(
        &mut self,
        line: &Line,
        intercity: bool,
        at: NaiveDateTime,
    ) -> Result<(), DomainError> {
        let daily: DailyCounter = self.daily_trips.refreshed(at.date());
        let monthly: MonthlyCounter = self.monthly_trips.refreshed(at.date());

        let is_transfer: bool = self.transfer_eligible(line, at);

        let fare: Money = if is_transfer {
            Money::ZERO
        } else {
            if let (Some(required), Some(previous)) = (
                self.kind.minimum_trip_interval_minutes(),
                self.last_paid_trip_at,
            ) {
                let elapsed: i64 = (at - previous).num_minutes();
                if elapsed < required {
                    return Err(DomainError::TripTooSoon {
                        elapsed_minutes: elapsed,
                        required_minutes: required,
                    });
                }
            }
            fare_due(self.kind, intercity, daily.count(), monthly.count())
        };

        self.charge(fare)?;

        self.last_trip_at = Some(at);
        if !is_transfer {
            self.last_paid_trip_at = Some(at);
        }
        self.last_trip_line = Some(line.clone());
        self.last_fare_charged = fare;
        self.transfer_active = is_transfer;
        self.daily_trips = if is_transfer {
            daily
        } else {
            daily.incremented()
        };
        self.monthly_trips = if is_transfer || self.kind != CardKind::Standard {
            monthly
        } else {
            monthly.incremented()
        };

        Ok(())
    }

    /// Returns whether boarding `line` at `at` qualifies as a free
    /// transfer continuation of the previous trip.
    fn transfer_eligible(&self, line: &Line, at: NaiveDateTime) -> bool {
        if line.is_empty() {
            return false;
        }

        if !self.kind.transfer_window_allows(at) {
            return false;
        }

        let Some(previous) = self.last_trip_at else {
            return false;
        };

        let elapsed: i64 = (at - previous).num_minutes();
        if !(0..=TRANSFER_WINDOW_MINUTES).contains(&elapsed) {
            return false;
        }

        self.last_trip_line
            .as_ref()
            .is_some_and(|previous_line| !previous_line.is_empty() && previous_line != line)
    }
}
