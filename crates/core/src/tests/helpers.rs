// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Card;
use chrono::{NaiveDate, NaiveDateTime};
use farebox_domain::{CardId, CardKind, FixedClock, Money};

/// Builds an instant from calendar parts.
pub fn instant(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// Monday 2026-08-03 at 10:00, inside every payment and transfer window.
pub fn monday_morning() -> NaiveDateTime {
    instant(2026, 8, 3, 10, 0)
}

/// Saturday 2026-08-08 at 10:00.
pub fn saturday_morning() -> NaiveDateTime {
    instant(2026, 8, 8, 10, 0)
}

/// Sunday 2026-08-09 at 10:00.
pub fn sunday_morning() -> NaiveDateTime {
    instant(2026, 8, 9, 10, 0)
}

pub fn create_test_clock(now: NaiveDateTime) -> FixedClock {
    FixedClock::new(now)
}

pub fn create_test_card(kind: CardKind) -> Card {
    Card::new(CardId::new(1), kind)
}

/// Creates a card and loads the given peso denominations onto it.
pub fn create_loaded_card(kind: CardKind, denominations: &[i64]) -> Card {
    let mut card: Card = create_test_card(kind);
    for pesos in denominations {
        card.load(Money::from_pesos(*pesos)).unwrap();
    }
    card
}
