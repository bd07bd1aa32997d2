// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::tests::helpers::{create_loaded_card, create_test_card, create_test_clock, monday_morning};
use crate::{BikeStation, Card, DAILY_RENTAL_FEE, OVERSTAY_FINE};
use farebox_domain::{CardId, CardKind, FixedClock, Money};

#[test]
fn test_checkout_charges_the_daily_fee() {
    let clock: FixedClock = create_test_clock(monday_morning());
    let mut station: BikeStation = BikeStation::new("Estacion Central");
    let mut card: Card = create_loaded_card(CardKind::Standard, &[5000]);

    station.checkout(&mut card, &clock).unwrap();

    assert_eq!(card.balance(), Money::from_pesos(5000) - DAILY_RENTAL_FEE);
    assert_eq!(card.balance(), Money::from_centavos(322_250));
    assert!(station.has_open_rental(card.id()));
}

#[test]
fn test_double_checkout_is_rejected_without_charge() {
    let clock: FixedClock = create_test_clock(monday_morning());
    let mut station: BikeStation = BikeStation::new("Estacion Central");
    let mut card: Card = create_loaded_card(CardKind::Standard, &[5000]);

    station.checkout(&mut card, &clock).unwrap();
    let balance_after_first: Money = card.balance();

    let result: Result<(), CoreError> = station.checkout(&mut card, &clock);

    assert_eq!(result, Err(CoreError::RentalAlreadyOpen { card: card.id() }));
    assert_eq!(card.balance(), balance_after_first);
}

#[test]
fn test_checkout_without_funds_is_rejected() {
    let clock: FixedClock = create_test_clock(monday_morning());
    let mut station: BikeStation = BikeStation::new("Estacion Norte");
    let mut card: Card = create_loaded_card(CardKind::HalfFare, &[2000]);
    card.charge(Money::from_pesos(500)).unwrap();

    let result: Result<(), CoreError> = station.checkout(&mut card, &clock);

    assert!(result.is_err());
    assert!(!station.has_open_rental(card.id()));
    assert_eq!(card.balance(), Money::from_pesos(1500));
}

#[test]
fn test_checkout_respects_standard_negative_floor() {
    let clock: FixedClock = create_test_clock(monday_morning());
    let mut station: BikeStation = BikeStation::new("Estacion Norte");
    let mut card: Card = create_test_card(CardKind::Standard);

    // The fee would land at -$1777.50, past the -$1200.00 floor.
    assert!(station.checkout(&mut card, &clock).is_err());
    assert_eq!(card.balance(), Money::ZERO);
}

#[test]
fn test_return_without_checkout_is_rejected() {
    let clock: FixedClock = create_test_clock(monday_morning());
    let mut station: BikeStation = BikeStation::new("Estacion Central");
    let card: Card = create_loaded_card(CardKind::Standard, &[5000]);

    let result: Result<(), CoreError> = station.return_bike(&card, &clock);

    assert_eq!(result, Err(CoreError::NoOpenRental { card: card.id() }));
}

#[test]
fn test_timely_return_accrues_no_fine() {
    let clock: FixedClock = create_test_clock(monday_morning());
    let mut station: BikeStation = BikeStation::new("Estacion Central");
    let mut card: Card = create_loaded_card(CardKind::Standard, &[5000]);

    station.checkout(&mut card, &clock).unwrap();
    clock.advance_minutes(45);
    station.return_bike(&card, &clock).unwrap();

    assert_eq!(station.pending_fines(card.id()), 0);
    assert!(!station.has_open_rental(card.id()));
}

#[test]
fn test_return_at_exactly_the_window_is_timely() {
    let clock: FixedClock = create_test_clock(monday_morning());
    let mut station: BikeStation = BikeStation::new("Estacion Central");
    let mut card: Card = create_loaded_card(CardKind::Standard, &[5000]);

    station.checkout(&mut card, &clock).unwrap();
    clock.advance_minutes(60);
    station.return_bike(&card, &clock).unwrap();

    assert_eq!(station.pending_fines(card.id()), 0);
}

#[test]
fn test_late_return_accrues_a_pending_fine_without_charging() {
    let clock: FixedClock = create_test_clock(monday_morning());
    let mut station: BikeStation = BikeStation::new("Estacion Central");
    let mut card: Card = create_loaded_card(CardKind::Standard, &[5000]);

    station.checkout(&mut card, &clock).unwrap();
    let balance_after_checkout: Money = card.balance();

    clock.advance_minutes(61);
    station.return_bike(&card, &clock).unwrap();

    assert_eq!(station.pending_fines(card.id()), 1);
    assert_eq!(card.balance(), balance_after_checkout);
    assert!(!station.has_open_rental(card.id()));
}

#[test]
fn test_pending_fine_is_billed_with_the_next_checkout() {
    let clock: FixedClock = create_test_clock(monday_morning());
    let mut station: BikeStation = BikeStation::new("Estacion Central");
    let mut card: Card = create_loaded_card(CardKind::Standard, &[10_000]);

    station.checkout(&mut card, &clock).unwrap();
    clock.advance_minutes(90);
    station.return_bike(&card, &clock).unwrap();

    assert_eq!(station.amount_due(card.id()), DAILY_RENTAL_FEE + OVERSTAY_FINE);

    let balance_before: Money = card.balance();
    station.checkout(&mut card, &clock).unwrap();

    assert_eq!(
        card.balance(),
        balance_before - DAILY_RENTAL_FEE - OVERSTAY_FINE
    );
    assert_eq!(station.pending_fines(card.id()), 0);
}

#[test]
fn test_fines_survive_a_day_change_until_billed() {
    let clock: FixedClock = create_test_clock(monday_morning());
    let mut station: BikeStation = BikeStation::new("Estacion Central");
    let mut card: Card = create_loaded_card(CardKind::Standard, &[10_000]);

    station.checkout(&mut card, &clock).unwrap();
    clock.advance_minutes(61);
    station.return_bike(&card, &clock).unwrap();

    clock.advance_days(2);

    assert_eq!(station.pending_fines(card.id()), 1);
    assert_eq!(station.amount_due(card.id()), DAILY_RENTAL_FEE + OVERSTAY_FINE);
}

#[test]
fn test_checkout_rejected_when_fee_plus_fine_exceeds_funds() {
    let clock: FixedClock = create_test_clock(monday_morning());
    let mut station: BikeStation = BikeStation::new("Estacion Sur");
    let mut card: Card = create_loaded_card(CardKind::HalfFare, &[2000]);

    station.checkout(&mut card, &clock).unwrap();
    clock.advance_minutes(90);
    station.return_bike(&card, &clock).unwrap();

    // Balance is $222.50; the next checkout would bill $2777.50.
    let result: Result<(), CoreError> = station.checkout(&mut card, &clock);

    assert!(result.is_err());
    assert_eq!(station.pending_fines(card.id()), 1);
    assert!(!station.has_open_rental(card.id()));
    assert_eq!(card.balance(), Money::from_centavos(22_250));
}

#[test]
fn test_rental_cycle_can_repeat() {
    let clock: FixedClock = create_test_clock(monday_morning());
    let mut station: BikeStation = BikeStation::new("Estacion Central");
    let mut card: Card = create_loaded_card(CardKind::Standard, &[10_000]);

    station.checkout(&mut card, &clock).unwrap();
    clock.advance_minutes(30);
    station.return_bike(&card, &clock).unwrap();
    station.checkout(&mut card, &clock).unwrap();

    assert!(station.has_open_rental(card.id()));
    assert_eq!(card.balance(), Money::from_pesos(10_000) - DAILY_RENTAL_FEE * 2);
}

#[test]
fn test_station_tracks_cards_independently() {
    let clock: FixedClock = create_test_clock(monday_morning());
    let mut station: BikeStation = BikeStation::new("Estacion Central");
    let mut first: Card = create_loaded_card(CardKind::Standard, &[5000]);
    let mut second: Card = Card::new(CardId::new(2), CardKind::Standard);
    second.load(Money::from_pesos(5000)).unwrap();

    station.checkout(&mut first, &clock).unwrap();

    assert!(!station.has_open_rental(second.id()));
    station.checkout(&mut second, &clock).unwrap();
    assert!(station.has_open_rental(second.id()));

    clock.advance_minutes(70);
    station.return_bike(&first, &clock).unwrap();

    assert_eq!(station.pending_fines(first.id()), 1);
    assert_eq!(station.pending_fines(second.id()), 0);
}

#[test]
fn test_station_name_accessor() {
    let station: BikeStation = BikeStation::new("Estacion Central");
    assert_eq!(station.name(), "Estacion Central");
}
