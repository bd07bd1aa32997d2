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

mod bike_station;
mod bus;
mod card;
mod error;
mod issuer;
mod ticket;

#[cfg(test)]
mod tests;

pub use bike_station::{BikeStation, DAILY_RENTAL_FEE, MAX_RENTAL_MINUTES, OVERSTAY_FINE};
pub use bus::Bus;
pub use card::Card;
pub use error::CoreError;
pub use issuer::CardIssuer;
pub use ticket::Ticket;
