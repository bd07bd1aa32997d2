// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use farebox_domain::{CardId, DomainError};

/// Errors that can occur while orchestrating a trip or rental.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A fare rule rejected the operation.
    DomainViolation(DomainError),
    /// The card already has an open bike checkout at this station.
    RentalAlreadyOpen {
        /// The card with the open rental.
        card: CardId,
    },
    /// The card has no open bike checkout at this station.
    NoOpenRental {
        /// The card without a rental.
        card: CardId,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::RentalAlreadyOpen { card } => {
                write!(f, "Card {card} already has an open bike rental")
            }
            Self::NoOpenRental { card } => {
                write!(f, "Card {card} has no open bike rental")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
