// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::card::Card;
use farebox_domain::{CardId, CardKind};

/// A card-issuing authority owning the id sequence.
///
/// Each issuer hands out monotonically increasing ids starting at 1; there
/// is no process-wide counter, so two issuers produce independent
/// sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardIssuer {
    /// The next identifier to assign.
    next_id: u64,
}

impl CardIssuer {
    /// Creates an issuer whose first card receives id 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Issues a new card of the given kind with the next id in sequence.
    pub fn issue(&mut self, kind: CardKind) -> Card {
        let id: CardId = CardId::new(self.next_id);
        self.next_id += 1;
        tracing::debug!(%id, %kind, "issued card");
        Card::new(id, kind)
    }
}

impl Default for CardIssuer {
    fn default() -> Self {
        Self::new()
    }
}
