// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed-point currency arithmetic.
//!
//! All balances, fares, and fines are represented as a signed count of
//! centavos. Percentage scaling is exact for every multiplier in the fare
//! schedule (100, 80, 75, 50, 0), so no rounding policy is needed.

use serde::{Deserialize, Serialize};

/// A signed fixed-point currency amount, stored as centavos.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from a whole number of pesos.
    #[must_use]
    pub const fn from_pesos(pesos: i64) -> Self {
        Self(pesos * 100)
    }

    /// Creates an amount from centavos.
    #[must_use]
    pub const fn from_centavos(centavos: i64) -> Self {
        Self(centavos)
    }

    /// Returns the amount in centavos.
    #[must_use]
    pub const fn centavos(self) -> i64 {
        self.0
    }

    /// Returns whether the amount is strictly negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Returns whether the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns the absolute value of the amount.
    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Scales the amount by a whole percentage.
    ///
    /// Division truncates toward zero; every percentage used by the fare
    /// schedule divides the schedule's amounts exactly.
    #[must_use]
    pub fn scale_percent(self, percent: u8) -> Self {
        Self(self.0 * i64::from(percent) / 100)
    }
}

impl std::ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl std::ops::Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::ops::Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * i64::from(rhs))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign: &str = if self.0 < 0 { "-" } else { "" };
        let magnitude: i64 = self.0.abs();
        write!(f, "{sign}${}.{:02}", magnitude / 100, magnitude % 100)
    }
}
