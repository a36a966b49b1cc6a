//! Integer-cent money.
//!
//! Every monetary amount in the marketplace is a whole number of cents.
//! Floating point never touches a price; [`Decimal`] is only produced at the
//! edge for display.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Sub};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Basis points in one whole (100%).
const BPS_PER_UNIT: i64 = 10_000;

/// An amount of money in cents.
///
/// Serialized as a bare integer so documents carry `"price": 1299`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    /// Zero cents.
    pub const ZERO: Self = Self(0);

    /// Create an amount from a number of cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// The raw number of cents.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// The amount in dollars as an exact decimal (e.g. `12.34`).
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Multiply by a per-unit quantity, saturating on overflow.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Apply a rate expressed in basis points, rounding half away from zero.
    ///
    /// ```
    /// # use commons_market_core::Cents;
    /// // 8.25% of $10.00
    /// assert_eq!(Cents::new(1000).apply_bps(825), Cents::new(83));
    /// ```
    #[must_use]
    pub fn apply_bps(self, bps: u32) -> Self {
        let scaled = self.0.saturating_mul(i64::from(bps));
        let half = BPS_PER_UNIT / 2;
        let rounded = if scaled >= 0 {
            scaled.saturating_add(half) / BPS_PER_UNIT
        } else {
            scaled.saturating_sub(half) / BPS_PER_UNIT
        };
        Self(rounded)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.to_decimal();
        if amount.is_sign_negative() {
            write!(f, "-${:.2}", amount.abs())
        } else {
            write!(f, "${amount:.2}")
        }
    }
}

impl From<i64> for Cents {
    fn from(cents: i64) -> Self {
        Self(cents)
    }
}

impl Add for Cents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Cents {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Mul<u32> for Cents {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        self.times(rhs)
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Cents {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats_dollars() {
        assert_eq!(Cents::new(1299).to_string(), "$12.99");
        assert_eq!(Cents::new(5).to_string(), "$0.05");
        assert_eq!(Cents::ZERO.to_string(), "$0.00");
        assert_eq!(Cents::new(-250).to_string(), "-$2.50");
    }

    #[test]
    fn test_to_decimal_is_exact() {
        assert_eq!(Cents::new(1999).to_decimal(), Decimal::new(1999, 2));
    }

    #[test]
    fn test_apply_bps_rounds_half_up() {
        // 5% of $0.10 = 0.5 cents -> 1 cent
        assert_eq!(Cents::new(10).apply_bps(500), Cents::new(1));
        // 5% of $0.09 = 0.45 cents -> 0 cents
        assert_eq!(Cents::new(9).apply_bps(500), Cents::ZERO);
        assert_eq!(Cents::new(2599).apply_bps(825), Cents::new(214));
    }

    #[test]
    fn test_times_and_sum() {
        let lines = [Cents::new(250).times(3), Cents::new(100) * 2];
        assert_eq!(lines.iter().sum::<Cents>(), Cents::new(950));
    }

    #[test]
    fn test_arithmetic_saturates() {
        assert_eq!(Cents::new(i64::MAX) + Cents::new(1), Cents::new(i64::MAX));
        assert_eq!(Cents::new(i64::MAX).times(2), Cents::new(i64::MAX));
    }

    #[test]
    fn test_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Cents::new(42)).ok().as_deref(), Some("42"));
    }
}
