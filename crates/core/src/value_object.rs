//! Value objects: equality by value, not identity.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new one.
pub trait ValueObject: Clone + PartialEq + fmt::Debug {}

/// An amount of money in the smallest currency unit (cents).
///
/// The backend exchanges prices as JSON decimal numbers (`2.5`). They are
/// rounded to the nearest cent on the way in so that line totals and the grand
/// total are exact sums, and written back out as decimal numbers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Money(i64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    /// Largest magnitude (2^50 cents) that survives the decimal JSON wire
    /// format (`cents / 100` as an `f64` and back) without losing a cent.
    pub const MAX_EXACT: Money = Money(1 << 50);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Convert a decimal amount (as sent by the backend) to cents.
    ///
    /// Amounts beyond [`Money::MAX_EXACT`] are rejected: they cannot be
    /// carried exactly as a JSON number.
    pub fn from_decimal(amount: f64) -> Result<Self, DomainError> {
        if !amount.is_finite() {
            return Err(DomainError::validation("amount must be a finite number"));
        }
        let cents = (amount * 100.0).round();
        if cents.abs() > Self::MAX_EXACT.0 as f64 {
            return Err(DomainError::validation("amount out of range"));
        }
        Ok(Self(cents as i64))
    }

    pub fn as_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Within `±MAX_EXACT`.
    pub fn is_wire_exact(self) -> bool {
        self.0.unsigned_abs() <= Self::MAX_EXACT.0.unsigned_abs()
    }

    /// `self × quantity`, or `None` on overflow.
    pub fn checked_times(self, quantity: i64) -> Option<Money> {
        self.0.checked_mul(quantity).map(Money)
    }

    /// `self + rhs`, or `None` on overflow.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }
}

/// Saturates at the `i64` bounds. Use [`Money::checked_add`] where overflow
/// must be reported.
impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

/// Always two decimal places: `7.50`, `-0.05`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Accepts `2.5`, `2.50` and the comma form `2,50`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(',', ".");
        let amount = normalized
            .parse::<f64>()
            .map_err(|e| DomainError::validation(format!("invalid amount '{}': {}", s.trim(), e)))?;
        Money::from_decimal(amount)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::from_decimal(amount).map_err(serde::de::Error::custom)
    }
}
