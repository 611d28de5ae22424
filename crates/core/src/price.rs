//! Monetary amounts for unit prices and purchase totals.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Non-negative amount in the smallest currency unit (cents).
///
/// Integer cents keep `unit price * quantity` exact: 45.99 * 2 is 91.98, not
/// 91.97999.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Build a price from a decimal amount in major units (e.g. `45.99`).
    ///
    /// Rounds to the nearest cent. Negative, NaN and infinite amounts are rejected.
    pub fn from_major(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::invalid_input("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::invalid_input("price cannot be negative"));
        }
        let cents = (amount * 100.0).round();
        if cents > u64::MAX as f64 {
            return Err(DomainError::invalid_input("price is too large"));
        }
        Ok(Self(cents as u64))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Amount in major units, for display and interop only.
    pub fn as_major(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// `self * quantity`, or `None` on overflow.
    pub fn checked_mul(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(u64::from(quantity)).map(Self)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_major_rounds_to_nearest_cent() {
        assert_eq!(Price::from_major(45.99).unwrap().cents(), 4599);
        assert_eq!(Price::from_major(14.99).unwrap().cents(), 1499);
        assert_eq!(Price::from_major(0.005).unwrap().cents(), 1);
        assert_eq!(Price::from_major(0.0).unwrap(), Price::ZERO);
    }

    #[test]
    fn from_major_rejects_negative_and_non_finite() {
        for amount in [-0.01, f64::NAN, f64::INFINITY] {
            match Price::from_major(amount) {
                Err(DomainError::InvalidInput(_)) => {}
                other => panic!("Expected InvalidInput for {amount}, got {other:?}"),
            }
        }
    }

    #[test]
    fn multiplication_is_exact() {
        let total = Price::from_cents(4599).checked_mul(2).unwrap();
        assert_eq!(total, Price::from_cents(9198));
        assert_eq!(total.to_string(), "$91.98");
    }

    #[test]
    fn multiplication_reports_overflow() {
        assert_eq!(Price::from_cents(u64::MAX).checked_mul(2), None);
    }

    #[test]
    fn display_pads_cents() {
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
        assert_eq!(Price::from_cents(5999).to_string(), "$59.99");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: a total is unit price times quantity, in whole cents.
            #[test]
            fn total_matches_integer_product(cents in 0u64..10_000_000, quantity in 1u32..1_000) {
                let total = Price::from_cents(cents).checked_mul(quantity).unwrap();
                prop_assert_eq!(total.cents(), cents * u64::from(quantity));
            }
        }
    }
}
