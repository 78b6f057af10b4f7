//! Type-safe price representation in minor currency units.
//!
//! Catalog prices are whole numbers of the currency's minor unit (paise for
//! INR), so cart arithmetic stays exact integer math. Conversion to a
//! decimal amount only happens for display.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative amount in minor units of the store currency.
///
/// Serializes as a bare integer, which is how the catalog file stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Create a price from minor units (e.g. `129_900` for ₹1,299.00).
    #[must_use]
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a price from whole major units (e.g. `1_299` for ₹1,299.00).
    #[must_use]
    pub const fn from_major(major: i64) -> Self {
        Self(major.saturating_mul(100))
    }

    /// Amount in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Amount in major units as a decimal (e.g. `1299.00`).
    #[must_use]
    pub fn amount(self) -> Decimal {
        Decimal::new(self.0, CurrencyCode::default().exponent())
    }

    /// Price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Difference to a lower price, clamped at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        let diff = self.0.saturating_sub(other.0);
        if diff < 0 { Self::ZERO } else { Self(diff) }
    }

    /// Format for display in the given currency (e.g. `₹1,299` or `₹49.50`).
    ///
    /// Whole amounts drop the fractional part, matching how prices are shown
    /// on product cards.
    #[must_use]
    pub fn display_in(self, currency: CurrencyCode) -> String {
        let scale = 10_i64.pow(currency.exponent());
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = scale.unsigned_abs();
        let whole = group_thousands(abs / scale);
        let fraction = abs % scale;

        if fraction == 0 {
            format!("{sign}{}{whole}", currency.symbol())
        } else {
            format!(
                "{sign}{}{whole}.{fraction:0width$}",
                currency.symbol(),
                width = currency.exponent() as usize
            )
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_in(CurrencyCode::default()))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Insert `,` separators every three digits.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// ISO 4217 currency codes the storefront can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::INR => "₹",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// Number of minor-unit digits.
    #[must_use]
    pub const fn exponent(self) -> u32 {
        2
    }
}
