use crate::Result;

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point currency amount, stored in ten-thousandths of a unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const SCALE: i64 = 10000;

    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    /// Builds an amount from whole units, e.g. `Money::units(500)` is 500.00.
    ///
    /// Meant for literals and constants; use `checked_units` for values known only at runtime.
    pub const fn units(units: i64) -> Self {
        Self(units * Self::SCALE)
    }

    pub fn checked_units(units: i64) -> Result<Self> {
        match units.checked_mul(Self::SCALE) {
            Some(value) => Ok(Money(value)),
            None => Err(MoneyError::Overflow("units", Money(units), Money(Self::SCALE)))?,
        }
    }

    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let mut parts = digits.split('.');

        if parts.clone().count() > 2 {
            Err(MoneyError::Parse("Too many decimal points", string.to_string()))?
        }

        let whole = parts.next().unwrap_or("");
        let fraction = parts.next().unwrap_or("");

        if whole.is_empty() && fraction.is_empty() {
            Err(MoneyError::Parse("No digits", string.to_string()))?
        }

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            Err(MoneyError::Parse("Invalid character", string.to_string()))?
        }

        // Anything past four fractional digits is truncated
        let fraction = format!("{:0<4}", fraction)[..4].to_string();

        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse()? };
        let fraction: i64 = fraction.parse()?;

        let value = Self::checked_units(whole)
            .ok()
            .and_then(|whole| whole.0.checked_add(fraction))
            .ok_or_else(|| MoneyError::Parse("Amount out of range", string.to_string()))?;

        if negative {
            return Ok(Money(-value));
        }

        Ok(Money(value))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, other: Self) -> Result<Self> {
        match self.0.checked_add(other.0) {
            Some(value) => Ok(Money(value)),
            None if other.0 > 0 => Err(MoneyError::Overflow("add", self, other))?,
            None => Err(MoneyError::Underflow("add", self, other))?,
        }
    }

    pub fn checked_sub(self, other: Self) -> Result<Self> {
        match self.0.checked_sub(other.0) {
            Some(value) => Ok(Money(value)),
            None if other.0 < 0 => Err(MoneyError::Overflow("sub", self, other))?,
            None => Err(MoneyError::Underflow("sub", self, other))?,
        }
    }
}

/// Renders with two decimal places, rounding half away from zero
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cents_scale = (Self::SCALE / 100) as i128;
        let value = self.0 as i128;

        let cents = if value >= 0 {
            (value + cents_scale / 2) / cents_scale
        } else {
            (value - cents_scale / 2) / cents_scale
        };

        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.abs();

        write!(f, "{}{}.{:02}", sign, cents / 100, cents % 100)
    }
}
