use super::{balance_to_big_uint, Balance};

use eyre::{eyre, Report, Result};
use fraction::{BigUint, GenericFraction};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

const PERCENT: u32 = 100;
const DEFAULT_DISPLAY_PLACES: usize = 18;

// Exact percentage of a pool's balance, kept as a rational so comparisons and
// rendering never lose precision on 18+ decimal token amounts.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct LiquidityRatio(GenericFraction<BigUint>);

impl LiquidityRatio {
    // amount / balance * 100. A zero balance saturates to 100.
    pub fn of(amount: &Balance, balance: &Balance) -> Self {
        if balance.is_zero() {
            return Self::saturated();
        }

        Self(GenericFraction::new(
            balance_to_big_uint(amount) * BigUint::from(PERCENT),
            balance_to_big_uint(balance),
        ))
    }

    pub fn from_percent(percent: u64) -> Self {
        Self(GenericFraction::new(
            BigUint::from(percent),
            BigUint::from(1_u32),
        ))
    }

    pub fn saturated() -> Self {
        Self::from_percent(PERCENT.into())
    }

    pub fn exceeds(&self, threshold: &LiquidityRatio) -> bool {
        self > threshold
    }

    // Decimal rendering rounded half-up to `places` fractional digits.
    pub fn to_fixed(&self, places: u32) -> String {
        let (numer, denom) = match (self.0.numer(), self.0.denom()) {
            (Some(numer), Some(denom)) => (numer, denom),
            _ => return self.0.to_string(),
        };

        let scaled = numer * BigUint::from(10_u32).pow(places);
        let remainder = &scaled % denom;
        let mut quotient = scaled / denom;
        if remainder * 2_u32 >= *denom {
            quotient += 1_u32;
        }

        let digits = quotient.to_string();
        if places == 0 {
            return digits;
        }

        let places = places as usize;
        let digits = format!("{:0>width$}", digits, width = places + 1);
        let (integer, fractional) = digits.split_at(digits.len() - places);

        format!("{}.{}", integer, fractional)
    }
}

impl Display for LiquidityRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = f.precision().unwrap_or(DEFAULT_DISPLAY_PLACES);
        write!(f, "{}", self.to_fixed(places as u32))
    }
}

// Parses a non-negative decimal percentage such as "10" or "12.5".
impl FromStr for LiquidityRatio {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (integer, fractional) = s.split_once('.').unwrap_or((s, ""));

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (integer.is_empty() && fractional.is_empty())
            || !is_digits(integer)
            || !is_digits(fractional)
        {
            return Err(eyre!("Failed to parse percentage: {:?}", s));
        }

        let numer = BigUint::parse_bytes(format!("{}{}", integer, fractional).as_bytes(), 10)
            .ok_or_else(|| eyre!("Failed to parse percentage: {:?}", s))?;
        let denom = BigUint::from(10_u32).pow(fractional.len() as u32);

        Ok(Self(GenericFraction::new(numer, denom)))
    }
}
