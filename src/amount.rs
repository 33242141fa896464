use {
    crate::error::{Error, Result},
    num_bigint::{BigInt, Sign},
    num_traits::{One, Signed, Zero},
    rust_decimal::{Decimal, RoundingStrategy},
    serde::{de, Deserialize, Deserializer, Serialize, Serializer},
    std::{
        cmp::Ordering,
        convert::TryFrom,
        fmt,
        ops::{Add, Mul, Neg, Sub},
        str::FromStr,
    },
};

/// Largest exponent accepted in scientific input such as `"1e18"`.
pub const MAX_EXPONENT: i64 = 1_000;

/// Largest scale a `rust_decimal::Decimal` can carry.
const DECIMAL_MAX_SCALE: u32 = 28;

/// An arbitrary-precision decimal amount.
///
/// The value is `mantissa / 10^scale`. Every operation on this type is exact;
/// precision is only ever dropped by an explicit rounding call.
#[derive(Debug, Clone, Default)]
pub struct Amount {
    mantissa: BigInt,
    scale: u32,
}

impl Amount {
    pub fn new(mantissa: impl Into<BigInt>, scale: u32) -> Amount {
        Amount {
            mantissa: mantissa.into(),
            scale,
        }
    }

    pub fn zero() -> Amount {
        Amount::default()
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_sign_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    pub fn abs(&self) -> Amount {
        Amount::new(self.mantissa.abs(), self.scale)
    }

    /// Strips trailing fractional zeros.
    pub fn normalize(&self) -> Amount {
        if self.mantissa.is_zero() {
            return Amount::zero();
        }

        let digits = self.mantissa.magnitude().to_string();
        let zeros = digits.bytes().rev().take_while(|b| *b == b'0').count();
        let strip = (zeros as u32).min(self.scale);
        if strip == 0 {
            return self.clone();
        }

        let kept = &digits[..digits.len() - strip as usize];
        let magnitude = BigInt::parse_bytes(kept.as_bytes(), 10).unwrap_or_default();
        let mantissa = if self.mantissa.is_negative() {
            -magnitude
        } else {
            magnitude
        };

        Amount::new(mantissa, self.scale - strip)
    }

    /// Multiplies by `10^places`.
    pub fn mul_pow10(&self, places: u32) -> Amount {
        if self.scale >= places {
            Amount::new(self.mantissa.clone(), self.scale - places)
        } else {
            Amount::new(&self.mantissa * pow10(places - self.scale), 0)
        }
    }

    /// Divides by `10^places`.
    pub fn div_pow10(&self, places: u32) -> Amount {
        Amount::new(self.mantissa.clone(), self.scale + places)
    }

    /// Rounds to at most `dp` fractional digits using the given strategy.
    ///
    /// Amounts that already have `dp` or fewer digits are returned unchanged.
    #[allow(deprecated)]
    pub fn round_dp_with_strategy(&self, dp: u32, strategy: RoundingStrategy) -> Amount {
        if self.scale <= dp {
            return self.clone();
        }

        let divisor = pow10(self.scale - dp);
        let quotient = &self.mantissa / &divisor;
        let remainder = &self.mantissa % &divisor;
        if remainder.is_zero() {
            return Amount::new(quotient, dp);
        }

        let negative = self.mantissa.is_negative();
        let away = if negative { -BigInt::one() } else { BigInt::one() };

        // Twice the remainder against the divisor tells us which side of the
        // midpoint we are on.
        let midpoint = (remainder.abs() * 2u8).cmp(&divisor);

        let round_away = match strategy {
            RoundingStrategy::ToZero | RoundingStrategy::RoundDown => false,
            RoundingStrategy::AwayFromZero | RoundingStrategy::RoundUp => true,
            RoundingStrategy::ToNegativeInfinity => negative,
            RoundingStrategy::ToPositiveInfinity => !negative,
            RoundingStrategy::MidpointAwayFromZero | RoundingStrategy::RoundHalfUp => {
                midpoint != Ordering::Less
            }
            RoundingStrategy::MidpointTowardZero | RoundingStrategy::RoundHalfDown => {
                midpoint == Ordering::Greater
            }
            RoundingStrategy::MidpointNearestEven | RoundingStrategy::BankersRounding => {
                match midpoint {
                    Ordering::Greater => true,
                    Ordering::Less => false,
                    Ordering::Equal => !(&quotient % 2u8).is_zero(),
                }
            }
        };

        if round_away {
            Amount::new(quotient + away, dp)
        } else {
            Amount::new(quotient, dp)
        }
    }

    /// Drops fractional digits beyond `dp` without rounding.
    pub fn trunc_dp(&self, dp: u32) -> Amount {
        self.round_dp_with_strategy(dp, RoundingStrategy::ToZero)
    }

    /// Largest integer not greater than this amount.
    pub fn floor(&self) -> Amount {
        self.round_dp_with_strategy(0, RoundingStrategy::ToNegativeInfinity)
    }

    /// Renders with exactly `dp` fractional digits, rounding half away from zero.
    pub fn to_fixed(&self, dp: u32) -> String {
        self.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
            .with_scale(dp)
            .to_string()
    }

    /// Converts into a `rust_decimal::Decimal`.
    ///
    /// Fractional digits beyond what `Decimal` can hold are rounded with the
    /// midpoint-nearest-even strategy; returns `None` when the integer part
    /// does not fit.
    pub fn to_decimal(&self) -> Option<Decimal> {
        let mut amount = self.normalize();
        if amount.scale > DECIMAL_MAX_SCALE {
            amount = amount
                .round_dp_with_strategy(DECIMAL_MAX_SCALE, RoundingStrategy::MidpointNearestEven);
        }

        let mantissa = i128::try_from(&amount.mantissa).ok()?;
        Decimal::try_from_i128_with_scale(mantissa, amount.scale).ok()
    }

    /// Pads the mantissa out to `scale` digits. Never drops digits.
    fn with_scale(&self, scale: u32) -> Amount {
        if scale <= self.scale {
            return self.clone();
        }

        Amount::new(&self.mantissa * pow10(scale - self.scale), scale)
    }

    /// Returns both mantissas expressed at the larger of the two scales.
    fn aligned(&self, other: &Amount) -> (BigInt, BigInt, u32) {
        let scale = self.scale.max(other.scale);
        (
            self.with_scale(scale).mantissa,
            other.with_scale(scale).mantissa,
            scale,
        )
    }
}

/// Returns `10^exponent` as a big integer.
fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u8).pow(exponent)
}

impl FromStr for Amount {
    type Err = Error;

    /// Parses a plain or scientific decimal literal: `"12"`, `"-0.5"`,
    /// `".25"`, `"3."`, `"1.5e-7"`. Grouping characters are not accepted.
    fn from_str(s: &str) -> Result<Amount> {
        let invalid = || Error::InvalidAmount(s.to_string());

        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (literal, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
            Some(index) => {
                let exponent = &unsigned[index + 1..];
                let exponent: i64 = exponent.parse().map_err(|_| invalid())?;
                if !(-MAX_EXPONENT..=MAX_EXPONENT).contains(&exponent) {
                    return Err(Error::ExponentOutOfRange(exponent));
                }
                (&unsigned[..index], exponent)
            }
            None => (unsigned, 0),
        };

        let (integer, fraction) = match literal.find('.') {
            Some(index) => (&literal[..index], &literal[index + 1..]),
            None => (literal, ""),
        };

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if integer.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !is_digits(integer) || !is_digits(fraction) {
            return Err(invalid());
        }

        let digits = format!("{}{}", integer, fraction);
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let mantissa = if negative { -magnitude } else { magnitude };

        let scale = fraction.len() as i64 - exponent;
        if scale >= 0 {
            Ok(Amount::new(mantissa, scale as u32))
        } else {
            Ok(Amount::new(mantissa * pow10((-scale) as u32), 0))
        }
    }
}

impl fmt::Display for Amount {
    /// Plain positional notation, never exponential.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.magnitude().to_string();
        let sign = if self.mantissa.sign() == Sign::Minus {
            "-"
        } else {
            ""
        };

        let scale = self.scale as usize;
        if scale == 0 {
            return write!(f, "{}{}", sign, digits);
        }

        if digits.len() <= scale {
            let zeros = "0".repeat(scale - digits.len());
            write!(f, "{}0.{}{}", sign, zeros, digits)
        } else {
            let (integer, fraction) = digits.split_at(digits.len() - scale);
            write!(f, "{}{}.{}", sign, integer, fraction)
        }
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Amount) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Amount {}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Amount) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Amount {
    fn cmp(&self, other: &Amount) -> Ordering {
        let (lhs, rhs, _) = self.aligned(other);
        lhs.cmp(&rhs)
    }
}

impl<'a> Add<&'a Amount> for &'a Amount {
    type Output = Amount;

    fn add(self, rhs: &Amount) -> Amount {
        let (lhs, rhs, scale) = self.aligned(rhs);
        Amount::new(lhs + rhs, scale)
    }
}

impl<'a> Sub<&'a Amount> for &'a Amount {
    type Output = Amount;

    fn sub(self, rhs: &Amount) -> Amount {
        let (lhs, rhs, scale) = self.aligned(rhs);
        Amount::new(lhs - rhs, scale)
    }
}

impl<'a> Mul<&'a Amount> for &'a Amount {
    type Output = Amount;

    fn mul(self, rhs: &Amount) -> Amount {
        Amount::new(&self.mantissa * &rhs.mantissa, self.scale + rhs.scale)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        &self + &rhs
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        &self - &rhs
    }
}

impl Mul for Amount {
    type Output = Amount;

    fn mul(self, rhs: Amount) -> Amount {
        &self * &rhs
    }
}

impl Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        Amount::new(-self.mantissa, self.scale)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Amount {
        Amount::new(value.mantissa(), value.scale())
    }
}

impl From<BigInt> for Amount {
    fn from(value: BigInt) -> Amount {
        Amount::new(value, 0)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Amount {
                fn from(value: $t) -> Amount {
                    Amount::new(value, 0)
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Amount, D::Error> {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(de::Error::custom)
    }
}
