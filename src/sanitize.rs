use {
    crate::amount::Amount,
    num_bigint::BigInt,
    rust_decimal::Decimal,
    std::{borrow::Cow, str::FromStr},
    tracing::trace,
};

/// Largest magnitude a native float represents with integer precision (2^53).
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// A numeric value as it arrives at the boundary of the crate.
#[derive(Debug, Clone)]
pub enum Quantity<'a> {
    /// Text, possibly grouped with commas or whitespace ("1,234 567").
    Text(Cow<'a, str>),

    /// A native float. Already imprecise beyond 2^53.
    Native(f64),

    Integer(BigInt),

    Decimal(Decimal),

    Amount(Cow<'a, Amount>),

    Missing,
}

impl<'a> Quantity<'a> {
    /// Returns the parsed amount, or `None` if the input is missing or unparsable.
    pub fn to_amount(&self) -> Option<Amount> {
        match self {
            Quantity::Text(text) => {
                let stripped: String = text
                    .chars()
                    .filter(|c| *c != ',' && !c.is_whitespace())
                    .collect();
                if stripped.is_empty() {
                    return None;
                }

                match Amount::from_str(&stripped) {
                    Ok(amount) => Some(amount),
                    Err(err) => {
                        trace!(input = %text, %err, "unparsable quantity treated as zero");
                        None
                    }
                }
            }
            Quantity::Native(value) => native_to_amount(*value),
            Quantity::Integer(value) => Some(Amount::from(value.clone())),
            Quantity::Decimal(value) => Some(Amount::from(*value)),
            Quantity::Amount(value) => Some(value.clone().into_owned()),
            Quantity::Missing => None,
        }
    }
}

/// Converts a native float without introducing exponential notation or
/// additional rounding.
fn native_to_amount(value: f64) -> Option<Amount> {
    if !value.is_finite() {
        trace!(value, "non-finite native quantity treated as zero");
        return None;
    }
    if value.abs() > MAX_EXACT_FLOAT {
        trace!(value, "native quantity exceeds exact integer precision");
    }

    // Display of an f64 is the shortest round-trip form and never exponential.
    Amount::from_str(&value.to_string())
        .ok()
        .map(|amount| amount.normalize())
}

/// Normalizes any supported input into a canonical decimal string.
///
/// Grouping characters are stripped, native numbers are rendered without
/// exponential notation, and anything missing or unparsable becomes `"0"`.
/// The output is always accepted by `Amount::from_str`, and cleaning it again
/// returns it unchanged.
pub fn clean<'a>(value: impl Into<Quantity<'a>>) -> String {
    value
        .into()
        .to_amount()
        .unwrap_or_default()
        .to_string()
}

/// Same as `clean`, but returns the parsed amount.
pub fn clean_amount<'a>(value: impl Into<Quantity<'a>>) -> Amount {
    value.into().to_amount().unwrap_or_default()
}

impl<'a> From<&'a str> for Quantity<'a> {
    fn from(value: &'a str) -> Quantity<'a> {
        Quantity::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Quantity<'a> {
    fn from(value: &'a String) -> Quantity<'a> {
        Quantity::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Quantity<'static> {
    fn from(value: String) -> Quantity<'static> {
        Quantity::Text(Cow::Owned(value))
    }
}

impl From<f64> for Quantity<'static> {
    fn from(value: f64) -> Quantity<'static> {
        Quantity::Native(value)
    }
}

impl From<f32> for Quantity<'static> {
    /// Rendered at f32 precision; widening to f64 first would invent digits.
    fn from(value: f32) -> Quantity<'static> {
        if !value.is_finite() {
            return Quantity::Missing;
        }

        match Amount::from_str(&value.to_string()) {
            Ok(amount) => Quantity::Amount(Cow::Owned(amount.normalize())),
            Err(_) => Quantity::Missing,
        }
    }
}

impl From<Decimal> for Quantity<'static> {
    fn from(value: Decimal) -> Quantity<'static> {
        Quantity::Decimal(value)
    }
}

impl From<BigInt> for Quantity<'static> {
    fn from(value: BigInt) -> Quantity<'static> {
        Quantity::Integer(value)
    }
}

impl From<Amount> for Quantity<'static> {
    fn from(value: Amount) -> Quantity<'static> {
        Quantity::Amount(Cow::Owned(value))
    }
}

impl<'a> From<&'a Amount> for Quantity<'a> {
    fn from(value: &'a Amount) -> Quantity<'a> {
        Quantity::Amount(Cow::Borrowed(value))
    }
}

impl<'a, T: Into<Quantity<'a>>> From<Option<T>> for Quantity<'a> {
    fn from(value: Option<T>) -> Quantity<'a> {
        value.map(Into::into).unwrap_or(Quantity::Missing)
    }
}

macro_rules! impl_quantity_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Quantity<'static> {
                fn from(value: $t) -> Quantity<'static> {
                    Quantity::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_quantity_from_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_grouping() {
        assert_eq!(clean("87,987,100,000"), "87987100000");
        assert_eq!(clean(" 1 234 567 "), "1234567");
        assert_eq!(clean("1,234.50"), "1234.50");
        assert_eq!(clean("12\u{a0}345"), "12345");
    }

    #[test]
    fn test_clean_missing_and_malformed() {
        assert_eq!(clean(""), "0");
        assert_eq!(clean("   "), "0");
        assert_eq!(clean(None::<&str>), "0");
        assert_eq!(clean("abc"), "0");
        assert_eq!(clean("12abc"), "0");
        assert_eq!(clean(f64::NAN), "0");
        assert_eq!(clean(f64::INFINITY), "0");
    }

    #[test]
    fn test_clean_native_numbers() {
        assert_eq!(clean(1234.5), "1234.5");
        assert_eq!(clean(1e21), "1000000000000000000000");
        assert_eq!(clean(0.5), "0.5");
        assert_eq!(clean(42u64), "42");
        assert_eq!(clean(u128::MAX), "340282366920938463463374607431768211455");
    }

    #[test]
    fn test_clean_f32_keeps_its_own_digits() {
        assert_eq!(clean(0.1f32), "0.1");
        assert_eq!(clean(24795.5f32), "24795.5");
        assert_eq!(clean(f32::NAN), "0");
    }

    #[test]
    fn test_clean_expands_scientific_text() {
        assert_eq!(clean("1e3"), "1000");
        assert_eq!(clean("2.5E-3"), "0.0025");
    }

    #[test]
    fn test_clean_is_idempotent() {
        for input in &["1,234.50", "+007", "-0.0", ".5", "1e-9", "garbage", ""] {
            let once = clean(*input);
            assert_eq!(clean(once.as_str()), once, "input {:?}", input);
        }
    }
}
