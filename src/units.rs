use crate::{
    model::decimals::TokenDecimals,
    sanitize::{clean_amount, Quantity},
};

/// Converts a decimal token amount to raw base units.
///
/// Fractional digits beyond `decimals` are floored away, so an inexact number
/// of base units never rounds up.
///
/// For example, passing in `"0.000009"` with 5 decimals returns `"0"`.
pub fn to_base_units<'a>(
    value: impl Into<Quantity<'a>>,
    decimals: impl Into<TokenDecimals>,
) -> String {
    let decimals = decimals.into().get();

    clean_amount(value).mul_pow10(decimals).floor().to_string()
}

/// Converts a raw base-unit amount into a decimal token amount.
///
/// The division is exact; trailing fractional zeros are dropped. Apply this
/// once per raw value. A value that is already scaled must go through
/// `classify::resolve_balance` instead.
pub fn from_base_units<'a>(
    raw: impl Into<Quantity<'a>>,
    decimals: impl Into<TokenDecimals>,
) -> String {
    let decimals = decimals.into().get();

    clean_amount(raw).div_pow10(decimals).normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEN_TRILLION: &str = "10000000000000";

    #[test]
    fn test_to_base_units() {
        assert_eq!(to_base_units("0.000009", 5u8), "0");
        assert_eq!(to_base_units("0.00015", 5u8), "15");
        assert_eq!(to_base_units("5", 5u8), "500000");
        assert_eq!(to_base_units("5.1", 5u8), "510000");
        assert_eq!(to_base_units("5.123459", 5u8), "512345");
        assert_eq!(to_base_units(TEN_TRILLION, 5u8), "1000000000000000000");
        assert_eq!(to_base_units("1.5", 18u8), "1500000000000000000");
        assert_eq!(to_base_units("-1.5", 0u8), "-2");
    }

    #[test]
    fn test_from_base_units() {
        assert_eq!(from_base_units("15", 5u8), "0.00015");
        assert_eq!(from_base_units("500000", 5u8), "5");
        assert_eq!(from_base_units("510000", 5u8), "5.1");
        assert_eq!(from_base_units("512345", 5u8), "5.12345");
        assert_eq!(from_base_units("1000000000000000000", 5u8), TEN_TRILLION);
    }

    #[test]
    fn test_from_base_units_grouped_input() {
        assert_eq!(from_base_units("87,987,100,000", "10"), "8.79871");
        assert_eq!(from_base_units("1,234", "12"), "0.000000001234");
    }

    #[test]
    fn test_large_supply_keeps_every_digit() {
        let raw = "123456789012345678901234567890123456789";
        assert_eq!(
            from_base_units(raw, 18u8),
            "123456789012345678901.234567890123456789"
        );
        assert_eq!(to_base_units(from_base_units(raw, 18u8).as_str(), 18u8), raw);
    }

    #[test]
    fn test_missing_inputs() {
        assert_eq!(from_base_units("1234", None::<u8>), "1234");
        assert_eq!(from_base_units(None::<&str>, 12u8), "0");
        assert_eq!(from_base_units("", 12u8), "0");
        assert_eq!(to_base_units("not a number", 6u8), "0");
    }
}
