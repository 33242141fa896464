use crate::{amount::Amount, sanitize::Quantity};

/// One row of the abbreviation table.
struct Magnitude {
    /// Power of ten the value must reach, and is divided by.
    exponent: u32,
    suffix: &'static str,
    places: u32,
    trim: Trim,
}

#[derive(Copy, Clone)]
enum Trim {
    /// Drop a trailing ".0" only.
    PointZero,

    /// Drop every trailing fractional zero.
    Zeros,
}

/// Ordered largest first; the first row the magnitude reaches wins.
const MAGNITUDES: [Magnitude; 4] = [
    Magnitude {
        exponent: 9,
        suffix: "B",
        places: 1,
        trim: Trim::PointZero,
    },
    Magnitude {
        exponent: 6,
        suffix: "M",
        places: 1,
        trim: Trim::PointZero,
    },
    Magnitude {
        exponent: 3,
        suffix: "K",
        places: 1,
        trim: Trim::PointZero,
    },
    Magnitude {
        exponent: 0,
        suffix: "",
        places: 2,
        trim: Trim::Zeros,
    },
];

/// Places used for magnitudes below one.
const FRACTION_PLACES: u32 = 4;

/// Abbreviates a value for display: `1500000` becomes `"1.5M"`, `999`
/// stays `"999"`, `0.123456` becomes `"0.1235"`.
///
/// Zero and non-numeric input render as `"0"`. Negative values are formatted
/// by magnitude with the sign reattached.
pub fn format_compact<'a>(value: impl Into<Quantity<'a>>) -> String {
    let value = match value.into().to_amount() {
        Some(value) if !value.is_zero() => value,
        _ => return "0".to_string(),
    };

    let body = format_magnitude(&value.abs());
    if body == "0" || !value.is_sign_negative() {
        body
    } else {
        format!("-{}", body)
    }
}

fn format_magnitude(magnitude: &Amount) -> String {
    for row in MAGNITUDES.iter() {
        if *magnitude >= Amount::from(1u8).mul_pow10(row.exponent) {
            let fixed = magnitude.div_pow10(row.exponent).to_fixed(row.places);
            return format!("{}{}", trim(&fixed, row.trim), row.suffix);
        }
    }

    trim(&magnitude.to_fixed(FRACTION_PLACES), Trim::Zeros).to_string()
}

fn trim(fixed: &str, trim: Trim) -> &str {
    match trim {
        Trim::PointZero => fixed.strip_suffix(".0").unwrap_or(fixed),
        Trim::Zeros if fixed.contains('.') => fixed.trim_end_matches('0').trim_end_matches('.'),
        Trim::Zeros => fixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes() {
        assert_eq!(format_compact(1_500_000u32), "1.5M");
        assert_eq!(format_compact(2_000_000_000u64), "2B");
        assert_eq!(format_compact("12,340,000,000"), "12.3B");
        assert_eq!(format_compact(1_000u32), "1K");
        assert_eq!(format_compact("1050"), "1.1K");
        assert_eq!(format_compact("999999"), "1000K");
    }

    #[test]
    fn test_small_values() {
        assert_eq!(format_compact(999u32), "999");
        assert_eq!(format_compact("1.5"), "1.5");
        assert_eq!(format_compact("12.345"), "12.35");
        assert_eq!(format_compact("0.123456"), "0.1235");
        assert_eq!(format_compact("0.5"), "0.5");
        assert_eq!(format_compact("0.00001"), "0");
    }

    #[test]
    fn test_zero_and_garbage() {
        assert_eq!(format_compact(0u8), "0");
        assert_eq!(format_compact("0.000"), "0");
        assert_eq!(format_compact(f64::NAN), "0");
        assert_eq!(format_compact("n/a"), "0");
        assert_eq!(format_compact(None::<&str>), "0");
    }

    #[test]
    fn test_negative_mirrors_magnitude() {
        assert_eq!(format_compact(-1_500_000i64), "-1.5M");
        assert_eq!(format_compact("-0.25"), "-0.25");
        assert_eq!(format_compact("-0.00001"), "0");
    }
}
