use {
    crate::{
        amount::Amount,
        model::prefix::{PrefixedQuantity, UnitPrefix},
        sanitize::clean_amount,
    },
    regex::Regex,
    std::sync::OnceLock,
    tracing::trace,
};

/// Number, optional whitespace, optional prefix symbol, unit code.
const PREFIXED_QUANTITY_PATTERN: &str =
    r"^\s*([-+]?(?:[0-9][0-9,]*(?:\.[0-9]+)?|\.[0-9]+))\s*([m\x{b5}\x{3bc}])?(\p{L}[\p{L}\p{N}]*)\s*$";

fn prefixed_quantity_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();

    REGEX.get_or_init(|| Regex::new(PREFIXED_QUANTITY_PATTERN).expect("pattern is valid"))
}

/// Splits a quantity string such as `"110.4089 µKSM"` into value, prefix and
/// unit, with the value converted to the base unit.
///
/// Returns `None` if the input does not look like a quantity.
pub fn parse_prefixed_quantity(input: &str) -> Option<PrefixedQuantity> {
    let captures = match prefixed_quantity_regex().captures(input) {
        Some(captures) => captures,
        None => {
            trace!(input, "no quantity found in unit string");
            return None;
        }
    };

    let prefix = captures
        .get(2)
        .and_then(|symbol| symbol.as_str().chars().next())
        .and_then(UnitPrefix::from_symbol)
        .unwrap_or_default();
    let value = clean_amount(&captures[1])
        .div_pow10(prefix.exponent())
        .normalize();

    Some(PrefixedQuantity {
        value,
        prefix,
        unit: captures[3].to_string(),
    })
}

/// Returns the base-unit value of a quantity string, or zero if it cannot be
/// parsed. `"1.9200 mWND"` is `0.00192`.
pub fn parse_prefixed(input: &str) -> Amount {
    parse_prefixed_quantity(input)
        .map(|quantity| quantity.value)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use {super::*, std::str::FromStr};

    fn amount(s: &str) -> Amount {
        Amount::from_str(s).unwrap()
    }

    #[test]
    fn test_micro() {
        assert_eq!(parse_prefixed("110.4089 µKSM"), amount("0.0001104089"));
        // Greek small mu instead of the micro sign.
        assert_eq!(parse_prefixed("110.4089 μKSM"), amount("0.0001104089"));
    }

    #[test]
    fn test_milli() {
        assert_eq!(parse_prefixed("1.9200 mWND"), amount("0.00192"));
        assert_eq!(parse_prefixed("1.9200mWND"), amount("0.00192"));
    }

    #[test]
    fn test_no_prefix() {
        assert_eq!(parse_prefixed("0.001919 WND"), amount("0.001919"));
        assert_eq!(parse_prefixed("1,234.5 DOT"), amount("1234.5"));
    }

    #[test]
    fn test_quantity_parts() {
        let quantity = parse_prefixed_quantity("  42 mKSM ").unwrap();
        assert_eq!(quantity.prefix, UnitPrefix::Milli);
        assert_eq!(quantity.unit, "KSM");
        assert_eq!(quantity.value.to_string(), "0.042");

        let quantity = parse_prefixed_quantity("3 m").unwrap();
        assert_eq!(quantity.prefix, UnitPrefix::None);
        assert_eq!(quantity.unit, "m");
    }

    #[test]
    fn test_miss_is_zero() {
        assert!(parse_prefixed("").is_zero());
        assert!(parse_prefixed("KSM").is_zero());
        assert!(parse_prefixed("12").is_zero());
        assert!(parse_prefixed("about 5 KSM").is_zero());
        assert!(parse_prefixed_quantity("1.2.3 KSM").is_none());
        // Arabic-Indic digit three.
        assert!(parse_prefixed_quantity("\u{663} KSM").is_none());
    }
}
