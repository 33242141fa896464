use {std::convert::TryFrom, tracing::warn};

/// The fixed-point scale of an asset: how many fractional digits sit between
/// its raw on-chain units and its human-readable amount.
///
/// Missing, unparsable and out-of-range values collapse to zero (no scaling).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenDecimals(u32);

impl TokenDecimals {
    /// Largest accepted scale. A 256-bit integer has at most 78 digits.
    pub const MAX: u32 = 77;

    /// Returns the scale, or zero if `value` exceeds `TokenDecimals::MAX`.
    pub fn new(value: u32) -> TokenDecimals {
        if value > TokenDecimals::MAX {
            warn!(value, "token decimals out of range, using 0");
            return TokenDecimals(0);
        }

        TokenDecimals(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> TokenDecimals {
        TokenDecimals::new(value as u32)
    }
}

impl From<u16> for TokenDecimals {
    fn from(value: u16) -> TokenDecimals {
        TokenDecimals::new(value as u32)
    }
}

impl From<u32> for TokenDecimals {
    fn from(value: u32) -> TokenDecimals {
        TokenDecimals::new(value)
    }
}

impl From<u64> for TokenDecimals {
    fn from(value: u64) -> TokenDecimals {
        TokenDecimals::new(u32::try_from(value).unwrap_or(u32::MAX))
    }
}

impl From<usize> for TokenDecimals {
    fn from(value: usize) -> TokenDecimals {
        TokenDecimals::new(u32::try_from(value).unwrap_or(u32::MAX))
    }
}

impl From<i32> for TokenDecimals {
    fn from(value: i32) -> TokenDecimals {
        TokenDecimals::new(u32::try_from(value).unwrap_or(u32::MAX))
    }
}

impl From<&str> for TokenDecimals {
    fn from(value: &str) -> TokenDecimals {
        match value.trim().parse::<u32>() {
            Ok(decimals) => TokenDecimals::new(decimals),
            Err(_) => {
                if !value.trim().is_empty() {
                    warn!(value, "unparsable token decimals, using 0");
                }
                TokenDecimals(0)
            }
        }
    }
}

impl<T: Into<TokenDecimals>> From<Option<T>> for TokenDecimals {
    fn from(value: Option<T>) -> TokenDecimals {
        value.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_integers() {
        assert_eq!(TokenDecimals::from(12u8).get(), 12);
        assert_eq!(TokenDecimals::from(18u32).get(), 18);
        assert_eq!(TokenDecimals::from(-1i32).get(), 0);
        assert_eq!(TokenDecimals::from(1_000u32).get(), 0);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(TokenDecimals::from("10").get(), 10);
        assert_eq!(TokenDecimals::from(" 6 ").get(), 6);
        assert_eq!(TokenDecimals::from("").get(), 0);
        assert_eq!(TokenDecimals::from("six").get(), 0);
    }

    #[test]
    fn test_missing_is_zero() {
        assert_eq!(TokenDecimals::from(None::<u8>).get(), 0);
        assert_eq!(TokenDecimals::from(Some(9u8)).get(), 9);
    }
}
