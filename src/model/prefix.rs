use crate::amount::Amount;

/// An SI prefix written directly in front of a unit code ("mWND", "µKSM").
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum UnitPrefix {
    None,
    Milli,
    Micro,
}

impl UnitPrefix {
    /// Returns the prefix for a symbol. Both the micro sign (U+00B5) and the
    /// Greek small mu (U+03BC) mean micro.
    pub fn from_symbol(symbol: char) -> Option<UnitPrefix> {
        match symbol {
            'm' => Some(UnitPrefix::Milli),
            '\u{b5}' | '\u{3bc}' => Some(UnitPrefix::Micro),
            _ => None,
        }
    }

    /// The power of ten the prefixed value is divided by.
    pub fn exponent(self) -> u32 {
        match self {
            UnitPrefix::None => 0,
            UnitPrefix::Milli => 3,
            UnitPrefix::Micro => 6,
        }
    }
}

impl Default for UnitPrefix {
    fn default() -> Self {
        UnitPrefix::None
    }
}

/// A quantity string split into its parts.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixedQuantity {
    /// The value in the base unit, with the prefix already applied.
    pub value: Amount,
    pub prefix: UnitPrefix,
    pub unit: String,
}
