/// A balance together with what its producer knows about its provenance.
///
/// Producers that know whether a value is raw or already scaled should say so
/// with `Raw` or `Formatted`; the other two variants fall back to a heuristic.
#[derive(Debug, Clone, PartialEq)]
pub enum Balance {
    /// Smallest-unit integer amount, possibly locale grouped.
    Raw(String),

    /// Already divided by the asset's decimals.
    Formatted(String),

    /// A native number of unknown provenance.
    Native(f64),

    /// Text of unknown provenance.
    Ambiguous(String),
}

impl Balance {
    pub fn raw(value: &str) -> Balance {
        Balance::Raw(value.to_string())
    }

    pub fn formatted(value: &str) -> Balance {
        Balance::Formatted(value.to_string())
    }

    pub fn ambiguous(value: &str) -> Balance {
        Balance::Ambiguous(value.to_string())
    }
}

/// What the classifier decided about a balance of unknown provenance.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum BalanceKind {
    Raw,
    Formatted,
}
