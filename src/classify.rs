use {
    crate::{
        model::{
            balance::{Balance, BalanceKind},
            decimals::TokenDecimals,
        },
        sanitize::{clean, clean_amount, Quantity},
        units::from_base_units,
    },
    tracing::debug,
};

/// Guesses whether a value of unknown provenance is a raw base-unit integer
/// or an already scaled amount.
///
/// A decimal point after sanitizing means formatted, anything else means raw.
/// This is a heuristic: a formatted whole number ("24795") is reported as raw.
/// Producers that know the provenance should build `Balance::Raw` or
/// `Balance::Formatted` instead of relying on this.
pub fn classify<'a>(value: impl Into<Quantity<'a>>) -> BalanceKind {
    if clean(value).contains('.') {
        BalanceKind::Formatted
    } else {
        BalanceKind::Raw
    }
}

/// Resolves a balance to a decimal string in the asset's human unit, applying
/// the base-unit division at most once.
///
/// Formatted values are never divided again; they are only truncated to
/// `decimals` fractional digits.
pub fn resolve_balance(balance: &Balance, decimals: impl Into<TokenDecimals>) -> String {
    let decimals = decimals.into();

    match balance {
        Balance::Raw(raw) => from_base_units(raw, decimals),
        Balance::Formatted(formatted) => truncate_formatted(formatted, decimals),
        Balance::Native(value) => resolve_by_kind(*value, decimals),
        Balance::Ambiguous(value) => resolve_by_kind(value, decimals),
    }
}

fn resolve_by_kind<'a>(value: impl Into<Quantity<'a>>, decimals: TokenDecimals) -> String {
    let value = clean(value);
    let kind = classify(value.as_str());
    debug!(%value, ?kind, decimals = decimals.get(), "classified balance of unknown provenance");

    match kind {
        BalanceKind::Raw => from_base_units(value.as_str(), decimals),
        BalanceKind::Formatted => truncate_formatted(&value, decimals),
    }
}

fn truncate_formatted<'a>(value: impl Into<Quantity<'a>>, decimals: TokenDecimals) -> String {
    clean_amount(value)
        .trunc_dp(decimals.get())
        .normalize()
        .to_string()
}
