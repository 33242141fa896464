//! Token amount conversion and display formatting.
//!
//! Converts between raw on-chain integer amounts and human-readable decimal
//! strings, applies slippage, abbreviates large magnitudes and parses
//! unit-prefixed quantities. Every function here is pure; none of the
//! conversion or formatting functions fail on malformed input.

pub mod amount;
pub mod classify;
pub mod compact;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod parse;
pub mod sanitize;
pub mod slippage;
pub mod units;

pub use {
    amount::Amount,
    classify::{classify, resolve_balance},
    compact::format_compact,
    config::{init, Config},
    error::{Error, Result},
    model::{
        balance::{Balance, BalanceKind},
        decimals::TokenDecimals,
        prefix::{PrefixedQuantity, UnitPrefix},
    },
    parse::{parse_prefixed, parse_prefixed_quantity},
    sanitize::{clean, Quantity},
    slippage::{increase_by_percent, reduce_by_percent, slippage_bounds, SlippageBounds},
    units::{from_base_units, to_base_units},
};
