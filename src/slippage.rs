use crate::{
    amount::Amount,
    sanitize::{clean_amount, Quantity},
};

/// The trade bounds implied by a slippage tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct SlippageBounds {
    /// Lowest acceptable output amount.
    pub minimum_received: String,

    /// Highest acceptable input amount.
    pub maximum_sent: String,
}

/// `amount - amount * percent / 100`, computed exactly.
pub fn reduce_by_percent<'a, 'b>(
    amount: impl Into<Quantity<'a>>,
    percent: impl Into<Quantity<'b>>,
) -> String {
    let amount = clean_amount(amount);
    let delta = percent_of(&amount, &clean_amount(percent));

    (&amount - &delta).normalize().to_string()
}

/// `amount + amount * percent / 100`, computed exactly.
pub fn increase_by_percent<'a, 'b>(
    amount: impl Into<Quantity<'a>>,
    percent: impl Into<Quantity<'b>>,
) -> String {
    let amount = clean_amount(amount);
    let delta = percent_of(&amount, &clean_amount(percent));

    (&amount + &delta).normalize().to_string()
}

/// Returns both bounds for `amount` at the given tolerance.
pub fn slippage_bounds<'a, 'b>(
    amount: impl Into<Quantity<'a>>,
    percent: impl Into<Quantity<'b>>,
) -> SlippageBounds {
    let amount = clean_amount(amount);
    let percent = clean_amount(percent);

    SlippageBounds {
        minimum_received: reduce_by_percent(&amount, &percent),
        maximum_sent: increase_by_percent(&amount, &percent),
    }
}

fn percent_of(amount: &Amount, percent: &Amount) -> Amount {
    (amount * percent).div_pow10(2)
}
