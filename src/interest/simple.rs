use rust_decimal::{Decimal, RoundingStrategy};

use crate::decimal::{Money, Rate};
use crate::interest::PeriodRate;

/// interest paid out each term, never reinvested
pub fn simple_gain(principal: f64, rate: &PeriodRate, periods: u32) -> f64 {
    rate.period_interest(principal) * f64::from(periods)
}

pub fn simple_total(principal: f64, rate: &PeriodRate, periods: u32) -> f64 {
    principal + simple_gain(principal, rate, periods)
}

/// expected final amount of a stored investment: monthly simple accrual, rounded to cents
///
/// returns zero unless amount, rate and months are all positive.
pub fn expected_return(initial: Money, annual_rate: Rate, months: u32) -> Money {
    if !initial.is_positive() || !annual_rate.is_positive() || months == 0 {
        return Money::ZERO;
    }

    let growth = Decimal::ONE + annual_rate.monthly_rate().as_decimal() * Decimal::from(months);
    let total = initial.as_decimal() * growth;
    Money::from_decimal(total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}
