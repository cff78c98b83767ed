use crate::interest::PeriodRate;

/// total after `periods` terms with every term's interest reinvested
///
/// zero and one term are resolved without exponentiation so that a single
/// term reproduces the simple total exactly.
pub fn compound_total(principal: f64, rate: &PeriodRate, periods: u32) -> f64 {
    match periods {
        0 => principal,
        1 => principal + rate.period_interest(principal),
        n => principal * (1.0 + rate.period_rate).powf(f64::from(n)),
    }
}

pub fn compound_gain(principal: f64, rate: &PeriodRate, periods: u32) -> f64 {
    compound_total(principal, rate, periods) - principal
}
