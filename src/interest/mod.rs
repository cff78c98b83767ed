pub mod compound;
pub mod simple;

use serde::{Deserialize, Serialize};

use crate::types::InterestMode;

pub use compound::{compound_gain, compound_total};
pub use simple::{expected_return, simple_gain, simple_total};

/// nominal annual rate broken down to one deposit term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodRate {
    pub daily_rate: f64,
    pub period_rate: f64,
    pub period_days: i64,
}

impl PeriodRate {
    /// derive the daily and per-term rate from a percentage TNA
    pub fn new(annual_rate_percent: f64, period_days: i64, days_per_year: u32) -> Self {
        let daily_rate = annual_rate_percent / 100.0 / days_per_year as f64;
        let period_rate = daily_rate * period_days as f64;
        Self {
            daily_rate,
            period_rate,
            period_days,
        }
    }

    /// interest earned over exactly one term
    pub fn period_interest(&self, principal: f64) -> f64 {
        principal * self.period_rate
    }

    /// whole terms that fit in a horizon; partial terms never accrue
    pub fn periods_within(&self, horizon_days: u32) -> u32 {
        if self.period_days <= 0 {
            return 0;
        }
        (i64::from(horizon_days) / self.period_days) as u32
    }
}

/// total and gain at the end of a number of whole terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Accrual {
    pub periods: u32,
    pub total: f64,
    pub gain: f64,
}

/// accrue `periods` terms under the given mode
///
/// a single term has nothing to reinvest yet, so both modes share the simple pair.
pub fn accrue(mode: InterestMode, principal: f64, rate: &PeriodRate, periods: u32) -> Accrual {
    if periods == 0 {
        return Accrual {
            periods,
            total: principal,
            gain: 0.0,
        };
    }

    match mode {
        InterestMode::Compound if periods > 1 => {
            let total = compound_total(principal, rate, periods);
            Accrual {
                periods,
                total,
                gain: total - principal,
            }
        }
        _ => {
            let gain = simple_gain(principal, rate, periods);
            Accrual {
                periods,
                total: principal + gain,
                gain,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_rate_breakdown() {
        let rate = PeriodRate::new(110.0, 30, 365);
        assert!((rate.daily_rate - 1.10 / 365.0).abs() < 1e-15);
        assert!((rate.period_rate - 1.10 / 365.0 * 30.0).abs() < 1e-15);

        let interest = rate.period_interest(100_000.0);
        assert!((interest - 9041.0958904).abs() < 1e-6);
    }

    #[test]
    fn test_periods_are_floored() {
        let rate = PeriodRate::new(110.0, 40, 365);
        assert_eq!(rate.periods_within(30), 0);
        assert_eq!(rate.periods_within(90), 2);
        assert_eq!(rate.periods_within(365), 9);

        let monthly = PeriodRate::new(110.0, 30, 365);
        assert_eq!(monthly.periods_within(365), 12);
    }

    #[test]
    fn test_zero_periods_accrue_nothing() {
        let rate = PeriodRate::new(110.0, 40, 365);
        for mode in [InterestMode::Simple, InterestMode::Compound] {
            let accrual = accrue(mode, 5_000.0, &rate, 0);
            assert_eq!(accrual.total, 5_000.0);
            assert_eq!(accrual.gain, 0.0);
        }
    }

    #[test]
    fn test_compound_beats_simple_after_one_period() {
        let rate = PeriodRate::new(75.0, 30, 365);
        let simple = accrue(InterestMode::Simple, 1_000.0, &rate, 6);
        let compound = accrue(InterestMode::Compound, 1_000.0, &rate, 6);
        assert!(compound.total > simple.total);
        assert!(compound.gain > simple.gain);

        let simple_one = accrue(InterestMode::Simple, 1_000.0, &rate, 1);
        let compound_one = accrue(InterestMode::Compound, 1_000.0, &rate, 1);
        assert_eq!(simple_one, compound_one);
    }
}
