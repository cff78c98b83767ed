use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ProjectionConfig;
use crate::errors::Result;
use crate::interest::{accrue, compound_total, simple_total, PeriodRate};
use crate::types::{InterestMode, Projection, SeriesPoint};

/// everything the calculator screen shows for one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// interest earned over exactly one term
    pub period_interest: f64,
    /// one entry per configured horizon, simple or compound per the reinvest flag
    pub projections: Vec<Projection>,
    /// monthly chart points carrying both strategies
    pub series: Vec<SeriesPoint>,
}

impl ProjectionResult {
    /// the "insufficient input" answer: zeros and no rows
    pub fn empty() -> Self {
        Self {
            period_interest: 0.0,
            projections: Vec::new(),
            series: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.projections.is_empty() && self.series.is_empty()
    }

    /// projection at the horizon with the given label
    pub fn projection(&self, label: &str) -> Option<&Projection> {
        self.projections.iter().find(|p| p.label == label)
    }

    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// pure fixed-term deposit projection over a configurable horizon schedule
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// project `principal` at `annual_rate_percent` TNA over terms of `period_days`
    ///
    /// Any input that is not finite and strictly positive yields
    /// [`ProjectionResult::empty`]; this never fails.
    pub fn compute(
        &self,
        principal: f64,
        annual_rate_percent: f64,
        period_days: i64,
        reinvest: bool,
    ) -> ProjectionResult {
        if !is_positive(principal) || !is_positive(annual_rate_percent) || period_days <= 0 {
            debug!(
                principal,
                annual_rate_percent,
                period_days,
                "insufficient input, returning empty projection"
            );
            return ProjectionResult::empty();
        }

        let rate = PeriodRate::new(annual_rate_percent, period_days, self.config.days_per_year);
        let period_interest = rate.period_interest(principal);
        let mode = InterestMode::from_reinvest(reinvest);

        let projections = self
            .config
            .horizons
            .iter()
            .map(|horizon| {
                let accrual = accrue(mode, principal, &rate, rate.periods_within(horizon.days));
                Projection {
                    label: horizon.label.clone(),
                    total_amount: accrual.total,
                    gain: accrual.gain,
                }
            })
            .collect();

        let series = (1..=self.config.series_months)
            .map(|month| {
                let days = month.saturating_mul(self.config.days_per_month);
                let periods = rate.periods_within(days);
                SeriesPoint {
                    month_index: month,
                    label: self.config.series_label(month),
                    simple_total: simple_total(principal, &rate, periods),
                    compound_total: compound_total(principal, &rate, periods),
                }
            })
            .collect();

        debug!(
            principal,
            annual_rate_percent,
            period_days,
            ?mode,
            period_interest,
            "computed projection"
        );

        ProjectionResult {
            period_interest,
            projections,
            series,
        }
    }
}

/// project with the default schedule (1, 3, 6 and 12 months; 12-point series)
pub fn compute(
    principal: f64,
    annual_rate_percent: f64,
    period_days: i64,
    reinvest: bool,
) -> ProjectionResult {
    ProjectionEngine::default().compute(principal, annual_rate_percent, period_days, reinvest)
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
