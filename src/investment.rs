use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::errors::{ProjectionError, Result};
use crate::history::HistoryEntry;
use crate::interest::expected_return;
use crate::projection::{ProjectionEngine, ProjectionResult};
use crate::types::{HistoryKind, InvestmentId, InvestmentStatus};

/// user-entered fields for creating or editing an investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentDraft {
    pub name: String,
    pub initial_amount: Money,
    pub annual_return: Rate,
    pub months: u32,
    pub kind: String,
    pub link: Option<String>,
}

impl InvestmentDraft {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ProjectionError::MissingField { field: "name" });
        }
        if self.kind.trim().is_empty() {
            return Err(ProjectionError::MissingField { field: "kind" });
        }
        if !self.initial_amount.is_positive() {
            return Err(ProjectionError::InvalidAmount {
                amount: self.initial_amount,
            });
        }
        if !self.annual_return.is_positive() {
            return Err(ProjectionError::InvalidRate {
                rate: self.annual_return,
            });
        }
        if self.months == 0 {
            return Err(ProjectionError::InvalidTerm { months: self.months });
        }
        Ok(())
    }

    /// expected final amount shown while the form is being filled in
    pub fn expected_return(&self) -> Money {
        expected_return(self.initial_amount, self.annual_return, self.months)
    }

    /// blank links are stored as absent
    fn normalized_link(&self) -> Option<String> {
        self.link
            .as_ref()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
    }
}

/// a stored investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: InvestmentId,
    pub name: String,
    pub initial_amount: Money,
    pub current_amount: Money,
    pub annual_return: Rate,
    pub months: u32,
    pub kind: String,
    pub link: Option<String>,
    pub expected_return: Money,
    pub status: InvestmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Investment {
    /// validate a draft and open the investment with its full amount invested
    pub fn open(
        draft: InvestmentDraft,
        time_provider: &SafeTimeProvider,
    ) -> Result<(Self, HistoryEntry)> {
        draft.validate()?;

        let now = time_provider.now();
        let investment = Self {
            id: Uuid::new_v4(),
            link: draft.normalized_link(),
            expected_return: draft.expected_return(),
            name: draft.name.trim().to_string(),
            initial_amount: draft.initial_amount,
            current_amount: draft.initial_amount,
            annual_return: draft.annual_return,
            months: draft.months,
            kind: draft.kind.trim().to_string(),
            status: InvestmentStatus::Active,
            created_at: now,
        };

        let entry = HistoryEntry::new(
            investment.id,
            &investment.name,
            HistoryKind::Creation,
            investment.initial_amount,
            now,
        );
        Ok((investment, entry))
    }

    pub fn is_active(&self) -> bool {
        self.status == InvestmentStatus::Active
    }

    /// replace the editable fields; a new initial amount moves the current amount by the same delta
    pub fn apply_update(
        &mut self,
        draft: InvestmentDraft,
        time_provider: &SafeTimeProvider,
    ) -> Result<HistoryEntry> {
        self.ensure_active()?;
        draft.validate()?;

        let delta = draft.initial_amount - self.initial_amount;
        let new_current = self.current_amount + delta;
        if new_current.is_negative() {
            return Err(ProjectionError::InsufficientBalance {
                available: self.current_amount,
                requested: delta.abs(),
            });
        }

        self.link = draft.normalized_link();
        self.expected_return = draft.expected_return();
        self.name = draft.name.trim().to_string();
        self.kind = draft.kind.trim().to_string();
        self.initial_amount = draft.initial_amount;
        self.current_amount = new_current;
        self.annual_return = draft.annual_return;
        self.months = draft.months;
        if self.current_amount.is_zero() {
            self.status = InvestmentStatus::Closed;
        }

        Ok(HistoryEntry::new(
            self.id,
            &self.name,
            HistoryKind::Update,
            delta,
            time_provider.now(),
        ))
    }

    /// take money out; withdrawing everything closes the investment
    pub fn withdraw(
        &mut self,
        amount: Money,
        time_provider: &SafeTimeProvider,
    ) -> Result<HistoryEntry> {
        self.ensure_active()?;
        if !amount.is_positive() {
            return Err(ProjectionError::InvalidWithdrawal { amount });
        }
        if amount > self.current_amount {
            return Err(ProjectionError::InsufficientBalance {
                available: self.current_amount,
                requested: amount,
            });
        }

        let gain = self.gain_percentage();
        self.current_amount -= amount;
        if self.current_amount.is_zero() {
            self.status = InvestmentStatus::Closed;
        }

        Ok(HistoryEntry::new(
            self.id,
            &self.name,
            HistoryKind::Withdrawal,
            amount,
            time_provider.now(),
        )
        .with_gain_percentage(gain))
    }

    /// current amount over initial amount, in percent, rounded to 2 places
    pub fn gain_percentage(&self) -> Decimal {
        if !self.initial_amount.is_positive() {
            return Decimal::ZERO;
        }
        let ratio = (self.current_amount - self.initial_amount).as_decimal()
            / self.initial_amount.as_decimal();
        (ratio * Decimal::ONE_HUNDRED).round_dp(2)
    }

    /// project the money still invested as a fixed-term deposit at this investment's TNA
    pub fn project(
        &self,
        engine: &ProjectionEngine,
        period_days: i64,
        reinvest: bool,
    ) -> ProjectionResult {
        engine.compute(
            self.current_amount.to_f64(),
            self.annual_return.as_percentage_f64(),
            period_days,
            reinvest,
        )
    }

    fn ensure_active(&self) -> Result<()> {
        if !self.is_active() {
            return Err(ProjectionError::InvestmentClosed { status: self.status });
        }
        Ok(())
    }
}
