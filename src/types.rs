use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// unique identifier for an investment record
pub type InvestmentId = Uuid;

/// a forward point in time at which cumulative totals are reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon {
    pub label: String,
    pub days: u32,
}

impl Horizon {
    pub fn new(label: impl Into<String>, days: u32) -> Self {
        Self {
            label: label.into(),
            days,
        }
    }
}

/// how earned interest is treated between periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterestMode {
    /// interest is paid out, principal stays fixed
    Simple,
    /// interest is reinvested at the end of every period
    Compound,
}

impl InterestMode {
    pub fn from_reinvest(reinvest: bool) -> Self {
        if reinvest {
            InterestMode::Compound
        } else {
            InterestMode::Simple
        }
    }
}

/// projected outcome at one horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub label: String,
    pub total_amount: f64,
    pub gain: f64,
}

/// one monthly point of the chart series; both strategies always present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub month_index: u32,
    pub label: String,
    pub simple_total: f64,
    pub compound_total: f64,
}

/// investment record status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentStatus {
    /// funds still invested
    Active,
    /// fully withdrawn
    Closed,
}

/// kind of entry recorded in the investment history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Creation,
    Update,
    Withdrawal,
    Deletion,
}
