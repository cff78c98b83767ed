pub mod chart;
pub mod config;
pub mod decimal;
pub mod display;
pub mod errors;
pub mod history;
pub mod inputs;
pub mod interest;
pub mod investment;
pub mod portfolio;
pub mod projection;
pub mod types;

// re-export key types
pub use config::{DisplaySettings, ProjectionConfig};
pub use decimal::{Money, Rate};
pub use errors::{ProjectionError, Result};
pub use history::{HistoryEntry, HistoryLog};
pub use inputs::{CalculatorForm, CalculatorInputs};
pub use interest::{Accrual, PeriodRate};
pub use investment::{Investment, InvestmentDraft};
pub use portfolio::{Portfolio, PortfolioSummary};
pub use projection::{compute, ProjectionEngine, ProjectionResult};
pub use types::{
    HistoryKind, Horizon, InterestMode, InvestmentId, InvestmentStatus, Projection, SeriesPoint,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
