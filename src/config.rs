use serde::{Deserialize, Serialize};

use crate::display::{Currency, TimeFormat};
use crate::errors::{ProjectionError, Result};
use crate::types::Horizon;

/// longest chart series accepted, one century of months
pub const MAX_SERIES_MONTHS: u32 = 1_200;

/// horizon schedule and day-count conventions for the projection engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub horizons: Vec<Horizon>,
    pub series_months: u32,
    pub days_per_month: u32,
    pub days_per_year: u32,
    pub series_label_prefix: String,
    /// term used when the period field cannot be parsed
    pub fallback_period_days: i64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizons: vec![
                Horizon::new("En 1 mes", 30),
                Horizon::new("En 3 meses", 90),
                Horizon::new("En 6 meses", 180),
                Horizon::new("En 1 año", 365),
            ],
            series_months: 12,
            days_per_month: 30,
            days_per_year: 365,
            series_label_prefix: "Mes".to_string(),
            fallback_period_days: 30,
        }
    }
}

impl ProjectionConfig {
    /// parse a config from json and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ProjectionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.horizons.is_empty() {
            return Err(invalid("at least one horizon is required"));
        }
        if let Some(h) = self.horizons.iter().find(|h| h.days == 0) {
            return Err(invalid(&format!("horizon '{}' has zero days", h.label)));
        }
        if self.series_months == 0 || self.series_months > MAX_SERIES_MONTHS {
            return Err(invalid(&format!(
                "series_months must be between 1 and {}",
                MAX_SERIES_MONTHS
            )));
        }
        if self.days_per_month == 0 {
            return Err(invalid("days_per_month must be positive"));
        }
        if self.series_months.checked_mul(self.days_per_month).is_none() {
            return Err(invalid("series_months * days_per_month overflows the day count"));
        }
        if self.days_per_year == 0 {
            return Err(invalid("days_per_year must be positive"));
        }
        if self.fallback_period_days <= 0 {
            return Err(invalid("fallback_period_days must be positive"));
        }
        Ok(())
    }

    /// label of the n-th month of the series
    pub fn series_label(&self, month: u32) -> String {
        format!("{} {}", self.series_label_prefix, month)
    }
}

/// user display preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    pub currency: Currency,
    pub time_format: TimeFormat,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency: Currency::Ars,
            time_format: TimeFormat::H24,
        }
    }
}

impl DisplaySettings {
    /// load persisted settings, falling back to defaults on malformed input
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json.map(serde_json::from_str::<DisplaySettings>) {
            Some(Ok(settings)) => settings.normalized(),
            Some(Err(err)) => {
                tracing::warn!(error = %err, "discarding malformed display settings");
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// usd is no longer offered; stored usd preferences read back as ars
    pub fn normalized(self) -> Self {
        match self.currency {
            Currency::Usd => Self {
                currency: Currency::Ars,
                ..self
            },
            _ => self,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn invalid(message: &str) -> ProjectionError {
    ProjectionError::InvalidConfiguration {
        message: message.to_string(),
    }
}
