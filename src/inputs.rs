use serde::{Deserialize, Serialize};

use crate::config::ProjectionConfig;
use crate::projection::{ProjectionEngine, ProjectionResult};

/// raw calculator form state, exactly as typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorForm {
    pub amount: String,
    pub annual_rate: String,
    pub period_days: String,
    pub reinvest: bool,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self {
            amount: "100000".to_string(),
            annual_rate: "110".to_string(),
            period_days: "30".to_string(),
            reinvest: false,
        }
    }
}

/// engine inputs after lenient coercion of the form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub period_days: i64,
    pub reinvest: bool,
}

impl CalculatorInputs {
    /// coerce a form: unparseable amounts and rates become 0, an unparseable
    /// or zero term falls back to `config.fallback_period_days`
    pub fn from_form(form: &CalculatorForm, config: &ProjectionConfig) -> Self {
        let principal = parse_leading_float(&form.amount).filter(|v| *v != 0.0).unwrap_or(0.0);
        let annual_rate_percent = parse_leading_float(&form.annual_rate)
            .filter(|v| *v != 0.0)
            .unwrap_or(0.0);
        let period_days = parse_leading_int(&form.period_days)
            .filter(|v| *v != 0)
            .unwrap_or(config.fallback_period_days);

        Self {
            principal,
            annual_rate_percent,
            period_days,
            reinvest: form.reinvest,
        }
    }

    pub fn project(&self, engine: &ProjectionEngine) -> ProjectionResult {
        engine.compute(
            self.principal,
            self.annual_rate_percent,
            self.period_days,
            self.reinvest,
        )
    }
}

/// parse the longest numeric prefix (`[ws][sign]digits[.digits][e[sign]digits]` or `Infinity`)
///
/// `None` when no digits lead the string; NaN never escapes.
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let infinite = f64::INFINITY;
        return Some(if s.starts_with('-') { -infinite } else { infinite });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// parse the longest base-10 integer prefix (`[ws][sign]digits`)
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    // saturate absurdly long inputs instead of rejecting them
    s[..end].parse::<i64>().ok().or_else(|| {
        if s.starts_with('-') {
            Some(i64::MIN)
        } else {
            Some(i64::MAX)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(amount: &str, rate: &str, days: &str) -> CalculatorForm {
        CalculatorForm {
            amount: amount.to_string(),
            annual_rate: rate.to_string(),
            period_days: days.to_string(),
            reinvest: false,
        }
    }

    #[test]
    fn test_parse_leading_float() {
        assert_eq!(parse_leading_float("100000"), Some(100_000.0));
        assert_eq!(parse_leading_float("  12.5abc"), Some(12.5));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("5."), Some(5.0));
        assert_eq!(parse_leading_float("-3e2x"), Some(-300.0));
        assert_eq!(parse_leading_float("1e"), Some(1.0));
        assert_eq!(parse_leading_float("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float("-"), None);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("30"), Some(30));
        assert_eq!(parse_leading_int(" 45.9"), Some(45));
        assert_eq!(parse_leading_int("-7d"), Some(-7));
        assert_eq!(parse_leading_int("d7"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("99999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_default_form() {
        let config = ProjectionConfig::default();
        let inputs = CalculatorInputs::from_form(&CalculatorForm::default(), &config);
        assert_eq!(inputs.principal, 100_000.0);
        assert_eq!(inputs.annual_rate_percent, 110.0);
        assert_eq!(inputs.period_days, 30);
        assert!(!inputs.reinvest);
    }

    #[test]
    fn test_blank_fields_coerce() {
        let config = ProjectionConfig::default();
        let inputs = CalculatorInputs::from_form(&form("", "abc", ""), &config);
        assert_eq!(inputs.principal, 0.0);
        assert_eq!(inputs.annual_rate_percent, 0.0);
        assert_eq!(inputs.period_days, 30);

        // a zero term is treated like a blank one
        let zero_term = CalculatorInputs::from_form(&form("1000", "50", "0"), &config);
        assert_eq!(zero_term.period_days, 30);
    }

    #[test]
    fn test_blank_amount_projects_empty() {
        let engine = ProjectionEngine::default();
        let config = engine.config().clone();
        let result = CalculatorInputs::from_form(&form("", "110", "30"), &config).project(&engine);
        assert!(result.is_empty());
        assert_eq!(result.period_interest, 0.0);

        let negative_term = CalculatorInputs::from_form(&form("1000", "110", "-30"), &config);
        assert!(negative_term.project(&engine).is_empty());
    }

    #[test]
    fn test_form_projects() {
        let engine = ProjectionEngine::default();
        let mut f = form("100000", "110", "30");
        f.reinvest = true;
        let result = CalculatorInputs::from_form(&f, engine.config()).project(&engine);
        assert_eq!(result.projections.len(), 4);
        assert_eq!(result.series.len(), 12);
        assert!((result.period_interest - 9041.10).abs() < 0.01);
    }
}
