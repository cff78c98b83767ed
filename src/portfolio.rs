use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::decimal::Money;
use crate::errors::{ProjectionError, Result};
use crate::history::{HistoryEntry, HistoryLog};
use crate::investment::{Investment, InvestmentDraft};
use crate::types::{HistoryKind, InvestmentId};

/// dashboard figures over the active investments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_invested: Money,
    pub active_count: usize,
    pub total_expected_return: Money,
    /// current amount per investment type, in first-seen order
    pub allocation: Vec<(String, Money)>,
}

/// in-memory investment collection with its history
#[derive(Debug, Default)]
pub struct Portfolio {
    investments: Vec<Investment>,
    history: HistoryLog,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(
        &mut self,
        draft: InvestmentDraft,
        time_provider: &SafeTimeProvider,
    ) -> Result<InvestmentId> {
        let (investment, entry) = Investment::open(draft, time_provider)?;
        let id = investment.id;
        info!(
            %id,
            name = %investment.name,
            amount = %investment.initial_amount,
            "investment created"
        );

        self.investments.push(investment);
        self.history.record(entry);
        Ok(id)
    }

    pub fn get(&self, id: InvestmentId) -> Result<&Investment> {
        self.investments
            .iter()
            .find(|i| i.id == id)
            .ok_or(ProjectionError::InvestmentNotFound { id })
    }

    /// active investments, oldest first
    pub fn active(&self) -> impl Iterator<Item = &Investment> {
        self.investments.iter().filter(|i| i.is_active())
    }

    pub fn update(
        &mut self,
        id: InvestmentId,
        draft: InvestmentDraft,
        time_provider: &SafeTimeProvider,
    ) -> Result<()> {
        let entry = self.get_mut(id)?.apply_update(draft, time_provider)?;
        info!(%id, delta = %entry.affected_amount, "investment updated");
        self.history.record(entry);
        Ok(())
    }

    pub fn withdraw(
        &mut self,
        id: InvestmentId,
        amount: Money,
        time_provider: &SafeTimeProvider,
    ) -> Result<Money> {
        let investment = self.get_mut(id)?;
        let entry = match investment.withdraw(amount, time_provider) {
            Ok(entry) => entry,
            Err(err) => {
                warn!(%id, %amount, error = %err, "withdrawal rejected");
                return Err(err);
            }
        };
        let remaining = investment.current_amount;
        info!(%id, %amount, %remaining, "withdrawal processed");

        self.history.record(entry);
        Ok(remaining)
    }

    /// remove an investment, paying out whatever is still invested
    pub fn delete(
        &mut self,
        id: InvestmentId,
        time_provider: &SafeTimeProvider,
    ) -> Result<Investment> {
        let index = self
            .investments
            .iter()
            .position(|i| i.id == id)
            .ok_or(ProjectionError::InvestmentNotFound { id })?;
        let investment = self.investments.remove(index);
        info!(%id, paid_out = %investment.current_amount, "investment deleted");

        self.history.record(HistoryEntry::new(
            id,
            &investment.name,
            HistoryKind::Deletion,
            investment.current_amount,
            time_provider.now(),
        ));
        Ok(investment)
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn summary(&self) -> PortfolioSummary {
        let mut allocation: Vec<(String, Money)> = Vec::new();
        for investment in self.active() {
            match allocation.iter_mut().find(|(kind, _)| *kind == investment.kind) {
                Some((_, total)) => *total += investment.current_amount,
                None => allocation.push((investment.kind.clone(), investment.current_amount)),
            }
        }

        PortfolioSummary {
            total_invested: self.active().map(|i| i.current_amount).sum(),
            active_count: self.active().count(),
            total_expected_return: self.active().map(|i| i.expected_return).sum(),
            allocation,
        }
    }

    /// active investments as the json array the listing page consumes
    pub fn json(&self) -> Result<String> {
        let active: Vec<&Investment> = self.active().collect();
        Ok(serde_json::to_string_pretty(&active)?)
    }

    fn get_mut(&mut self, id: InvestmentId) -> Result<&mut Investment> {
        self.investments
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(ProjectionError::InvestmentNotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::allocation_slices;
    use crate::decimal::Rate;
    use crate::types::InvestmentStatus;
    use chrono::{Duration, TimeZone, Utc};
    use hourglass_rs::TimeSource;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn test_time() -> SafeTimeProvider {
        SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        ))
    }

    fn draft(name: &str, kind: &str, amount: i64) -> InvestmentDraft {
        InvestmentDraft {
            name: name.to_string(),
            initial_amount: Money::from_major(amount),
            annual_return: Rate::from_percentage(dec!(12)),
            months: 12,
            kind: kind.to_string(),
            link: None,
        }
    }

    #[test]
    fn test_dashboard_summary() {
        let time = test_time();
        let mut portfolio = Portfolio::new();
        portfolio.create(draft("PF 1", "Plazo Fijo", 10_000), &time).unwrap();
        portfolio.create(draft("BTC", "Cripto", 5_000), &time).unwrap();
        portfolio.create(draft("PF 2", "Plazo Fijo", 2_500), &time).unwrap();

        let summary = portfolio.summary();
        assert_eq!(summary.active_count, 3);
        assert_eq!(summary.total_invested, Money::from_major(17_500));
        // each grows 12% over 12 months
        assert_eq!(summary.total_expected_return, Money::from_major(19_600));
        assert_eq!(
            summary.allocation,
            vec![
                ("Plazo Fijo".to_string(), Money::from_major(12_500)),
                ("Cripto".to_string(), Money::from_major(5_000)),
            ]
        );

        let slices = allocation_slices(&summary.allocation);
        assert_eq!(slices[1].name, "Cripto");
    }

    #[test]
    fn test_allocation_keys_are_investment_kinds() {
        let time = test_time();
        let mut portfolio = Portfolio::new();
        assert!(matches!(
            portfolio.create(draft("Sin tipo", "   ", 1_000), &time),
            Err(ProjectionError::MissingField { field: "kind" })
        ));
        portfolio.create(draft("FCI", "Fondos", 3_000), &time).unwrap();
        let id = portfolio.create(draft("Bono", "Bonos", 2_000), &time).unwrap();
        portfolio.create(draft("FCI 2", "Fondos", 500), &time).unwrap();
        portfolio.withdraw(id, Money::from_major(2_000), &time).unwrap();

        let kinds: Vec<String> = portfolio
            .summary()
            .allocation
            .into_iter()
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(kinds, vec!["Fondos".to_string()]);
    }

    #[test]
    fn test_lifecycle_records_history() {
        let time = test_time();
        let controller = time.test_control().unwrap();
        let mut portfolio = Portfolio::new();

        let id = portfolio.create(draft("PF", "Plazo Fijo", 10_000), &time).unwrap();
        controller.advance(Duration::days(30));
        let remaining = portfolio.withdraw(id, Money::from_major(10_000), &time).unwrap();
        assert_eq!(remaining, Money::ZERO);
        assert_eq!(portfolio.get(id).unwrap().status, InvestmentStatus::Closed);
        assert_eq!(portfolio.summary().active_count, 0);

        controller.advance(Duration::days(1));
        let removed = portfolio.delete(id, &time).unwrap();
        assert_eq!(removed.name, "PF");
        assert!(matches!(portfolio.get(id), Err(ProjectionError::InvestmentNotFound { .. })));

        let kinds: Vec<HistoryKind> =
            portfolio.history().entries().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![HistoryKind::Creation, HistoryKind::Withdrawal, HistoryKind::Deletion]
        );
        assert_eq!(portfolio.history().newest_first()[0].kind, HistoryKind::Deletion);
    }

    #[test]
    fn test_rejected_operations_leave_no_history() {
        let time = test_time();
        let mut portfolio = Portfolio::new();
        let id = portfolio.create(draft("PF", "Plazo Fijo", 1_000), &time).unwrap();

        assert!(portfolio.withdraw(id, Money::from_major(5_000), &time).is_err());
        assert!(portfolio.update(id, draft("", "Plazo Fijo", 1_000), &time).is_err());
        assert!(portfolio.withdraw(Uuid::new_v4(), Money::ONE, &time).is_err());
        assert!(portfolio.create(draft("X", "", 1_000), &time).is_err());

        assert_eq!(portfolio.history().len(), 1);
        assert_eq!(portfolio.get(id).unwrap().current_amount, Money::from_major(1_000));
    }

    #[test]
    fn test_update_and_json() {
        let time = test_time();
        let mut portfolio = Portfolio::new();
        let id = portfolio.create(draft("PF", "Plazo Fijo", 1_000), &time).unwrap();
        portfolio.update(id, draft("PF renovado", "Bonos", 1_500), &time).unwrap();

        let investment = portfolio.get(id).unwrap();
        assert_eq!(investment.name, "PF renovado");
        assert_eq!(investment.current_amount, Money::from_major(1_500));

        let json = portfolio.json().unwrap();
        assert!(json.contains("\"name\": \"PF renovado\""));
        assert!(json.contains("\"kind\": \"Bonos\""));
    }
}
