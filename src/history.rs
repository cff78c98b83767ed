use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::types::{HistoryKind, InvestmentId};

/// one recorded lifecycle event of an investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub investment_id: InvestmentId,
    pub investment_name: String,
    pub kind: HistoryKind,
    /// money moved by the event; withdrawals and deletions carry the amount paid out
    pub affected_amount: Money,
    pub timestamp: DateTime<Utc>,
    /// gain over the initial amount, in percent, when meaningful
    pub gain_percentage: Option<rust_decimal::Decimal>,
}

impl HistoryEntry {
    pub fn new(
        investment_id: InvestmentId,
        investment_name: &str,
        kind: HistoryKind,
        affected_amount: Money,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            investment_id,
            investment_name: investment_name.to_string(),
            kind,
            affected_amount,
            timestamp,
            gain_percentage: None,
        }
    }

    pub fn with_gain_percentage(mut self, gain: rust_decimal::Decimal) -> Self {
        self.gain_percentage = Some(gain);
        self
    }
}

/// append-only log collected during portfolio operations
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// entries of one investment, oldest first
    pub fn for_investment(&self, id: InvestmentId) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().filter(move |e| e.investment_id == id)
    }

    /// newest first, the order the history page lists them
    pub fn newest_first(&self) -> Vec<&HistoryEntry> {
        let mut entries: Vec<&HistoryEntry> = self.entries.iter().collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }

    pub fn take_entries(&mut self) -> Vec<HistoryEntry> {
        std::mem::take(&mut self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    #[test]
    fn test_log_ordering_and_filtering() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let mut log = HistoryLog::new();
        let entry = |id, name: &str, kind, amount, at| {
            HistoryEntry::new(id, name, kind, Money::from_major(amount), at)
        };
        log.record(entry(a, "Plazo fijo", HistoryKind::Creation, 1_000, start));
        log.record(entry(b, "Bonos", HistoryKind::Creation, 500, start + Duration::hours(1)));
        log.record(
            entry(a, "Plazo fijo", HistoryKind::Withdrawal, 200, start + Duration::days(2))
                .with_gain_percentage(dec!(4.5)),
        );

        assert_eq!(log.len(), 3);
        assert_eq!(log.for_investment(a).count(), 2);

        let newest = log.newest_first();
        assert_eq!(newest[0].kind, HistoryKind::Withdrawal);
        assert_eq!(newest[0].gain_percentage, Some(dec!(4.5)));
        assert_eq!(newest[2].investment_name, "Plazo fijo");

        let taken = log.take_entries();
        assert_eq!(taken.len(), 3);
        assert!(log.is_empty());
    }

    #[test]
    fn test_entry_json_shape() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let amount = Money::from_major(10);
        let entry = HistoryEntry::new(Uuid::nil(), "Cripto", HistoryKind::Deletion, amount, ts);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["investmentName"], "Cripto");
        assert_eq!(json["kind"], "deletion");
        assert_eq!(json["affectedAmount"], "10");
        assert!(json["gainPercentage"].is_null());
    }
}
