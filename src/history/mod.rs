use crate::core::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One completed computation. Entries are never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub operation: String,
    pub a: Decimal,
    pub b: Decimal,
    pub result: Decimal,
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(operation: impl Into<String>, a: Decimal, b: Decimal, result: Decimal) -> Self {
        Self {
            operation: operation.into(),
            a,
            b,
            result,
            recorded_at: Utc::now(),
        }
    }
}

/// Ordered, append-only log of computations
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `limit` of the most recent entries
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.min(1024)),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn append(
        &mut self,
        operation: impl Into<String>,
        a: Decimal,
        b: Decimal,
        result: Decimal,
    ) {
        self.entries.push_back(HistoryEntry::new(operation, a, b, result));

        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                self.entries.pop_front();
            }
        }
    }

    /// Most recent entry, `None` when nothing has been recorded
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// All entries in insertion order
    pub fn all(&self) -> Vec<&HistoryEntry> {
        self.entries.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries as a pretty-printed JSON array
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: i64) -> Decimal {
        Decimal::from(v)
    }

    #[test]
    fn test_empty_history() {
        let history = History::new();
        assert!(history.last().is_none());
        assert!(history.all().is_empty());
        assert!(history.is_empty());
    }

    #[test]
    fn test_append_then_last() {
        let mut history = History::new();
        history.append("add", d(2), d(3), d(5));
        history.append("multiply", d(4), d(3), d(12));

        let last = history.last().unwrap();
        assert_eq!(last.operation, "multiply");
        assert_eq!(last.result, d(12));
    }

    #[test]
    fn test_all_preserves_order() {
        let mut history = History::new();
        history.append("add", d(1), d(1), d(2));
        history.append("subtract", d(5), d(1), d(4));
        history.append("divide", d(8), d(2), d(4));

        let ops: Vec<&str> = history.all().iter().map(|e| e.operation.as_str()).collect();
        assert_eq!(ops, vec!["add", "subtract", "divide"]);
    }

    #[test]
    fn test_clear_resets() {
        let mut history = History::new();
        history.append("add", d(1), d(1), d(2));
        history.clear();

        assert!(history.last().is_none());
        assert!(history.all().is_empty());

        history.append("add", d(2), d(2), d(4));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = History::with_limit(2);
        history.append("add", d(1), d(1), d(2));
        history.append("add", d(2), d(2), d(4));
        history.append("add", d(3), d(3), d(6));

        assert_eq!(history.len(), 2);
        assert_eq!(history.all()[0].a, d(2));
        assert_eq!(history.last().unwrap().a, d(3));
    }

    #[test]
    fn test_limit_is_exact() {
        let mut history = History::with_limit(3);
        for i in 0..5 {
            history.append("add", d(i), d(i), d(2 * i));
        }

        let kept: Vec<Decimal> = history.iter().map(|e| e.a).collect();
        assert_eq!(kept, vec![d(2), d(3), d(4)]);

        // A zero limit keeps nothing rather than silently keeping one entry
        let mut history = History::with_limit(0);
        history.append("add", d(1), d(1), d(2));
        assert!(history.is_empty());
        assert!(history.last().is_none());
    }

    #[test]
    fn test_export_json() {
        let mut history = History::new();
        history.append("divide", d(1), d(8), "0.125".parse().unwrap());

        let json = history.export_json().unwrap();
        let parsed: Vec<HistoryEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].operation, "divide");
        assert!(json.contains("\"0.125\""));
    }
}
