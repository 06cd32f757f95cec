use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Classification attached to a record.
///
/// Parsing is permissive: anything other than the exact strings `income` and
/// `expense` is preserved verbatim as [`RecordKind::Other`], so unrecognized
/// input still round-trips through display and export unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Income,
    Expense,
    Other(String),
}

impl RecordKind {
    /// Maps the exact, case-sensitive strings `income` and `expense`;
    /// everything else becomes [`RecordKind::Other`] with the original text.
    pub fn parse(input: &str) -> Self {
        match input {
            "income" => RecordKind::Income,
            "expense" => RecordKind::Expense,
            other => RecordKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RecordKind::Income => "income",
            RecordKind::Expense => "expense",
            RecordKind::Other(label) => label,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for RecordKind {
    fn from(value: &str) -> Self {
        RecordKind::parse(value)
    }
}

impl Serialize for RecordKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(RecordKind::parse(&value))
    }
}

/// A single income or expense event.
///
/// Records are created through [`crate::ledger::Ledger::add`] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub kind: RecordKind,
}
