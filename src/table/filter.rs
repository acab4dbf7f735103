//! Column and global filtering

use super::row::{folded_text, value_text, values_equal, Row};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keep rows whose `key` field matches `value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterRule {
    pub key: String,
    #[serde(default)]
    pub value: Value,
}

impl FilterRule {
    /// Create a rule matching `value` in field `key`
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Null and empty-string values match everything
    pub fn is_noop(&self) -> bool {
        match &self.value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Check a single row against this rule
    ///
    /// String values match by case-insensitive containment against the field
    /// text. Any other value must equal the field exactly.
    pub fn matches<R: Row + ?Sized>(&self, row: &R) -> bool {
        if self.is_noop() {
            return true;
        }
        let field = row.field(&self.key);
        match &self.value {
            Value::String(needle) => {
                let hay = field.map(folded_text).unwrap_or_default();
                hay.contains(&needle.to_lowercase())
            }
            expected => field.is_some_and(|v| values_equal(v, expected)),
        }
    }
}

/// Keep rows matching every rule
pub fn filter<R: Row>(rows: Vec<R>, rules: &[FilterRule]) -> Vec<R> {
    let active: Vec<&FilterRule> = rules.iter().filter(|r| !r.is_noop()).collect();
    if active.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| active.iter().all(|rule| rule.matches(row)))
        .collect()
}

/// Keep rows where any of `columns` contains `query`
///
/// The query is trimmed and matched case-insensitively. A blank query keeps
/// every row.
pub fn filter_global<R: Row, S: AsRef<str>>(rows: Vec<R>, query: &str, columns: &[S]) -> Vec<R> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| {
            columns.iter().any(|col| {
                row.present(col.as_ref())
                    .is_some_and(|v| value_text(v).to_lowercase().contains(&needle))
            })
        })
        .collect()
}
