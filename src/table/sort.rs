//! Stable multi-key sorting

use super::row::{compare_numbers, folded_text, Row};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// One sort key. The first rule in a list is the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRule {
    /// Field name to read from each row
    pub key: String,
    /// Sort present values largest-first
    #[serde(default)]
    pub descending: bool,
}

impl SortRule {
    /// Ascending rule for a field
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            descending: false,
        }
    }

    /// Descending rule for a field
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            descending: true,
        }
    }
}

/// Sort rows by the given rules
///
/// Rows that compare equal under every rule keep their input order.
/// Missing and null values always sort after present ones, whichever
/// direction the rule asks for.
pub fn sort<R: Row>(mut rows: Vec<R>, rules: &[SortRule]) -> Vec<R> {
    if rules.is_empty() {
        return rows;
    }
    // slice::sort_by is stable
    rows.sort_by(|a, b| compare_rows(a, b, rules));
    rows
}

/// Compare two rows rule by rule until one decides
pub fn compare_rows<R: Row + ?Sized>(a: &R, b: &R, rules: &[SortRule]) -> Ordering {
    rules
        .iter()
        .map(|rule| compare_field(a.present(&rule.key), b.present(&rule.key), rule.descending))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn compare_field(a: Option<&Value>, b: Option<&Value>, descending: bool) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ord = compare_values(a, b);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
    }
}

/// Order two present values
///
/// Numbers sort before every other kind of value and compare exactly by
/// value. Everything else (strings, booleans, arrays, objects) compares by
/// lowercased text. Dates are plain text. Grouping by kind first keeps the
/// order total on mixed columns.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
        (Value::Number(_), _) => Ordering::Less,
        (_, Value::Number(_)) => Ordering::Greater,
        _ => folded_text(a).cmp(&folded_text(b)),
    }
}
