use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Article;

/// Which list the page is showing. Only meaningful to a real backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    /// Global article list.
    #[default]
    All,
    /// Articles from followed authors.
    Feed,
}

/// Exact-match filters keyed by camelCase article field name.
///
/// An article matches when every filter key names one of its fields and the
/// field's JSON value equals the filter value. Unknown keys never match.
/// Numbers compare by value, so `3.0` matches a count of `3`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleFilters(BTreeMap<String, Value>);

impl ArticleFilters {
    /// No filters: everything matches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ArticleFilters::insert`].
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Require `field` to equal `value`, replacing any earlier filter on it.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Number of filter keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check `article` against every filter.
    pub fn matches(&self, article: &Article) -> bool {
        if self.0.is_empty() {
            return true;
        }
        let Ok(Value::Object(fields)) = serde_json::to_value(article) else {
            return false;
        };
        self.0
            .iter()
            .all(|(key, expected)| {
                fields
                    .get(key)
                    .is_some_and(|actual| same_value(actual, expected))
            })
    }
}

fn same_value(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => a == b,
        },
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| same_value(a, b))
        },
        _ => actual == expected,
    }
}

/// Listing request supplied by the page layer.
///
/// Only `filters` is consulted by the in-memory store; `list_type`, `limit`
/// and `offset` are carried for a real backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleListConfig {
    /// List flavor.
    #[serde(rename = "type")]
    pub list_type: ListType,
    /// Exact-match field filters.
    pub filters: ArticleFilters,
    /// Page size.
    pub limit: Option<usize>,
    /// Page start.
    pub offset: Option<usize>,
}

impl ArticleListConfig {
    /// Unfiltered global list.
    pub fn all() -> Self {
        Self::default()
    }

    /// Global list restricted by `filters`.
    pub fn filtered(filters: ArticleFilters) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }
}
