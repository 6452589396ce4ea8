//! Search term shapes: exact scalars and comparator bundles.

use crate::value::Value;
use serde::Deserialize;

/// A comparator bundle attached to one search field.
///
/// Every key is optional; an all-empty range is valid and contributes no
/// clauses. At emission time `min` and `min_exclusive` are mutually
/// exclusive (`min` wins when both are present), while the upper bounds and
/// `like` are independent of each other.
///
/// # Example
/// ```ignore
/// // "salary">=$1 AND "salary"<$2
/// let r = Range::new().min(30_000).max_exclusive(90_000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    /// Inclusive lower bound: `"col">=$n`
    pub min: Option<Value>,
    /// Exclusive lower bound: `"col">$n` (shadowed by `min` if both set)
    pub min_exclusive: Option<Value>,
    /// Inclusive upper bound: `"col"<=$n`
    pub max: Option<Value>,
    /// Exclusive upper bound: `"col"<$n`
    pub max_exclusive: Option<Value>,
    /// Case-insensitive substring match: `"col" ILIKE $n` binding `%text%`
    pub like: Option<String>,
}

impl Range {
    /// Create an empty range (no comparator keys set).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive lower bound.
    pub fn min(mut self, value: impl Into<Value>) -> Self {
        self.min = Some(value.into());
        self
    }

    /// Set the exclusive lower bound.
    pub fn min_exclusive(mut self, value: impl Into<Value>) -> Self {
        self.min_exclusive = Some(value.into());
        self
    }

    /// Set the inclusive upper bound.
    pub fn max(mut self, value: impl Into<Value>) -> Self {
        self.max = Some(value.into());
        self
    }

    /// Set the exclusive upper bound.
    pub fn max_exclusive(mut self, value: impl Into<Value>) -> Self {
        self.max_exclusive = Some(value.into());
        self
    }

    /// Set the substring-match literal (wildcards are added at compile time).
    pub fn like(mut self, text: impl Into<String>) -> Self {
        self.like = Some(text.into());
        self
    }

    /// Whether no comparator key is set.
    pub fn is_empty(&self) -> bool {
        self.min.is_none()
            && self.min_exclusive.is_none()
            && self.max.is_none()
            && self.max_exclusive.is_none()
            && self.like.is_none()
    }
}

/// A search term: either an exact-match scalar or a comparator bundle.
///
/// When deserializing, a JSON object becomes a [`Range`] (unrecognized keys
/// are ignored) and any scalar becomes an exact match, mirroring the two
/// input shapes the search builder accepts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Term {
    /// Comparator bundle: up to one clause per recognized key.
    Range(Range),
    /// Exact match: `"col"=$n`.
    Scalar(Value),
}

impl From<Range> for Term {
    fn from(r: Range) -> Self {
        Term::Range(r)
    }
}

impl From<Value> for Term {
    fn from(v: Value) -> Self {
        Term::Scalar(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_range() {
        assert!(Range::new().is_empty());
        assert!(!Range::new().min(1).is_empty());
    }

    #[test]
    fn builder_sets_keys() {
        let r = Range::new().min(5).max(6).like("ham");
        assert_eq!(r.min, Some(Value::Int(5)));
        assert_eq!(r.max, Some(Value::Int(6)));
        assert_eq!(r.like.as_deref(), Some("ham"));
        assert_eq!(r.min_exclusive, None);
        assert_eq!(r.max_exclusive, None);
    }
}
