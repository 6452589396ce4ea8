//! Logical-to-physical column name translation.

use std::collections::HashMap;

/// Translation table from logical (API-facing) field names to physical
/// column names.
///
/// Fields without an entry resolve to themselves, so the empty default is a
/// valid "no translations" map.
///
/// # Example
/// ```ignore
/// let cols = ColumnMap::new()
///     .map("firstName", "first_name")
///     .map("companyHandle", "company_handle");
/// assert_eq!(cols.resolve("firstName"), "first_name");
/// assert_eq!(cols.resolve("age"), "age");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    entries: HashMap<String, String>,
}

impl ColumnMap {
    /// Create an empty map (every field resolves to itself).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a translation: logical field name -> physical column name.
    pub fn map(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.entries.insert(field.into(), column.into());
        self
    }

    /// Resolve a field name to its physical column name, falling back to the
    /// field name itself.
    pub fn resolve<'a>(&'a self, field: &'a str) -> &'a str {
        self.entries.get(field).map(String::as_str).unwrap_or(field)
    }

    /// Number of translations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map contains no translations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for ColumnMap {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ColumnMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_mapped_field() {
        let cols = ColumnMap::new().map("firstName", "first_name");
        assert_eq!(cols.resolve("firstName"), "first_name");
    }

    #[test]
    fn falls_back_to_field_name() {
        let cols = ColumnMap::new().map("firstName", "first_name");
        assert_eq!(cols.resolve("age"), "age");
    }

    #[test]
    fn from_pairs() {
        let cols = ColumnMap::from([("a", "col_a"), ("b", "col_b")]);
        assert_eq!(cols.len(), 2);
        assert_eq!(cols.resolve("b"), "col_b");
    }
}
