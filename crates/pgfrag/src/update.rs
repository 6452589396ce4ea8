//! The update-fragment builder.

use crate::column_map::ColumnMap;
use crate::error::{FragError, FragResult};
use crate::fragment::{Fragment, comparison};
use crate::value::Value;

/// An ordered collection of column assignments for a partial UPDATE.
///
/// Compiles into a `SET` fragment: one `"col"=$n` assignment per entry, in
/// insertion order, joined with `", "`.
///
/// # Example
/// ```ignore
/// let frag = pgfrag::update()
///     .set("firstName", "leo")
///     .set("age", 6)
///     .build(&ColumnMap::new().map("firstName", "first_name"))?;
/// assert_eq!(frag.clause(), r#""first_name"=$1, "age"=$2"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSet {
    fields: Vec<(String, Value)>,
}

impl UpdateSet {
    /// Create an empty update set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a new value to a field.
    ///
    /// `Value::Null` is a real assignment (`SET col = NULL`), and the same
    /// value may appear under several fields; nothing is deduplicated.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((field.into(), value.into()));
        self
    }

    pub(crate) fn push(&mut self, field: String, value: Value) {
        self.fields.push((field, value));
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no assignments.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Compile into a `SET` fragment.
    ///
    /// Fails with [`FragError::BadRequest`] if the set is empty.
    pub fn build(&self, columns: &ColumnMap) -> FragResult<Fragment> {
        if self.fields.is_empty() {
            return Err(FragError::bad_request("no data"));
        }

        let mut clauses = Vec::with_capacity(self.fields.len());
        let mut values = Vec::with_capacity(self.fields.len());
        let mut idx = 0;
        for (field, value) in &self.fields {
            clauses.push(comparison(columns.resolve(field), "=", &mut idx));
            values.push(value.clone());
        }

        let fragment = Fragment {
            clause: clauses.join(", "),
            values,
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(clause = %fragment.clause, params = fragment.values.len(), "compiled SET fragment");
        Ok(fragment)
    }
}
