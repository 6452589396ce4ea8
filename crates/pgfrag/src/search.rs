//! The search-fragment builder.

use crate::column_map::ColumnMap;
use crate::error::{FragError, FragResult};
use crate::fragment::{Fragment, comparison};
use crate::range::{Range, Term};
use crate::value::Value;
use std::cmp::Ordering;

/// An ordered collection of search criteria for a WHERE clause.
///
/// Each field carries either a [`Term`] or nothing at all: a field added
/// with [`skip`](SearchCriteria::skip) counts toward the non-empty check but
/// contributes no clause and consumes no placeholder. Compiles into an
/// AND-joined fragment with one running placeholder counter across all
/// fields.
///
/// # Example
/// ```ignore
/// let frag = pgfrag::search()
///     .range("name", Range::new().like("ham"))
///     .range("age", Range::new().min(5).max(6))
///     .eq("quilts", 0)
///     .build(&ColumnMap::new())?;
/// assert_eq!(
///     frag.clause(),
///     r#""name" ILIKE $1 AND "age">=$2 AND "age"<=$3 AND "quilts"=$4"#,
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    fields: Vec<(String, Option<Term>)>,
}

impl SearchCriteria {
    /// Create empty criteria.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exact-match term: `"col"=$n`.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields
            .push((field.into(), Some(Term::Scalar(value.into()))));
        self
    }

    /// Add a comparator-bundle term.
    pub fn range(mut self, field: impl Into<String>, range: Range) -> Self {
        self.fields.push((field.into(), Some(Term::Range(range))));
        self
    }

    /// Add any term.
    pub fn term(mut self, field: impl Into<String>, term: impl Into<Term>) -> Self {
        self.fields.push((field.into(), Some(term.into())));
        self
    }

    /// Record a field with no value.
    ///
    /// The key counts toward the non-empty check but emits nothing.
    pub fn skip(mut self, field: impl Into<String>) -> Self {
        self.fields.push((field.into(), None));
        self
    }

    pub(crate) fn push(&mut self, field: String, term: Option<Term>) {
        self.fields.push((field, term));
    }

    /// Number of criteria keys, including skipped ones.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no criteria keys at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Compile into a WHERE-clause fragment.
    ///
    /// Fails with [`FragError::BadRequest`] if there are zero keys, or if a
    /// field's lower bound lies above its upper bound. Criteria whose every
    /// field is skipped (or whose ranges are all empty) compile to an empty
    /// fragment; that is a valid result.
    pub fn build(&self, columns: &ColumnMap) -> FragResult<Fragment> {
        if self.fields.is_empty() {
            return Err(FragError::bad_request("no data"));
        }

        let mut clauses: Vec<String> = Vec::new();
        let mut values: Vec<Value> = Vec::new();
        let mut idx = 0;

        for (field, term) in &self.fields {
            let Some(term) = term else { continue };
            let col = columns.resolve(field);
            match term {
                Term::Scalar(v) => {
                    clauses.push(comparison(col, "=", &mut idx));
                    values.push(v.clone());
                }
                Term::Range(range) => {
                    if let Some(v) = &range.min {
                        clauses.push(comparison(col, ">=", &mut idx));
                        values.push(v.clone());
                    } else if let Some(v) = &range.min_exclusive {
                        clauses.push(comparison(col, ">", &mut idx));
                        values.push(v.clone());
                    }
                    if let Some(v) = &range.max {
                        check_bounds(field, range, v, true)?;
                        clauses.push(comparison(col, "<=", &mut idx));
                        values.push(v.clone());
                    }
                    if let Some(v) = &range.max_exclusive {
                        check_bounds(field, range, v, false)?;
                        clauses.push(comparison(col, "<", &mut idx));
                        values.push(v.clone());
                    }
                    if let Some(text) = &range.like {
                        clauses.push(comparison(col, " ILIKE ", &mut idx));
                        values.push(Value::Text(format!("%{text}%")));
                    }
                }
            }
        }

        let fragment = Fragment {
            clause: clauses.join(" AND "),
            values,
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(clause = %fragment.clause, params = fragment.values.len(), "compiled WHERE fragment");
        Ok(fragment)
    }
}

/// Validate one upper bound against both lower bounds.
///
/// `min` may equal an inclusive upper bound; an exclusive bound on either
/// side makes equality a violation. Pairs with no defined ordering
/// (see [`Value::compare`]) are not validated.
fn check_bounds(
    field: &str,
    range: &Range,
    upper: &Value,
    upper_inclusive: bool,
) -> FragResult<()> {
    let violates = |lower: &Option<Value>, allow_equal: bool| match lower
        .as_ref()
        .and_then(|lo| lo.compare(upper))
    {
        Some(Ordering::Greater) => true,
        Some(Ordering::Equal) => !allow_equal,
        _ => false,
    };

    if violates(&range.min, upper_inclusive) || violates(&range.min_exclusive, false) {
        return Err(FragError::bad_request(format!(
            "{field} min cannot be greater than max"
        )));
    }
    Ok(())
}
