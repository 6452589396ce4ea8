//! Compiled SQL fragments.

use crate::value::Value;
use tokio_postgres::types::ToSql;

/// A compiled SQL fragment: clause text plus its positionally-bound values.
///
/// Placeholders are PostgreSQL-style `$1, $2, ...`, numbered contiguously
/// from 1 in the same order as [`values`](Fragment::values). The caller
/// splices the clause into a larger statement and passes the values (via
/// [`params`](Fragment::params)) to a parameterized-query executor:
///
/// ```ignore
/// let frag = pgfrag::update().set("firstName", "leo").build(&cols)?;
/// let sql = format!(
///     "UPDATE users SET {} WHERE id = ${}",
///     frag.clause(),
///     frag.len() + 1,
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub(crate) clause: String,
    pub(crate) values: Vec<Value>,
}

impl Fragment {
    /// The SQL clause text, without any leading keyword (`SET` / `WHERE`).
    pub fn clause(&self) -> &str {
        &self.clause
    }

    /// The bound values, in placeholder order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of bound values (equals the highest placeholder index).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the fragment binds no values.
    ///
    /// A search over only skipped fields compiles to an empty fragment; this
    /// is a valid result, not an error.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the values as tokio-postgres parameter references.
    pub fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.values.iter().map(|v| v as &(dyn ToSql + Sync)).collect()
    }

    /// Consume the fragment into its clause and value list.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.clause, self.values)
    }
}

/// Emit one comparison sub-clause: quoted column, operator, next placeholder.
///
/// `idx` is the running placeholder counter shared across the whole
/// fragment; it is incremented exactly once per call.
pub(crate) fn comparison(column: &str, op: &str, idx: &mut usize) -> String {
    *idx += 1;
    let mut out = String::with_capacity(column.len() + op.len() + 6);
    write_column(&mut out, column);
    out.push_str(op);
    out.push('$');
    out.push_str(&idx.to_string());
    out
}

/// Append a double-quoted column identifier, escaping embedded `"` as `""`.
fn write_column(out: &mut String, name: &str) {
    out.push('"');
    for ch in name.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_advances_counter() {
        let mut idx = 0;
        assert_eq!(comparison("age", ">=", &mut idx), "\"age\">=$1");
        assert_eq!(comparison("age", "<=", &mut idx), "\"age\"<=$2");
        assert_eq!(idx, 2);
    }

    #[test]
    fn column_quote_is_escaped() {
        let mut idx = 0;
        assert_eq!(comparison("we\"ird", "=", &mut idx), "\"we\"\"ird\"=$1");
    }

    #[test]
    fn params_match_values() {
        let frag = Fragment {
            clause: "\"a\"=$1".to_string(),
            values: vec![Value::Int(1)],
        };
        assert_eq!(frag.params().len(), frag.len());
        assert!(!frag.is_empty());
    }
}
