//! # pgfrag
//!
//! A small compiler from sparse, dynamically-shaped criteria to
//! parameterized PostgreSQL fragments.
//!
//! ## Features
//!
//! - **Update fragments**: a flat field→value map becomes a `SET` clause
//!   plus an ordered value list
//! - **Search fragments**: fields carrying scalars or comparator bundles
//!   (`min` / `min_exclusive` / `max` / `max_exclusive` / `like`) become an
//!   AND-joined `WHERE` clause
//! - **No string replacement**: `$n` placeholder indices are computed at
//!   build time from one running counter
//! - **Column translation**: logical field names resolve through a
//!   [`ColumnMap`], falling back to the field name itself
//! - **Executor-ready**: values implement `ToSql`, so [`Fragment::params`]
//!   plugs straight into tokio-postgres
//!
//! ## Usage
//!
//! ```ignore
//! use pgfrag::{ColumnMap, Range};
//!
//! let cols = ColumnMap::new().map("firstName", "first_name");
//!
//! // UPDATE
//! let frag = pgfrag::update()
//!     .set("firstName", "leo")
//!     .set("age", 6)
//!     .build(&cols)?;
//! let sql = format!("UPDATE users SET {} WHERE id = ${}", frag.clause(), frag.len() + 1);
//!
//! // WHERE
//! let frag = pgfrag::search()
//!     .range("name", Range::new().like("ham"))
//!     .range("age", Range::new().min(5).max(6))
//!     .eq("quilts", 0)
//!     .build(&cols)?;
//! // "name" ILIKE $1 AND "age">=$2 AND "age"<=$3 AND "quilts"=$4
//! ```
//!
//! Both builders are pure and synchronous: they read only their arguments,
//! perform no I/O, and are safe to call from any thread. The caller owns the
//! database round-trip.

pub mod column_map;
mod de;
pub mod error;
pub mod fragment;
pub mod range;
pub mod search;
pub mod update;
pub mod value;

pub use column_map::ColumnMap;
pub use error::{FragError, FragResult};
pub use fragment::Fragment;
pub use range::{Range, Term};
pub use search::SearchCriteria;
pub use update::UpdateSet;
pub use value::Value;

/// Create an empty update set.
///
/// # Example
/// ```ignore
/// let set = pgfrag::update().set("firstName", "leo");
/// ```
pub fn update() -> UpdateSet {
    UpdateSet::new()
}

/// Create empty search criteria.
///
/// # Example
/// ```ignore
/// let criteria = pgfrag::search().eq("name", "leo");
/// ```
pub fn search() -> SearchCriteria {
    SearchCriteria::new()
}
