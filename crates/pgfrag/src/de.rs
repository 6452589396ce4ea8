//! Serde integration: build criteria from JSON-shaped request input.
//!
//! [`UpdateSet`] and [`SearchCriteria`] deserialize from maps, preserving
//! entry order so placeholder assignment follows document order. Order is
//! only preserved when deserializing from a self-describing stream (e.g.
//! `serde_json::from_str`); going through an intermediate
//! `serde_json::Value` re-sorts keys unless its `preserve_order` feature is
//! enabled.
//!
//! JSON objects become [`Range`](crate::Range) terms (unrecognized keys are
//! ignored), scalars become exact-match terms, and `null` becomes
//! [`Value::Null`].

use crate::range::Term;
use crate::search::SearchCriteria;
use crate::update::UpdateSet;
use crate::value::Value;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a scalar (null, boolean, number, or string)")
            }

            fn visit_unit<E>(self) -> Result<Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(ValueVisitor)
            }

            fn visit_bool<E>(self, v: bool) -> Result<Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Bool(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Int(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Value, E>
            where
                E: de::Error,
            {
                // Out-of-range magnitudes degrade to float, like a JSON number.
                Ok(i64::try_from(v)
                    .map(Value::Int)
                    .unwrap_or(Value::Float(v as f64)))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Float(v))
            }

            fn visit_str<E>(self, v: &str) -> Result<Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Text(v.to_string()))
            }

            fn visit_string<E>(self, v: String) -> Result<Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Text(v))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for UpdateSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UpdateVisitor;

        impl<'de> Visitor<'de> for UpdateVisitor {
            type Value = UpdateSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to scalar values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<UpdateSet, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut set = UpdateSet::new();
                while let Some((field, value)) = access.next_entry::<String, Value>()? {
                    set.push(field, value);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(UpdateVisitor)
    }
}

impl<'de> Deserialize<'de> for SearchCriteria {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SearchVisitor;

        impl<'de> Visitor<'de> for SearchVisitor {
            type Value = SearchCriteria;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to scalars or range objects")
            }

            fn visit_map<A>(self, mut access: A) -> Result<SearchCriteria, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut criteria = SearchCriteria::new();
                while let Some((field, term)) = access.next_entry::<String, Term>()? {
                    criteria.push(field, Some(term));
                }
                Ok(criteria)
            }
        }

        deserializer.deserialize_map(SearchVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ColumnMap, SearchCriteria, UpdateSet, Value};

    #[test]
    fn update_from_json_keeps_document_order() {
        let set: UpdateSet =
            serde_json::from_str(r#"{"firstName":"leo","age":6,"bio":null}"#).unwrap();
        let frag = set.build(&ColumnMap::new()).unwrap();
        assert_eq!(frag.clause(), r#""firstName"=$1, "age"=$2, "bio"=$3"#);
        assert_eq!(
            frag.values(),
            &[Value::from("leo"), Value::Int(6), Value::Null],
        );
    }

    #[test]
    fn search_from_json_mixed_terms() {
        let criteria: SearchCriteria = serde_json::from_str(
            r#"{"name":{"like":"ham"},"age":{"min":5,"max":6},"quilts":0}"#,
        )
        .unwrap();
        let frag = criteria.build(&ColumnMap::new()).unwrap();
        assert_eq!(
            frag.clause(),
            r#""name" ILIKE $1 AND "age">=$2 AND "age"<=$3 AND "quilts"=$4"#,
        );
        assert_eq!(
            frag.values(),
            &[
                Value::from("%ham%"),
                Value::Int(5),
                Value::Int(6),
                Value::Int(0),
            ],
        );
    }

    #[test]
    fn search_from_json_camel_case_range_keys() {
        let criteria: SearchCriteria =
            serde_json::from_str(r#"{"equity":{"minExclusive":0}}"#).unwrap();
        let frag = criteria.build(&ColumnMap::new()).unwrap();
        assert_eq!(frag.clause(), r#""equity">$1"#);
        assert_eq!(frag.values(), &[Value::Int(0)]);
    }

    #[test]
    fn search_from_json_unrecognized_range_keys_are_ignored() {
        let criteria: SearchCriteria =
            serde_json::from_str(r#"{"age":{"approximately":40}}"#).unwrap();
        let frag = criteria.build(&ColumnMap::new()).unwrap();
        assert_eq!(frag.clause(), "");
        assert!(frag.values().is_empty());
    }

    #[test]
    fn search_from_json_null_scalar_binds_null() {
        let criteria: SearchCriteria = serde_json::from_str(r#"{"quilts":null}"#).unwrap();
        let frag = criteria.build(&ColumnMap::new()).unwrap();
        assert_eq!(frag.clause(), r#""quilts"=$1"#);
        assert_eq!(frag.values(), &[Value::Null]);
    }

    #[test]
    fn search_from_json_floats_and_bools() {
        let criteria: SearchCriteria =
            serde_json::from_str(r#"{"equity":{"max":0.5},"remote":true}"#).unwrap();
        let frag = criteria.build(&ColumnMap::new()).unwrap();
        assert_eq!(frag.clause(), r#""equity"<=$1 AND "remote"=$2"#);
        assert_eq!(frag.values(), &[Value::Float(0.5), Value::Bool(true)]);
    }
}
