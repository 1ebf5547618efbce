//! Record - identity extraction
//!
//! TigerStyle: A record is any serde type whose encoded form is an object
//! with a string identifier field. Any string is a valid identifier,
//! including the empty string.
//!
//! # Identity
//!
//! The identifier is found by scanning the encoded object's fields once and
//! taking the first whose name equals `id` ignoring ASCII case. Fields are
//! enumerated in serialization order, which for derived structs is
//! declaration order (`serde_json` is built with `preserve_order`).
//!
//! Types that know their key can skip the scan by overriding
//! [`Record::identifier`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::{StoreError, StoreResult};
use crate::constants::RECORD_ID_FIELD_NAME;

// =============================================================================
// Record
// =============================================================================

/// A value that can be stored in a table.
///
/// The default implementation locates the identifier by field name, so most
/// types only need an empty impl:
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use tablestore_core::Record;
///
/// #[derive(Serialize, Deserialize)]
/// struct Event {
///     id: String,
///     name: String,
/// }
///
/// impl Record for Event {}
/// ```
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Explicit identifier accessor.
    ///
    /// Returning `None` (the default) falls back to field extraction.
    fn identifier(&self) -> Option<&str> {
        None
    }
}

/// Untyped records; the identifier is always extracted by field name.
impl Record for Value {}

// =============================================================================
// Identity Extraction
// =============================================================================

/// Find the identifier of an encoded record.
///
/// # Errors
/// Returns `InvalidRecordIdentifier` if the value is not an object, has no
/// field named `id` (any case), or that field is not a string.
pub fn identify(value: &Value) -> StoreResult<String> {
    let fields = value.as_object().ok_or_else(|| {
        StoreError::invalid_record(format!(
            "expected a structured record, got {}",
            kind_of(value)
        ))
    })?;

    let (name, id) = fields
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(RECORD_ID_FIELD_NAME))
        .ok_or_else(|| StoreError::invalid_record("record has no id field"))?;

    match id {
        Value::String(id) => Ok(id.clone()),
        other => Err(StoreError::invalid_record(format!(
            "field {name:?} must be a string, got {}",
            kind_of(other)
        ))),
    }
}

/// Identifier of a typed record, honouring [`Record::identifier`].
///
/// # Errors
/// Returns `Serialization` if the record cannot be encoded and
/// `InvalidRecordIdentifier` if it has no usable identifier.
pub fn record_identifier<R: Record>(record: &R) -> StoreResult<String> {
    encode(record).map(|(id, _)| id)
}

/// Encode a record and resolve its identifier.
///
/// Nothing is mutated here, so a failure leaves every table untouched.
pub(crate) fn encode<R: Record>(record: &R) -> StoreResult<(String, Value)> {
    let body = serde_json::to_value(record)?;

    let id = match record.identifier() {
        Some(id) => id.to_owned(),
        None => identify(&body)?,
    };

    Ok((id, body))
}

/// Decode a stored record into the caller's type.
pub(crate) fn decode<R: Record>(body: Value) -> StoreResult<R> {
    Ok(serde_json::from_value(body)?)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Event {
        id: String,
        name: String,
        start: i64,
        end: i64,
    }

    impl Record for Event {}

    #[derive(Debug, Serialize, Deserialize)]
    struct Upper {
        #[serde(rename = "ID")]
        key: String,
        label: String,
    }

    impl Record for Upper {}

    #[derive(Debug, Serialize, Deserialize)]
    struct NoId {
        name: String,
    }

    impl Record for NoId {}

    #[derive(Debug, Serialize, Deserialize)]
    struct Keyed {
        key: String,
    }

    impl Record for Keyed {
        fn identifier(&self) -> Option<&str> {
            Some(&self.key)
        }
    }

    #[test]
    fn test_identify_struct() {
        let event = Event {
            id: "e1".to_string(),
            name: "Test Event".to_string(),
            start: 1_516_785_100,
            end: 1_516_785_200,
        };
        assert_eq!(record_identifier(&event).unwrap(), "e1");
    }

    #[test]
    fn test_identify_case_insensitive() {
        let upper = Upper {
            key: "u1".to_string(),
            label: "upper".to_string(),
        };
        assert_eq!(record_identifier(&upper).unwrap(), "u1");
        assert_eq!(identify(&json!({"iD": "mixed"})).unwrap(), "mixed");
    }

    #[test]
    fn test_identify_first_match_wins() {
        let value = json!({"name": "x", "Id": "first", "id": "second"});
        assert_eq!(identify(&value).unwrap(), "first");
    }

    #[test]
    fn test_identify_missing_field() {
        let err = record_identifier(&NoId {
            name: "anonymous".to_string(),
        })
        .unwrap_err();
        assert!(err.is_invalid_record());

        // Similar names are not the identifier
        assert!(identify(&json!({"uid": "a", "identifier": "b"}))
            .unwrap_err()
            .is_invalid_record());
    }

    #[test]
    fn test_identify_not_structured() {
        for value in [json!("e1"), json!(7), json!(null), json!(["id", "e1"])] {
            let err = identify(&value).unwrap_err();
            assert!(err.is_invalid_record(), "{value} should be rejected");
        }
    }

    #[test]
    fn test_identify_non_string_id() {
        let err = identify(&json!({"id": 42})).unwrap_err();
        assert!(err.is_invalid_record());
        assert!(err.to_string().contains("a number"));
    }

    #[test]
    fn test_identify_any_string() {
        assert_eq!(identify(&json!({"id": ""})).unwrap(), "");

        let long_id = "x".repeat(2000);
        assert_eq!(identify(&json!({ "id": long_id.clone() })).unwrap(), long_id);

        assert_eq!(identify(&json!({"id": "a\0b"})).unwrap(), "a\0b");
    }

    #[test]
    fn test_explicit_identifier() {
        let keyed = Keyed {
            key: "k1".to_string(),
        };
        assert_eq!(record_identifier(&keyed).unwrap(), "k1");

        let empty = Keyed { key: String::new() };
        assert_eq!(record_identifier(&empty).unwrap(), "");
    }

    #[test]
    fn test_encode_decode() {
        let event = Event {
            id: "e2".to_string(),
            name: "Launch".to_string(),
            start: 1,
            end: 2,
        };
        let (id, body) = encode(&event).unwrap();
        assert_eq!(id, "e2");
        assert_eq!(body["name"], "Launch");

        let decoded: Event = decode(body).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn test_decode_shape_mismatch() {
        let err = decode::<Event>(json!({"id": "e3"})).unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
