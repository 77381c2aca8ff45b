//! Encoding of segment context payloads.
//!
//! A context is any JSON-representable value. It is stored on rendered
//! items as a JSON string and decoded back when the item is read. JSON
//! `null` is treated as "no context" everywhere so that absent and null
//! cannot drift apart across an encode/decode cycle.

use crate::error::{CrumbError, CrumbResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Collapse JSON `null` into an absent context.
pub fn normalize(context: Option<Value>) -> Option<Value> {
    match context {
        Some(Value::Null) | None => None,
        Some(value) => Some(value),
    }
}

/// Serialize any value into a context.
pub fn to_context<T: Serialize + ?Sized>(value: &T) -> CrumbResult<Option<Value>> {
    let value = serde_json::to_value(value).map_err(CrumbError::ContextEncode)?;
    Ok(normalize(Some(value)))
}

/// Deserialize a context back into a typed value.
pub fn from_context<T: DeserializeOwned>(context: &Value) -> CrumbResult<T> {
    serde_json::from_value(context.clone()).map_err(CrumbError::ContextDecode)
}

/// Encode a context for storage in an item attribute.
pub fn encode(context: &Value) -> String {
    context.to_string()
}

/// Decode an attribute value, failing on malformed JSON.
pub fn decode_strict(raw: &str) -> CrumbResult<Option<Value>> {
    let value = serde_json::from_str(raw).map_err(CrumbError::ContextDecode)?;
    Ok(normalize(Some(value)))
}

/// Decode an attribute value, treating a missing or malformed attribute as
/// no context.
pub fn decode(raw: Option<&str>) -> Option<Value> {
    let raw = raw?;
    match decode_strict(raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Ignoring malformed context attribute {:?}: {}", raw, e);
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_nested_value_survives_attribute_cycle() {
        let value = json!({"id": 1, "tags": ["a", "b"], "meta": {"depth": 2.5, "ok": true}});
        let raw = encode(&value);
        assert_eq!(decode(Some(&raw)), Some(value));
    }

    #[test]
    fn test_floats_survive_attribute_cycle_exactly() {
        let floats = [
            1.0715660391465826e-75,
            -1.81996730402717e-179,
            -1.603964615428183e143,
            0.1 + 0.2,
            f64::MIN_POSITIVE,
            f64::MAX,
            5e-324,
        ];
        for f in floats {
            let value = json!(f);
            let decoded = decode(Some(&encode(&value)));
            assert_eq!(decoded, Some(value), "float {:e} changed", f);
            assert_eq!(decoded.and_then(|v| v.as_f64()).map(f64::to_bits), Some(f.to_bits()));
        }
    }

    #[test]
    fn test_null_is_absent() {
        assert_eq!(normalize(Some(Value::Null)), None);
        assert_eq!(decode(Some("null")), None);
        assert_eq!(to_context(&Option::<u32>::None).unwrap(), None);
    }

    #[test]
    fn test_missing_or_malformed_is_absent() {
        assert_eq!(decode(None), None);
        assert_eq!(decode(Some("undefined")), None);
        assert_eq!(decode(Some("{\"id\":")), None);
        assert!(decode_strict("{\"id\":").is_err());
    }

    #[test]
    fn test_typed_context() {
        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        struct Page {
            id: u32,
            slug: String,
        }

        let page = Page {
            id: 7,
            slug: "api".to_string(),
        };
        let context = to_context(&page).unwrap().unwrap();
        assert_eq!(context, json!({"id": 7, "slug": "api"}));
        let back: Page = from_context(&context).unwrap();
        assert_eq!(back, page);
        assert!(from_context::<Page>(&json!("nope")).is_err());
    }
}
