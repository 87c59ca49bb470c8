//! JSON <-> BSON conversion for request bodies and stored documents.

use crate::error::GatewayError;
use bson::{Bson, Document};
use serde_json::{Map, Number, Value};

/// Encode a JSON object as a BSON document. Integers become Int64; unsigned
/// integers above `i64::MAX` have no BSON integer type and become Double.
pub fn json_to_document(fields: Map<String, Value>) -> Result<Document, GatewayError> {
    let fields: Map<String, Value> = fields.into_iter().map(|(k, v)| (k, widen_unsigned(v))).collect();
    Ok(bson::to_document(&fields)?)
}

fn widen_unsigned(value: Value) -> Value {
    match value {
        Value::Number(n) if n.is_u64() && !n.is_i64() => match n.as_f64().and_then(Number::from_f64) {
            Some(widened) => Value::Number(widened),
            None => Value::Number(n),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(widen_unsigned).collect()),
        Value::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, widen_unsigned(v))).collect()),
        other => other,
    }
}

/// Render a stored document for the wire: ObjectIds as hex strings, datetimes as RFC 3339.
pub fn document_to_json(doc: Document) -> Value {
    let map: Map<String, Value> = doc.into_iter().map(|(k, v)| (k, bson_to_json(v))).collect();
    Value::Object(map)
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn object_ids_render_as_hex() {
        let id = ObjectId::new();
        let out = document_to_json(doc! {
            "_id": id,
            "owner": { "ref": id },
            "tags": [id, "x"],
        });
        assert_eq!(out["_id"], json!(id.to_hex()));
        assert_eq!(out["owner"]["ref"], json!(id.to_hex()));
        assert_eq!(out["tags"], json!([id.to_hex(), "x"]));
    }

    #[test]
    fn scalars_keep_their_json_shape() {
        let body = json!({ "make": "Toyota", "year": 2020, "automatic": true, "price": 9.5, "notes": null });
        let Value::Object(map) = body.clone() else { unreachable!() };
        let doc = json_to_document(map).unwrap();
        assert_eq!(doc.get_i64("year").unwrap(), 2020);
        assert!(doc.get("notes").unwrap().as_null().is_some());
        assert_eq!(document_to_json(doc), body);
    }

    #[test]
    fn integers_beyond_i64_become_doubles() {
        let body = json!({
            "mileage": u64::MAX,
            "limit": i64::MAX,
            "history": [{ "odometer": 9_300_000_000_000_000_000u64 }],
        });
        let Value::Object(map) = body else { unreachable!() };
        let doc = json_to_document(map).unwrap();
        assert_eq!(doc.get_f64("mileage").unwrap(), u64::MAX as f64);
        assert_eq!(doc.get_i64("limit").unwrap(), i64::MAX);
        let history = doc.get_array("history").unwrap();
        let entry = history[0].as_document().unwrap();
        assert_eq!(entry.get_f64("odometer").unwrap(), 9.3e18);
    }

    #[test]
    fn datetimes_render_as_rfc3339() {
        let dt = bson::DateTime::from_millis(0);
        let out = document_to_json(doc! { "at": dt });
        assert!(out["at"].as_str().unwrap().starts_with("1970-01-01T00:00:00"));
    }
}
