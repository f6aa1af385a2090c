//! Holded API types.
//!
//! Records are loosely typed on the wire: every field is optional and only
//! `id` decides whether a record is kept. Other fields are read leniently so
//! an odd value in one column never costs the whole record. Each element of
//! the list is decoded on its own so one malformed element cannot fail the
//! whole response.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Keep a string, treat any other JSON type as absent.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Keep a string, stringify a number or boolean, treat anything else as
/// absent.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => Ok(None),
    }
}

/// A contact as returned by the "list contacts" endpoint.
///
/// `id` is only taken when it is a JSON string. Display fields accept numbers
/// (ERP exports often store phone numbers that way) and drop structured
/// values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    #[serde(default, deserialize_with = "string_or_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub custom_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub trade_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub mobile: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub phone: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "string_or_none")]
    pub contact_type: Option<String>,
}

/// Body of the "list contacts" response.
///
/// The documented shape wraps the array under `data`; the live endpoint
/// answers with a bare array. Both are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContactsPayload {
    Wrapped { data: Vec<Value> },
    Bare(Vec<Value>),
}

impl ContactsPayload {
    /// Raw, still undecoded records in response order.
    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// Outcome of decoding one raw record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedRecord {
    Valid(ContactRecord),
    /// The element was not a JSON object; carries its position and the
    /// decoder message.
    Malformed { index: usize, reason: String },
}

/// Decode raw records one by one, keeping response order.
#[must_use]
pub fn decode_records(values: Vec<Value>) -> Vec<DecodedRecord> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => DecodedRecord::Valid(record),
            Err(e) => DecodedRecord::Malformed {
                index,
                reason: e.to_string(),
            },
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_record_reads_camel_case_fields() {
        let record: ContactRecord = serde_json::from_value(json!({
            "id": "5ab3",
            "customId": "C-001",
            "name": "Acme",
            "code": "B12345678",
            "tradeName": "Acme Trading",
            "email": "billing@acme.test",
            "mobile": "600000000",
            "phone": "910000000",
            "type": "client",
            "vatnumber": "ignored"
        }))
        .unwrap();

        assert_eq!(record.id.as_deref(), Some("5ab3"));
        assert_eq!(record.custom_id.as_deref(), Some("C-001"));
        assert_eq!(record.trade_name.as_deref(), Some("Acme Trading"));
        assert_eq!(record.contact_type.as_deref(), Some("client"));
    }

    #[test]
    fn test_record_null_and_missing_fields() {
        let record: ContactRecord =
            serde_json::from_value(json!({ "id": null, "name": "Bad" })).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.email, None);
        assert_eq!(record.name.as_deref(), Some("Bad"));
    }

    #[test]
    fn test_payload_wrapped_and_bare() {
        let wrapped: ContactsPayload =
            serde_json::from_value(json!({ "data": [{ "id": "1" }] })).unwrap();
        assert_eq!(wrapped.into_values().len(), 1);

        let bare: ContactsPayload = serde_json::from_value(json!([{ "id": "1" }, {}])).unwrap();
        assert_eq!(bare.into_values().len(), 2);
    }

    #[test]
    fn test_payload_rejects_other_shapes() {
        assert!(serde_json::from_value::<ContactsPayload>(json!({ "items": [] })).is_err());
        assert!(serde_json::from_value::<ContactsPayload>(json!("nope")).is_err());
    }

    #[test]
    fn test_record_non_string_id_is_absent() {
        for id in [json!(42), json!(["1"]), json!({ "value": "1" }), json!(true)] {
            let record: ContactRecord = serde_json::from_value(json!({ "id": id.clone() })).unwrap();
            assert_eq!(record.id, None, "id {id}");
        }
    }

    #[test]
    fn test_record_lenient_display_fields() {
        let record: ContactRecord = serde_json::from_value(json!({
            "id": "1",
            "mobile": 600_000_000,
            "phone": { "number": "910" },
            "code": null,
            "name": ["Acme"],
            "customId": true,
            "type": 3
        }))
        .unwrap();

        assert_eq!(record.id.as_deref(), Some("1"));
        assert_eq!(record.mobile.as_deref(), Some("600000000"));
        assert_eq!(record.custom_id.as_deref(), Some("true"));
        assert_eq!(record.phone, None);
        assert_eq!(record.code, None);
        assert_eq!(record.name, None);
        assert_eq!(record.contact_type, None);
    }

    #[test]
    fn test_decode_records_marks_non_objects_malformed() {
        let decoded = decode_records(vec![
            json!({ "id": "1" }),
            json!({ "id": 2, "phone": 910 }),
            json!("not an object"),
            json!(null),
        ]);

        assert!(matches!(decoded[0], DecodedRecord::Valid(_)));
        assert!(matches!(decoded[1], DecodedRecord::Valid(ContactRecord { id: None, .. })));
        assert!(matches!(decoded[2], DecodedRecord::Malformed { index: 2, .. }));
        assert!(matches!(decoded[3], DecodedRecord::Malformed { index: 3, .. }));
    }
}
