//! Allow-listed, missing-stripped view of a character request payload.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use crate::error::AppError;

/// Payload keys copied from an inbound character request.
///
/// Any other key in the raw payload is dropped during sanitization.
pub const ALLOWED_FIELDS: [&str; 8] = [
    "name",
    "characterClass",
    "level",
    "hp",
    "mana",
    "attack",
    "items",
    "id",
];

/// Per-request mapping holding only the allow-listed fields that were present.
///
/// A field counts as missing when its key is absent or its value is `null`.
/// Missing fields are omitted entirely; present values are copied as-is, with
/// no type coercion or range checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SanitizedInput(Map<String, Value>);

impl SanitizedInput {
    /// Builds the sanitized mapping from a raw JSON object.
    ///
    /// The raw payload is only read; values are cloned into the new mapping.
    pub fn from_raw(raw: &Map<String, Value>) -> Self {
        let mut fields = Map::new();

        for key in ALLOWED_FIELDS {
            match raw.get(key) {
                None | Some(Value::Null) => {}
                Some(value) => {
                    fields.insert(key.to_string(), value.clone());
                }
            }
        }

        Self(fields)
    }

    /// Builds the sanitized mapping from any JSON value.
    ///
    /// Anything other than an object carries no fields, so the result is empty.
    pub fn from_payload(payload: &Value) -> Self {
        match payload {
            Value::Object(raw) => Self::from_raw(raw),
            _ => Self::default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sets `id`, replacing any value carried by the payload.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.0.insert("id".to_string(), Value::String(id.into()));
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Decodes the fields into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when a field holds a value of the wrong
    /// JSON type (for example a string `level`).
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        serde_json::from_value(Value::Object(self.0.clone())).map_err(|e| {
            AppError::bad_request(
                "Invalid character payload",
                json!({ "reason": e.to_string() }),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected a JSON object, got {other}"),
        }
    }

    #[test]
    fn test_complete_payload_is_kept_intact() {
        let raw = object(json!({
            "name": "Luke",
            "characterClass": "Jedi",
            "level": 10,
            "hp": 100,
            "mana": 50,
            "attack": 20,
            "items": ["Lightsaber"],
            "id": "1234"
        }));

        let sanitized = SanitizedInput::from_raw(&raw);

        assert_eq!(sanitized.len(), 8);
        assert_eq!(sanitized.as_map(), &raw);
    }

    #[test]
    fn test_missing_values_are_dropped() {
        let raw = object(json!({
            "name": "Darth Vader",
            "characterClass": null,
            "level": 15,
            "hp": 150,
            "mana": 70,
            "attack": 30,
            "id": "5678"
        }));

        let sanitized = SanitizedInput::from_raw(&raw);

        let expected = object(json!({
            "name": "Darth Vader",
            "level": 15,
            "hp": 150,
            "mana": 70,
            "attack": 30,
            "id": "5678"
        }));
        assert_eq!(sanitized.as_map(), &expected);
        assert!(!sanitized.contains("characterClass"));
        assert!(!sanitized.contains("items"));
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let raw = object(json!({
            "name": "Leia",
            "isAdmin": true,
            "sanitizedInput": { "id": "x" }
        }));

        let sanitized = SanitizedInput::from_raw(&raw);

        assert_eq!(sanitized.len(), 1);
        assert_eq!(sanitized.get("name"), Some(&json!("Leia")));
    }

    #[test]
    fn test_values_are_not_coerced() {
        let raw = object(json!({ "level": "ten", "items": "sword" }));

        let sanitized = SanitizedInput::from_raw(&raw);

        assert_eq!(sanitized.get("level"), Some(&json!("ten")));
        assert_eq!(sanitized.get("items"), Some(&json!("sword")));
    }

    #[test]
    fn test_raw_payload_is_untouched() {
        let raw = object(json!({ "name": "Han", "characterClass": null, "ship": "Falcon" }));
        let before = raw.clone();

        let mut sanitized = SanitizedInput::from_raw(&raw);
        sanitized.set_id("42");

        assert_eq!(raw, before);
        assert_eq!(sanitized.get("id"), Some(&json!("42")));
    }

    #[test]
    fn test_non_object_payload_is_empty() {
        assert!(SanitizedInput::from_payload(&json!([1, 2, 3])).is_empty());
        assert!(SanitizedInput::from_payload(&json!("name")).is_empty());
        assert!(SanitizedInput::from_payload(&Value::Null).is_empty());
    }

    #[test]
    fn test_set_id_overrides_payload_id() {
        let raw = object(json!({ "id": "from-body", "name": "Rey" }));
        let mut sanitized = SanitizedInput::from_raw(&raw);

        sanitized.set_id("from-path");

        assert_eq!(sanitized.get("id"), Some(&json!("from-path")));
        assert_eq!(sanitized.len(), 2);
    }

    /// Builds a payload from a base-3 code: for each allow-listed field, digit
    /// 0 leaves the key out, 1 sets it to `null` and 2 sets a value. Unknown keys
    /// are mixed in as well.
    fn generated_payload(code: u32) -> Map<String, Value> {
        let values = [
            json!("Luke"),
            json!("Jedi"),
            json!(10),
            json!(100.5),
            json!(0),
            json!(-3),
            json!(["Lightsaber"]),
            json!("1234"),
        ];
        let mut raw = Map::new();
        let mut rest = code;

        for (key, value) in ALLOWED_FIELDS.iter().zip(values) {
            match rest % 3 {
                1 => {
                    raw.insert(key.to_string(), Value::Null);
                }
                2 => {
                    raw.insert(key.to_string(), value);
                }
                _ => {}
            }
            rest /= 3;
        }

        if code % 2 == 0 {
            raw.insert("isAdmin".to_string(), json!(true));
        }
        if code % 5 == 0 {
            raw.insert("power".to_string(), Value::Null);
        }
        raw
    }

    #[test]
    fn test_every_field_combination_is_sanitized() {
        for code in 0..3u32.pow(ALLOWED_FIELDS.len() as u32) {
            let raw = generated_payload(code);

            let sanitized = SanitizedInput::from_raw(&raw);

            for (key, value) in sanitized.as_map() {
                assert!(ALLOWED_FIELDS.contains(&key.as_str()), "{key} in {raw:?}");
                assert!(!value.is_null(), "{key} kept as null in {raw:?}");
                assert_eq!(raw.get(key), Some(value));
            }
            for key in ALLOWED_FIELDS {
                let present = raw.get(key).is_some_and(|v| !v.is_null());
                assert_eq!(sanitized.contains(key), present, "{key} in {raw:?}");
            }
        }
    }

    #[test]
    fn test_decode_reports_type_mismatch() {
        #[derive(serde::Deserialize)]
        #[allow(dead_code)]
        struct Levelled {
            level: Option<i64>,
        }

        let sanitized = SanitizedInput::from_raw(&object(json!({ "level": "ten" })));

        let result = sanitized.decode::<Levelled>();

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
