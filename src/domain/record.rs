//! Record model and the persisted blob format

use serde::{Deserialize, Serialize};

/// One named entry in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    /// Older blobs may lack this field; it loads as empty text.
    #[serde(default)]
    pub first: String,
}

impl Record {
    pub fn new(id: i64, first: impl Into<String>) -> Self {
        Record {
            id,
            first: first.into(),
        }
    }
}

/// Serialize a sequence into the compact JSON array stored under the list key
pub fn encode(records: &[Record]) -> serde_json::Result<String> {
    serde_json::to_string(records)
}

/// Parse a persisted JSON array back into a sequence
pub fn decode(blob: &str) -> serde_json::Result<Vec<Record>> {
    serde_json::from_str(blob)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_compact_array() {
        let records = vec![Record::new(1, "A"), Record::new(2, "B")];
        let blob = encode(&records).unwrap();
        assert_eq!(blob, r#"[{"id":1,"first":"A"},{"id":2,"first":"B"}]"#);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_decode_missing_first_defaults_to_empty() {
        let records = decode(r#"[{"id":7}]"#).unwrap();
        assert_eq!(records, vec![Record::new(7, "")]);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let records = decode(r#"[{"id":1,"first":"A","last":"Z"}]"#).unwrap();
        assert_eq!(records, vec![Record::new(1, "A")]);
    }

    #[test]
    fn test_decode_missing_id_fails() {
        assert!(decode(r#"[{"first":"A"}]"#).is_err());
    }

    #[test]
    fn test_decode_preserves_unicode() {
        let records = decode(r#"[{"id":1,"first":"Zoë"}]"#).unwrap();
        assert_eq!(records[0].first, "Zoë");
    }
}
