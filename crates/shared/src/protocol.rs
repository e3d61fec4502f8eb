//! Wire shape of the remote user listing.

use serde::Deserialize;

use crate::{
    domain::{Record, RecordId},
    error::LoadError,
};

/// Remote sources are inconsistent about ids: some send numbers, some send
/// numeric strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(i64),
    Text(String),
}

impl WireId {
    pub fn into_record_id(self) -> Result<RecordId, LoadError> {
        match self {
            Self::Number(value) => Ok(RecordId(value)),
            Self::Text(raw) => raw
                .trim()
                .parse::<i64>()
                .map(RecordId)
                .map_err(|_| LoadError::Malformed(format!("record id '{raw}' is not an integer"))),
        }
    }
}

/// One element of the listing. Unknown keys (address, company, ...) are skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPayload {
    pub id: WireId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl TryFrom<RecordPayload> for Record {
    type Error = LoadError;

    fn try_from(value: RecordPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into_record_id()?,
            name: value.name,
            username: value.username,
            email: value.email,
            phone: value.phone,
        })
    }
}

/// Decodes a full response body. Either every element decodes or nothing is returned.
pub fn decode_records(body: &[u8]) -> Result<Vec<Record>, LoadError> {
    let payloads: Vec<RecordPayload> =
        serde_json::from_slice(body).map_err(|err| LoadError::Malformed(err.to_string()))?;
    payloads.into_iter().map(Record::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_listing_and_drops_extra_fields() {
        let body = br#"[
            {
                "id": 1,
                "name": "Leanne Graham",
                "username": "Bret",
                "email": "Sincere@april.biz",
                "phone": "1-770-736-8031 x56442",
                "address": { "street": "Kulas Light", "city": "Gwenborough" },
                "website": "hildegard.org"
            }
        ]"#;

        let records = decode_records(body).expect("decode");
        assert_eq!(
            records,
            vec![Record {
                id: RecordId(1),
                name: "Leanne Graham".to_string(),
                username: "Bret".to_string(),
                email: "Sincere@april.biz".to_string(),
                phone: "1-770-736-8031 x56442".to_string(),
            }]
        );
    }

    #[test]
    fn accepts_numeric_string_ids() {
        let body = br#"[{"id":" 10 ","name":"a","username":"a","email":"a@x","phone":"1"}]"#;
        let records = decode_records(body).expect("decode");
        assert_eq!(records[0].id, RecordId(10));
    }

    #[test]
    fn rejects_non_numeric_string_ids() {
        let body = br#"[{"id":"abc","name":"a","username":"a","email":"a@x","phone":"1"}]"#;
        let err = decode_records(body).expect_err("must fail");
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn rejects_body_that_is_not_an_array() {
        let err = decode_records(br#"{"users":[]}"#).expect_err("must fail");
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn rejects_records_missing_display_fields() {
        let body = br#"[{"id":1,"name":"a","username":"a","email":"a@x"}]"#;
        assert!(decode_records(body).is_err());
    }

    #[test]
    fn empty_listing_is_valid() {
        assert_eq!(decode_records(b"[]").expect("decode"), Vec::new());
    }
}
