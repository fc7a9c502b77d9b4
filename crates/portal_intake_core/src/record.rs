use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The fields copied into storage, with `createdAt` as the only numeric
/// attribute. This list is fixed and explicit; it is not derived from the
/// validation registry.
pub const STORED_FIELDS: [&str; 17] = [
    "accountEmail",
    "accountPrefix",
    "accountType",
    "appName",
    "cloudProvider",
    "costCenter",
    "createdAt",
    "envType",
    "id",
    "lob",
    "primaryRegion",
    "primaryVpcCidr",
    "reqId",
    "responsible",
    "secondaryVpcCidr",
    "securityContact",
    "servicenowCase",
];

pub const NUMERIC_FIELD: &str = "createdAt";
pub const PARTITION_KEY_FIELD: &str = "id";

/// A storage value tagged with its wire type. Numbers travel as strings,
/// matching the key-value store's attribute encoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttributeValue {
    S(String),
    N(String),
}

/// The type-tagged wire shape of a validated account request. Constructed
/// once per request, handed to the persistence collaborator, discarded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct StorageItem {
    attributes: BTreeMap<String, AttributeValue>,
}

impl StorageItem {
    pub fn attributes(&self) -> &BTreeMap<String, AttributeValue> {
        &self.attributes
    }

    /// The partition key value, used as the response echo.
    pub fn id(&self) -> Option<&str> {
        match self.attributes.get(PARTITION_KEY_FIELD) {
            Some(AttributeValue::S(text)) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    MissingAttribute(String),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingAttribute(field) => {
                write!(f, "record is missing required attribute '{field}'")
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Maps a validated record into its storage wire shape.
///
/// Assumes the record already passed validation; no sanitizing happens
/// here. A missing field is an error, never a silently substituted
/// default.
pub fn build_storage_item(record: &Map<String, Value>) -> Result<StorageItem, BuildError> {
    let mut attributes = BTreeMap::new();
    for field in STORED_FIELDS {
        let value = record
            .get(field)
            .ok_or_else(|| BuildError::MissingAttribute(field.to_string()))?;
        let attribute = if field == NUMERIC_FIELD {
            numeric_attribute(value)
        } else {
            string_attribute(value)
        };
        attributes.insert(field.to_string(), attribute);
    }
    Ok(StorageItem { attributes })
}

fn string_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::String(text) => AttributeValue::S(text.clone()),
        other => AttributeValue::S(other.to_string()),
    }
}

fn numeric_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Number(number) => AttributeValue::N(number.to_string()),
        other => AttributeValue::N(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn validated_record() -> Map<String, Value> {
        let record = json!({
            "accountEmail": "owner@example.com",
            "accountPrefix": "acme",
            "accountType": "sandbox",
            "appName": "billing",
            "cloudProvider": "aws",
            "costCenter": "cc-1234",
            "createdAt": 1706000000,
            "envType": "dev",
            "id": "acct-0001",
            "lob": "payments",
            "primaryRegion": "eu-west-1",
            "primaryVpcCidr": "10.0.0.0/16",
            "reqId": "requester@example.com",
            "responsible": "Jane Doe",
            "secondaryVpcCidr": "10.1.0.0/16",
            "securityContact": "security@example.com",
            "servicenowCase": "SNOW-42",
        });
        record
            .as_object()
            .expect("record literal should be an object")
            .clone()
    }

    #[test]
    fn builds_all_stored_fields_with_expected_tags() {
        let item = build_storage_item(&validated_record()).expect("build should pass");

        assert_eq!(item.attributes().len(), STORED_FIELDS.len());
        assert_eq!(
            item.attributes().get("accountEmail"),
            Some(&AttributeValue::S("owner@example.com".to_string()))
        );
        assert_eq!(
            item.attributes().get("createdAt"),
            Some(&AttributeValue::N("1706000000".to_string()))
        );
        assert_eq!(item.id(), Some("acct-0001"));
    }

    #[test]
    fn building_twice_yields_value_equal_items() {
        let record = validated_record();
        let first = build_storage_item(&record).expect("build should pass");
        let second = build_storage_item(&record).expect("build should pass");
        assert_eq!(first, second);
    }

    #[test]
    fn missing_field_is_an_error_not_a_default() {
        let mut record = validated_record();
        record.remove("costCenter");

        let error = build_storage_item(&record).expect_err("build should fail");
        assert_eq!(error, BuildError::MissingAttribute("costCenter".to_string()));
    }

    #[test]
    fn serializes_to_type_tagged_wire_shape() {
        let item = build_storage_item(&validated_record()).expect("build should pass");
        let wire = serde_json::to_value(&item).expect("item should serialize");

        assert_eq!(wire["accountEmail"], json!({"S": "owner@example.com"}));
        assert_eq!(wire["createdAt"], json!({"N": "1706000000"}));
    }
}
