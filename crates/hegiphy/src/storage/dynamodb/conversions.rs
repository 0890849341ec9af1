//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! generic records. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use hegiphy_core::storage::{Attribute, Record, RepositoryError, Result};

/// Convert a record attribute to a DynamoDB value.
pub fn attribute_to_value(attribute: &Attribute) -> AttributeValue {
    match attribute {
        Attribute::S(value) => AttributeValue::S(value.clone()),
        Attribute::Ss(values) => AttributeValue::Ss(values.iter().cloned().collect()),
    }
}

/// Convert a DynamoDB value back to a record attribute.
pub fn value_to_attribute(name: &str, value: &AttributeValue) -> Result<Attribute> {
    match value {
        AttributeValue::S(value) => Ok(Attribute::S(value.clone())),
        AttributeValue::Ss(values) => Ok(Attribute::Ss(values.iter().cloned().collect())),
        other => Err(RepositoryError::InvalidData(format!(
            "unsupported attribute type for {name}: {other:?}"
        ))),
    }
}

/// Convert a record to a DynamoDB item.
pub fn record_to_item(record: &Record) -> HashMap<String, AttributeValue> {
    record
        .iter()
        .map(|(name, attribute)| (name.clone(), attribute_to_value(attribute)))
        .collect()
}

/// Convert a DynamoDB item to a record.
pub fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<Record> {
    item.iter()
        .map(|(name, value)| Ok((name.clone(), value_to_attribute(name, value)?)))
        .collect()
}
