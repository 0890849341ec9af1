//! DynamoDB storage backend implementation.
//!
//! Provides a DynamoDB-based `RecordStore` using `aws-sdk-dynamodb`. The table
//! has a string partition key `pk` and a string sort key `sk`.

mod conversions;
mod error;
mod store;

pub use store::DynamoDbStore;
