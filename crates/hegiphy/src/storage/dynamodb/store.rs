//! DynamoDB record store.

use std::time::Duration;

use async_trait::async_trait;
use aws_config::timeout::TimeoutConfig;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use hegiphy_core::storage::{
    Mutation, Record, RecordStore, RepositoryError, Result, PARTITION_KEY, SORT_KEY,
};

use super::conversions::{attribute_to_value, item_to_record, record_to_item};
use super::error::{
    map_delete_item_error, map_put_item_error, map_query_error, map_update_item_error,
};

/// DynamoDB-based record store.
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a store using the AWS SDK default credential chain.
    ///
    /// `endpoint_url` points the client at a local DynamoDB. `operation_timeout`
    /// bounds each SDK call including retries.
    pub async fn connect(
        table_name: &str,
        endpoint_url: Option<&str>,
        operation_timeout: Duration,
    ) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).timeout_config(
            TimeoutConfig::builder()
                .operation_timeout(operation_timeout)
                .build(),
        );
        if let Some(url) = endpoint_url {
            loader = loader.endpoint_url(url);
        }
        let config = loader.load().await;

        Self::new(Client::new(&config), table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl RecordStore for DynamoDbStore {
    async fn query(&self, partition: &str, sort: Option<&str>) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut start_key = None;

        loop {
            let mut request = self
                .client
                .query()
                .table_name(&self.table_name)
                .expression_attribute_values(":pk", AttributeValue::S(partition.to_string()))
                .set_exclusive_start_key(start_key.take());

            request = match sort {
                Some(sort) => request
                    .key_condition_expression(format!("{PARTITION_KEY} = :pk AND {SORT_KEY} = :sk"))
                    .expression_attribute_values(":sk", AttributeValue::S(sort.to_string())),
                None => request.key_condition_expression(format!("{PARTITION_KEY} = :pk")),
            };

            let output = request.send().await.map_err(map_query_error)?;

            for item in output.items.unwrap_or_default() {
                records.push(item_to_record(&item)?);
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(records)
    }

    async fn put(&self, record: Record) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(&record)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update(&self, partition: &str, sort: &str, mutation: Mutation) -> Result<Record> {
        let request = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(PARTITION_KEY, AttributeValue::S(partition.to_string()))
            .key(SORT_KEY, AttributeValue::S(sort.to_string()))
            // Never create a record that was deleted since it was read.
            .condition_expression(format!("attribute_exists({PARTITION_KEY})"))
            .return_values(ReturnValue::AllNew);

        let request = match &mutation {
            Mutation::Set { attribute, value } => request
                .update_expression("SET #attr = :value")
                .expression_attribute_names("#attr", attribute)
                .expression_attribute_values(":value", attribute_to_value(value)),
            Mutation::Remove { attribute } => request
                .update_expression("REMOVE #attr")
                .expression_attribute_names("#attr", attribute),
        };

        let output = request
            .send()
            .await
            .map_err(|e| map_update_item_error(e, "record", format!("{partition}/{sort}")))?;

        let attributes = output.attributes.ok_or_else(|| {
            RepositoryError::InvalidData("UpdateItem returned no attributes".to_string())
        })?;
        item_to_record(&attributes)
    }

    async fn delete(&self, partition: &str, sort: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(PARTITION_KEY, AttributeValue::S(partition.to_string()))
            .key(SORT_KEY, AttributeValue::S(sort.to_string()))
            .return_values(ReturnValue::None)
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
