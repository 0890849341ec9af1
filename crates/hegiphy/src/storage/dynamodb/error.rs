//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `hegiphy_core::storage`.
//! Requests DynamoDB refuses as malformed surface as `InvalidData`. Other
//! service faults, throttling and transport failures surface as
//! `Unavailable`. A failed existence condition on update is `NotFound`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use hegiphy_core::storage::RepositoryError;

fn unavailable(message: impl Into<String>) -> RepositoryError {
    let message = message.into();
    tracing::error!(error = %message, "DynamoDB call failed");
    RepositoryError::Unavailable(message)
}

/// A request DynamoDB rejected as malformed. Retrying cannot succeed.
fn rejected<E: ProvideErrorMetadata>(err: &E) -> Option<RepositoryError> {
    if err.code() != Some("ValidationException") {
        return None;
    }
    let message = err.message().unwrap_or("request rejected").to_string();
    tracing::error!(error = %message, "DynamoDB rejected request");
    Some(RepositoryError::InvalidData(message))
}

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    let err = err.into_service_error();
    if let Some(error) = rejected(&err) {
        return error;
    }
    match err {
        QueryError::ResourceNotFoundException(_) => unavailable("Table not found"),
        QueryError::ProvisionedThroughputExceededException(_) => {
            unavailable("Throughput exceeded, please retry")
        }
        QueryError::RequestLimitExceeded(_) => unavailable("Request limit exceeded, please retry"),
        QueryError::InternalServerError(_) => unavailable("DynamoDB internal server error"),
        err => unavailable(format!("Query failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    let err = err.into_service_error();
    if let Some(error) = rejected(&err) {
        return error;
    }
    match err {
        PutItemError::ResourceNotFoundException(_) => unavailable("Table not found"),
        PutItemError::ProvisionedThroughputExceededException(_) => {
            unavailable("Throughput exceeded, please retry")
        }
        PutItemError::RequestLimitExceeded(_) => {
            unavailable("Request limit exceeded, please retry")
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            unavailable("Item collection size limit exceeded")
        }
        PutItemError::TransactionConflictException(_) => {
            unavailable("Transaction conflict, please retry")
        }
        PutItemError::InternalServerError(_) => unavailable("DynamoDB internal server error"),
        err => unavailable(format!("PutItem failed: {:?}", err)),
    }
}

/// Map an UpdateItem SDK error to RepositoryError.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    let err = err.into_service_error();
    if let Some(error) = rejected(&err) {
        return error;
    }
    match err {
        UpdateItemError::ConditionalCheckFailedException(_) => RepositoryError::NotFound {
            entity_type,
            id: id.into(),
        },
        UpdateItemError::ResourceNotFoundException(_) => unavailable("Table not found"),
        UpdateItemError::ProvisionedThroughputExceededException(_) => {
            unavailable("Throughput exceeded, please retry")
        }
        UpdateItemError::RequestLimitExceeded(_) => {
            unavailable("Request limit exceeded, please retry")
        }
        UpdateItemError::ItemCollectionSizeLimitExceededException(_) => {
            unavailable("Item collection size limit exceeded")
        }
        UpdateItemError::TransactionConflictException(_) => {
            unavailable("Transaction conflict, please retry")
        }
        UpdateItemError::InternalServerError(_) => unavailable("DynamoDB internal server error"),
        err => unavailable(format!("UpdateItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> RepositoryError {
    let err = err.into_service_error();
    if let Some(error) = rejected(&err) {
        return error;
    }
    match err {
        DeleteItemError::ResourceNotFoundException(_) => unavailable("Table not found"),
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            unavailable("Throughput exceeded, please retry")
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            unavailable("Request limit exceeded, please retry")
        }
        DeleteItemError::ItemCollectionSizeLimitExceededException(_) => {
            unavailable("Item collection size limit exceeded")
        }
        DeleteItemError::TransactionConflictException(_) => {
            unavailable("Transaction conflict, please retry")
        }
        DeleteItemError::InternalServerError(_) => unavailable("DynamoDB internal server error"),
        err => unavailable(format!("DeleteItem failed: {:?}", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::error::ErrorMetadata;
    use aws_sdk_dynamodb::types::error::ConditionalCheckFailedException;

    fn metadata(code: &str) -> ErrorMetadata {
        ErrorMetadata::builder()
            .code(code)
            .message("One or more parameter values were invalid")
            .build()
    }

    #[test]
    fn test_validation_exception_is_invalid_data() {
        let put = SdkError::<PutItemError, ()>::service_error(
            PutItemError::generic(metadata("ValidationException")),
            (),
        );
        let query = SdkError::<QueryError, ()>::service_error(
            QueryError::generic(metadata("ValidationException")),
            (),
        );

        assert_eq!(
            map_put_item_error(put),
            RepositoryError::InvalidData("One or more parameter values were invalid".to_string())
        );
        assert!(matches!(
            map_query_error(query),
            RepositoryError::InvalidData(_)
        ));
    }

    #[test]
    fn test_other_service_errors_are_unavailable() {
        let delete = SdkError::<DeleteItemError, ()>::service_error(
            DeleteItemError::generic(metadata("ServiceUnavailable")),
            (),
        );

        assert!(matches!(
            map_delete_item_error(delete),
            RepositoryError::Unavailable(_)
        ));
    }

    #[test]
    fn test_failed_condition_is_not_found() {
        let update = SdkError::<UpdateItemError, ()>::service_error(
            UpdateItemError::ConditionalCheckFailedException(
                ConditionalCheckFailedException::builder().build(),
            ),
            (),
        );

        assert_eq!(
            map_update_item_error(update, "favorite", "g1"),
            RepositoryError::NotFound {
                entity_type: "favorite",
                id: "g1".to_string(),
            }
        );
    }
}
