mod error;
mod operations;
mod requests;
mod types;

pub use error::ValidationError;
pub use operations::{filter_by_tag, insert_tag, normalize_tag_filter, remove_tag, TagChange};
pub use requests::{
    validate_id, validate_tag, CreateFavorite, MAX_ID_BYTES, MAX_ID_LENGTH, MAX_TAG_LENGTH,
};
pub use types::Favorite;
