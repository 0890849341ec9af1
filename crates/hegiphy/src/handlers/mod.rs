pub mod error;
pub mod favorites;
pub mod giphy;
pub mod health;

pub use error::AppError;
