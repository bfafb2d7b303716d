pub mod cli;
pub mod display;
pub mod error;
pub mod image;
pub mod raw;
pub mod summary;
pub mod types;

// Re-export the error type matched by callers
pub use error::ConvertError;
