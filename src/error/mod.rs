//! The unified error handling system for the application.

pub use types::AppError;

/// A unified `Result` type for the entire application.
pub type Result<T> = std::result::Result<T, AppError>;

pub mod macros;
pub mod types;

#[cfg(test)]
mod tests;
