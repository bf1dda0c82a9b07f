pub mod app;
pub mod domain;
pub mod error;
pub mod infra;

pub use error::AppError;
pub use infra::{connect, DbConfig, DbPool};
