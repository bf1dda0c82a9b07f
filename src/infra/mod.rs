//! Infrastructure: SQLite connection, migrations, statement builders.

pub mod db;
pub(crate) mod sql;

pub(crate) use db::get_connection;
pub use db::{connect, DbConfig, DbPool};
