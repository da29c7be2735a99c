//! Repository trait implementations for the SQLite database.

use crate::Db;
use spimex_core::ports::Repository;

mod trading_result;

impl Repository for Db {
    type Error = sqlx::Error;
}
