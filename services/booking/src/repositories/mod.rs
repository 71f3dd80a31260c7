//! Storage implementations

pub mod postgres;

pub use postgres::PgStorage;
