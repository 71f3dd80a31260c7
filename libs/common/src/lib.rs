//! Common library for the vacation booking system
//!
//! This crate provides the infrastructure shared by the booking service:
//! PostgreSQL connection pooling, configuration, and database error types.

pub mod database;
pub mod error;
