//! Vacation booking management core
//!
//! Business-rule layer for a small vacation-booking system: credential
//! validation, vacation listing rules, like invariants, and a session-scoped
//! access gate, all over an injected storage collaborator. The presentation
//! layer drives [`facade::BookingFacade`] and owns the [`models::Session`]
//! value; persistence is provided by [`repositories::PgStorage`] or any other
//! [`storage::Storage`] implementation.

pub mod error;
pub mod facade;
pub mod likes;
pub mod models;
pub mod password;
pub mod repositories;
pub mod storage;
pub mod vacations;
pub mod validation;
