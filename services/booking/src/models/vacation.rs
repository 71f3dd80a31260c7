//! Vacation model and related payloads

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Vacation entity as read back from storage
///
/// `country_name` and `total_likes` are derived by the storage layer
/// (country join and like count); they are never written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vacation {
    pub vacation_id: i32,
    pub vacation_title: String,
    pub country: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: f64,
    pub img_url: Option<String>,
    pub country_name: String,
    pub total_likes: i64,
}

/// Vacation payload as received from the presentation layer
///
/// Fields arrive as raw strings and are validated before any use;
/// `img_url` is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewVacation {
    pub vacation_title: String,
    pub country: String,
    pub start_date: String,
    pub end_date: String,
    pub price: String,
    pub img_url: Option<String>,
}

/// Validated vacation insert/update payload
#[derive(Debug, Clone)]
pub struct VacationRecord {
    pub vacation_title: String,
    pub country: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: f64,
    pub img_url: Option<String>,
}
