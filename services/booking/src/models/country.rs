//! Country reference data model

use serde::{Deserialize, Serialize};

/// Country entity, read-only reference data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub country_id: i32,
    pub country_name: String,
}
