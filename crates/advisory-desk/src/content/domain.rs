use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One published notice as stored in the hosted content table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub published_on: NaiveDate,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_link: Option<String>,
}
