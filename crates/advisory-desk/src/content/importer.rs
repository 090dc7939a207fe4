use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

use super::domain::Notice;

/// Error raised while importing a notices CSV export.
#[derive(Debug, thiserror::Error)]
pub enum NoticeImportError {
    #[error("failed to read notices export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid notices CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: '{value}' is not a recognized publication date")]
    InvalidDate { row: usize, value: String },
}

/// Imports notices from the CSV export the hosted content table produces.
///
/// Expected header: `Id,Title,Published On,Summary,Source Link`. Publication
/// dates may be RFC 3339 timestamps or bare `YYYY-MM-DD` dates; a blank
/// source link becomes `None`.
pub struct NoticeCsvImporter;

impl NoticeCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Notice>, NoticeImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Notice>, NoticeImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut notices = Vec::new();

        for (index, record) in csv_reader.deserialize::<NoticeRow>().enumerate() {
            let row = record?;
            let published_on =
                parse_date(&row.published_on).ok_or_else(|| NoticeImportError::InvalidDate {
                    row: index + 1,
                    value: row.published_on.clone(),
                })?;

            notices.push(Notice {
                id: row.id,
                title: row.title,
                published_on,
                summary: row.summary,
                source_link: row.source_link,
            });
        }

        Ok(notices)
    }
}

#[derive(Debug, Deserialize)]
struct NoticeRow {
    #[serde(rename = "Id")]
    id: u64,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Published On")]
    published_on: String,
    #[serde(rename = "Summary", default)]
    summary: String,
    #[serde(
        rename = "Source Link",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    source_link: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}
