//! Wire envelopes for non-schema API responses.

use serde::{Deserialize, Serialize};

use crate::models::record::RecordInstance;

/// Generic message envelope returned by mutating operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Paginated row listing.
///
/// The backend's list responses carry `count`/`count_filtered`/`rows`, but
/// some deployments return a bare JSON array; both shapes parse.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RowListResponse {
    pub count: u64,
    pub count_filtered: u64,
    pub rows: Vec<RecordInstance>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RowListWire {
    Envelope {
        #[serde(default)]
        count: Option<u64>,
        #[serde(default)]
        count_filtered: Option<u64>,
        #[serde(default)]
        rows: Vec<RecordInstance>,
    },
    Bare(Vec<RecordInstance>),
}

impl<'de> Deserialize<'de> for RowListResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wire = RowListWire::deserialize(deserializer)?;
        Ok(match wire {
            RowListWire::Envelope {
                count,
                count_filtered,
                rows,
            } => {
                let len = rows.len() as u64;
                Self {
                    count: count.unwrap_or(len),
                    count_filtered: count_filtered.unwrap_or(len),
                    rows,
                }
            }
            RowListWire::Bare(rows) => {
                let len = rows.len() as u64;
                Self {
                    count: len,
                    count_filtered: len,
                    rows,
                }
            }
        })
    }
}
