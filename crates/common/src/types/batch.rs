use std::fmt;

use serde::{Deserialize, Serialize};

/// Verification status of a batch on the settlement layer.
///
/// The prover API reports the status as a numeric code, sometimes serialized
/// as a string. The mapping is total: any code outside {0, 1} is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Pending,
    Verified,
    Unknown,
}

impl BatchStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => BatchStatus::Pending,
            1 => BatchStatus::Verified,
            _ => BatchStatus::Unknown,
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchStatus::Pending => write!(f, "pending"),
            BatchStatus::Verified => write!(f, "verified"),
            BatchStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Status code as it appears on the wire: a number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawStatus {
    Number(i64),
    Text(String),
}

impl RawStatus {
    /// Normalizes the raw code. A numeric string maps exactly like its
    /// integer form; anything unparseable is `Unknown`.
    pub fn normalize(&self) -> BatchStatus {
        match self {
            RawStatus::Number(code) => BatchStatus::from_code(*code),
            RawStatus::Text(text) => text
                .trim()
                .parse::<i64>()
                .map(BatchStatus::from_code)
                .unwrap_or(BatchStatus::Unknown),
        }
    }
}

impl From<&RawStatus> for BatchStatus {
    fn from(raw: &RawStatus) -> Self {
        raw.normalize()
    }
}

/// A batch of transactions committed to the settlement layer.
///
/// Batches are immutable snapshots: a re-fetch produces a fresh value that
/// replaces the previous one wholesale, never a partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Batch {
    pub number: u64,
    pub batch_hash: String,
    /// Hash of the settlement-layer transaction that committed the batch.
    pub tx_hash: String,
    /// Unix seconds.
    pub timestamp: u64,
    pub new_state_root: String,
    pub submitter: Option<String>,
    pub status: BatchStatus,
    /// Hashes of the transactions aggregated in this batch.
    pub tx_hashes: Vec<String>,
}

/// One page of batches as returned by the paginated endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPage {
    pub batches: Vec<Batch>,
    /// Total number of batches known to the service.
    pub total: u64,
    pub total_pages: u64,
    /// Holds exactly when the requested page is below `total_pages`.
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_mapping_is_total() {
        assert_eq!(BatchStatus::from_code(0), BatchStatus::Pending);
        assert_eq!(BatchStatus::from_code(1), BatchStatus::Verified);
        assert_eq!(BatchStatus::from_code(2), BatchStatus::Unknown);
        assert_eq!(BatchStatus::from_code(-1), BatchStatus::Unknown);
        assert_eq!(BatchStatus::from_code(i64::MAX), BatchStatus::Unknown);
    }

    #[test]
    fn numeric_string_matches_integer_form() {
        for code in [-1i64, 0, 1, 2, 7, 100] {
            assert_eq!(
                RawStatus::Text(code.to_string()).normalize(),
                RawStatus::Number(code).normalize(),
                "string and integer status {code} must normalize identically",
            );
        }
    }

    #[test]
    fn junk_status_string_is_unknown() {
        for junk in ["", "verified", "0x1", "1.5", "one"] {
            assert_eq!(
                RawStatus::Text(junk.to_string()).normalize(),
                BatchStatus::Unknown,
            );
        }
    }

    #[test]
    fn raw_status_deserializes_from_number_and_string() {
        let from_number: RawStatus = serde_json::from_value(serde_json::json!(1)).unwrap();
        let from_string: RawStatus = serde_json::from_value(serde_json::json!("1")).unwrap();
        assert_eq!(from_number.normalize(), BatchStatus::Verified);
        assert_eq!(from_string.normalize(), BatchStatus::Verified);
    }

    #[test]
    fn status_renders_lowercase() {
        assert_eq!(BatchStatus::Pending.to_string(), "pending");
        assert_eq!(BatchStatus::Verified.to_string(), "verified");
        assert_eq!(BatchStatus::Unknown.to_string(), "unknown");
    }
}
