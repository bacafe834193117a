use serde::Serialize;

/// Placeholder shown when a transaction party is absent from the explorer
/// response (e.g. a contract creation with no direct recipient).
pub const MISSING_ADDRESS: &str = "-";

/// A transaction detail record resolved from the explorer service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub hash: String,
    pub from: String,
    pub to: String,
    /// Amount in native coin, formatted with exactly 4 fractional digits
    /// ("0.0" when the explorer reported no value).
    pub value: String,
    /// Unix seconds, 0 if unknown.
    pub timestamp: u64,
}
