use nowa_common::{units, Transaction, MISSING_ADDRESS};
use serde::Deserialize;

/// A transaction as served by `GET /v2/transactions/{hash}`.
///
/// Everything except the hash is optional on the wire; absent parties,
/// values, and timestamps default-fill instead of failing (a contract
/// creation, for instance, has no `to` but carries `created_contract`).
#[derive(Debug, Deserialize)]
pub struct TransactionPayload {
    pub hash: String,
    #[serde(default)]
    pub from: Option<AddressParty>,
    #[serde(default)]
    pub to: Option<AddressParty>,
    #[serde(default)]
    pub created_contract: Option<AddressParty>,
    /// Raw wei amount as a decimal string.
    #[serde(default)]
    pub value: Option<String>,
    /// ISO-8601.
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddressParty {
    pub hash: String,
}

impl From<TransactionPayload> for Transaction {
    fn from(payload: TransactionPayload) -> Self {
        Transaction {
            hash: payload.hash,
            from: payload
                .from
                .map(|party| party.hash)
                .unwrap_or_else(|| MISSING_ADDRESS.to_string()),
            to: payload
                .to
                .or(payload.created_contract)
                .map(|party| party.hash)
                .unwrap_or_else(|| MISSING_ADDRESS.to_string()),
            value: units::wei_to_coin(payload.value.as_deref()),
            timestamp: units::iso_to_unix_seconds(payload.timestamp.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_payload_normalizes() {
        let payload: TransactionPayload = serde_json::from_value(json!({
            "hash": "0xtx",
            "from": { "hash": "0xfrom" },
            "to": { "hash": "0xto" },
            "value": "1000000000000000000",
            "timestamp": "2024-01-01T00:00:00Z",
        }))
        .unwrap();
        let tx = Transaction::from(payload);
        assert_eq!(tx.hash, "0xtx");
        assert_eq!(tx.from, "0xfrom");
        assert_eq!(tx.to, "0xto");
        assert_eq!(tx.value, "1.0000");
        assert_eq!(tx.timestamp, 1704067200);
    }

    #[test]
    fn contract_creation_falls_back_to_created_contract() {
        let payload: TransactionPayload = serde_json::from_value(json!({
            "hash": "0xtx",
            "from": { "hash": "0xfrom" },
            "created_contract": { "hash": "0xcontract" },
        }))
        .unwrap();
        let tx = Transaction::from(payload);
        assert_eq!(tx.to, "0xcontract");
        assert_eq!(tx.value, "0.0");
        assert_eq!(tx.timestamp, 0);
    }

    #[test]
    fn bare_hash_default_fills_everything() {
        let payload: TransactionPayload =
            serde_json::from_value(json!({ "hash": "0xtx" })).unwrap();
        let tx = Transaction::from(payload);
        assert_eq!(tx.from, MISSING_ADDRESS);
        assert_eq!(tx.to, MISSING_ADDRESS);
        assert_eq!(tx.value, "0.0");
        assert_eq!(tx.timestamp, 0);
    }
}
