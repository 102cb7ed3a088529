use serde::Serialize;
use serde_json::Number;

use crate::domain::Receipt;

const RECEIPT_STATUS: &str = "ok";

/// JSON body returned by `POST /donate`.
#[derive(Clone, Debug, Serialize)]
pub struct ReceiptDto {
    pub status: &'static str,
    pub receipt_id: String,
    pub name: String,
    pub amount: Number,
    pub message: String,
    pub timestamp: String,
}

impl From<Receipt> for ReceiptDto {
    fn from(receipt: Receipt) -> Self {
        Self {
            status: RECEIPT_STATUS,
            receipt_id: receipt.id.into_string(),
            name: receipt.name,
            amount: receipt.amount.into_number(),
            message: receipt.message,
            // ISO-8601 with microseconds and a literal `Z`.
            timestamp: receipt
                .issued_at
                .format("%Y-%m-%dT%H:%M:%S%.6fZ")
                .to_string(),
        }
    }
}

/// Error body shared by every non-2xx JSON response.
#[derive(Clone, Debug, Serialize)]
pub struct ErrorDto {
    pub detail: String,
}
