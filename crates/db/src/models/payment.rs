//! Payment record row and DTO.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::FromRow;

use estatenexus_core::model::PaymentRecord;
use estatenexus_core::types::{DbId, Timestamp};

use crate::models::decimal_to_f64;

/// A payment row from the `payment_records` table.
#[derive(Debug, Clone, FromRow)]
pub struct PaymentRow {
    pub id: DbId,
    pub site_id: DbId,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub method: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

impl PaymentRow {
    /// Map to the domain entity.
    pub fn into_payment(self) -> PaymentRecord {
        PaymentRecord {
            id: self.id,
            amount: decimal_to_f64(self.amount),
            date: self.date,
            method: self.method,
            notes: self.notes,
        }
    }
}

/// DTO for appending a payment to a site's ledger. Payments are immutable
/// once created; there is no update DTO.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayment {
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default = "default_method")]
    pub method: String,
    pub notes: Option<String>,
}

/// The payment form's default selection.
fn default_method() -> String {
    "Bank Transfer".to_string()
}
