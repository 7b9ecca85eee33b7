use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a bill was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Upi,
}

/// One line on a bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    /// Unit price.
    pub price: f64,
    /// `price * quantity`, rounded to two decimals.
    pub total: f64,
}

/// A sample point-of-sale transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Transaction {
    pub id: String,
    pub bill_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    pub discount: f64,
    pub gst_amount: f64,
    /// `subtotal - discount + gst_amount`, rounded to two decimals.
    pub total_amount: f64,
    pub payment_method: PaymentMethod,
    pub date: NaiveDateTime,
}
