use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// Row for the invoice list view: invoice columns joined to the customer
/// the invoice references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceListRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub amount_cents: i32,
    pub status: String,
    pub date: NaiveDate,
}

/// The subset of invoice fields the edit form pre-populates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceForForm {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount_cents: i32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerField {
    pub id: Uuid,
    pub name: String,
}
