use anyhow::Context;
use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::value_objects::invoice_form::{InvoiceFieldUpdate, NewInvoiceRecord};
use crate::infrastructure::postgres::schema::invoices;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = invoices)]
pub struct InvoiceEntity {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount_cents: i32,
    pub status: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = invoices)]
pub struct InsertInvoiceEntity {
    pub customer_id: Uuid,
    pub amount_cents: i32,
    pub status: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = invoices)]
pub struct UpdateInvoiceEntity {
    pub customer_id: Uuid,
    pub amount_cents: i32,
    pub status: String,
}

// The form carries the customer reference as a string; it only becomes a
// typed id at the storage boundary, so a bogus reference surfaces as a
// persistence failure.
impl TryFrom<NewInvoiceRecord> for InsertInvoiceEntity {
    type Error = anyhow::Error;

    fn try_from(record: NewInvoiceRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            customer_id: Uuid::parse_str(&record.customer_id)
                .context("invoice customer reference is not a valid id")?,
            amount_cents: record.amount_cents,
            status: record.status.to_string(),
            date: record.date,
        })
    }
}

impl TryFrom<InvoiceFieldUpdate> for UpdateInvoiceEntity {
    type Error = anyhow::Error;

    fn try_from(changes: InvoiceFieldUpdate) -> Result<Self, Self::Error> {
        Ok(Self {
            customer_id: Uuid::parse_str(&changes.customer_id)
                .context("invoice customer reference is not a valid id")?,
            amount_cents: changes.amount_cents,
            status: changes.status.to_string(),
        })
    }
}
