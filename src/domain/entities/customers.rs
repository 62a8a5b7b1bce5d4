use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::customers;

/// Customers are read-only from this service's perspective; invoices
/// reference them, nothing here creates or mutates them.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = customers)]
pub struct CustomerEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}
