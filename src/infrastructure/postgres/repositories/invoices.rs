use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::{OptionalExtension, RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::invoices::{InsertInvoiceEntity, InvoiceEntity, UpdateInvoiceEntity},
        repositories::invoices::InvoiceRepository,
        value_objects::{
            invoice_form::{InvoiceFieldUpdate, NewInvoiceRecord},
            invoices::{InvoiceForForm, InvoiceListRow},
        },
    },
    infrastructure::postgres::{
        postgres_connection::PgPool,
        schema::{customers, invoices},
    },
};

pub struct InvoicePostgres {
    db_pool: Arc<PgPool>,
}

impl InvoicePostgres {
    pub fn new(db_pool: Arc<PgPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl InvoiceRepository for InvoicePostgres {
    async fn create_invoice(&self, record: NewInvoiceRecord) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let entity = InsertInvoiceEntity::try_from(record)?;

        let invoice_id = insert_into(invoices::table)
            .values(&entity)
            .returning(invoices::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(invoice_id)
    }

    async fn update_invoice(&self, invoice_id: Uuid, changes: InvoiceFieldUpdate) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let changeset = UpdateInvoiceEntity::try_from(changes)?;

        update(invoices::table.filter(invoices::id.eq(invoice_id)))
            .set(&changeset)
            .execute(&mut conn)?;

        Ok(())
    }

    async fn delete_invoice(&self, invoice_id: Uuid) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(invoices::table.filter(invoices::id.eq(invoice_id)))
            .execute(&mut conn)?;

        Ok(deleted)
    }

    async fn find_for_edit_form(&self, invoice_id: Uuid) -> Result<Option<InvoiceForForm>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let invoice = invoices::table
            .filter(invoices::id.eq(invoice_id))
            .first::<InvoiceEntity>(&mut conn)
            .optional()?;

        Ok(invoice.map(|entity| InvoiceForForm {
            id: entity.id,
            customer_id: entity.customer_id,
            amount_cents: entity.amount_cents,
            status: entity.status,
        }))
    }

    async fn list_invoices(
        &self,
        search: Option<String>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<InvoiceListRow>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut query = invoices::table
            .inner_join(customers::table)
            .select((
                invoices::id,
                invoices::customer_id,
                customers::name,
                customers::email,
                customers::image_url,
                invoices::amount_cents,
                invoices::status,
                invoices::date,
            ))
            .into_boxed();

        if let Some(term) = search.filter(|term| !term.trim().is_empty()) {
            let pattern = format!("%{}%", term.trim());
            query = query.filter(
                customers::name
                    .ilike(pattern.clone())
                    .or(customers::email.ilike(pattern.clone()))
                    .or(invoices::status.ilike(pattern)),
            );
        }

        let rows = query
            .order(invoices::date.desc())
            .limit(limit)
            .offset(offset)
            .load::<(Uuid, Uuid, String, String, String, i32, String, NaiveDate)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(
                |(id, customer_id, name, email, image_url, amount_cents, status, date)| {
                    InvoiceListRow {
                        id,
                        customer_id,
                        name,
                        email,
                        image_url,
                        amount_cents,
                        status,
                        date,
                    }
                },
            )
            .collect())
    }
}
