use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::value_objects::{
    invoice_form::{InvoiceFieldUpdate, NewInvoiceRecord},
    invoices::{InvoiceForForm, InvoiceListRow},
};

#[async_trait]
#[automock]
pub trait InvoiceRepository {
    async fn create_invoice(&self, record: NewInvoiceRecord) -> Result<Uuid>;
    async fn update_invoice(&self, invoice_id: Uuid, changes: InvoiceFieldUpdate) -> Result<()>;
    /// Returns the number of rows removed; deleting a missing id is not an
    /// error.
    async fn delete_invoice(&self, invoice_id: Uuid) -> Result<usize>;
    async fn find_for_edit_form(&self, invoice_id: Uuid) -> Result<Option<InvoiceForForm>>;
    async fn list_invoices(
        &self,
        search: Option<String>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<InvoiceListRow>>;
}
