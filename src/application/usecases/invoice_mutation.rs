use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    application::interfaces::view_cache::ListViewCache,
    domain::{
        repositories::{customers::CustomerRepository, invoices::InvoiceRepository},
        value_objects::{
            action_states::{MutationActionState, MutationOutcome},
            invoice_form::RawInvoiceForm,
            invoices::{CustomerField, InvoiceForForm, InvoiceListRow},
        },
    },
};

pub const CREATE_MISSING_FIELDS_MESSAGE: &str = "Missing fields. Failed to create invoice.";
pub const UPDATE_MISSING_FIELDS_MESSAGE: &str = "Missing fields. Failed to update invoice.";
pub const CREATE_DB_ERROR_MESSAGE: &str = "Database Error: failed to create invoice.";
pub const UPDATE_DB_ERROR_MESSAGE: &str = "Database Error: failed to update invoice.";

pub const LIST_PAGE_SIZE: i64 = 6;

/// Orchestrates invoice mutations: validate, sanitize, persist, invalidate
/// the list view, redirect. Redirects are values, never faults, so the
/// failure paths below cannot swallow one.
pub struct InvoiceMutationUseCase<I, C, V>
where
    I: InvoiceRepository + Send + Sync + 'static,
    C: CustomerRepository + Send + Sync + 'static,
    V: ListViewCache + 'static,
{
    invoice_repository: Arc<I>,
    customer_repository: Arc<C>,
    list_view_cache: Arc<V>,
    invoices_path: String,
}

impl<I, C, V> InvoiceMutationUseCase<I, C, V>
where
    I: InvoiceRepository + Send + Sync + 'static,
    C: CustomerRepository + Send + Sync + 'static,
    V: ListViewCache + 'static,
{
    pub fn new(
        invoice_repository: Arc<I>,
        customer_repository: Arc<C>,
        list_view_cache: Arc<V>,
        invoices_path: String,
    ) -> Self {
        Self {
            invoice_repository,
            customer_repository,
            list_view_cache,
            invoices_path,
        }
    }

    pub async fn create(&self, raw_form: RawInvoiceForm) -> MutationOutcome {
        let valid_form = match raw_form.validate() {
            Ok(valid_form) => valid_form,
            Err(field_errors) => {
                info!("invoice_mutation: create rejected by validation");
                return MutationOutcome::Rerender(MutationActionState::rejected(
                    raw_form,
                    field_errors,
                    CREATE_MISSING_FIELDS_MESSAGE,
                ));
            }
        };

        let record = valid_form.sanitize(Utc::now().date_naive());

        match self.invoice_repository.create_invoice(record).await {
            Ok(invoice_id) => {
                info!(%invoice_id, "invoice_mutation: invoice created");
                self.list_view_cache.mark_stale(&self.invoices_path);
                MutationOutcome::Redirect(self.invoices_path.clone())
            }
            Err(err) => {
                error!(db_error = ?err, "invoice_mutation: failed to create invoice");
                MutationOutcome::Rerender(MutationActionState::failed(
                    raw_form,
                    CREATE_DB_ERROR_MESSAGE,
                ))
            }
        }
    }

    pub async fn update(&self, invoice_id: Uuid, raw_form: RawInvoiceForm) -> MutationOutcome {
        let valid_form = match raw_form.validate() {
            Ok(valid_form) => valid_form,
            Err(field_errors) => {
                info!(%invoice_id, "invoice_mutation: update rejected by validation");
                return MutationOutcome::Rerender(MutationActionState::rejected(
                    raw_form,
                    field_errors,
                    UPDATE_MISSING_FIELDS_MESSAGE,
                ));
            }
        };

        let changes = valid_form.sanitize_update();

        match self.invoice_repository.update_invoice(invoice_id, changes).await {
            Ok(()) => {
                info!(%invoice_id, "invoice_mutation: invoice updated");
                self.list_view_cache.mark_stale(&self.invoices_path);
                MutationOutcome::Redirect(self.invoices_path.clone())
            }
            Err(err) => {
                error!(
                    %invoice_id,
                    db_error = ?err,
                    "invoice_mutation: failed to update invoice"
                );
                MutationOutcome::Rerender(MutationActionState::failed(
                    raw_form,
                    UPDATE_DB_ERROR_MESSAGE,
                ))
            }
        }
    }

    /// Deletion is fire-and-forget for the caller: failures are logged, and
    /// the list view reconciles on its next refresh.
    pub async fn delete(&self, invoice_id: Uuid) {
        match self.invoice_repository.delete_invoice(invoice_id).await {
            Ok(deleted) => {
                if deleted == 0 {
                    warn!(%invoice_id, "invoice_mutation: delete matched no invoice");
                } else {
                    info!(%invoice_id, "invoice_mutation: invoice deleted");
                }
                self.list_view_cache.mark_stale(&self.invoices_path);
            }
            Err(err) => {
                error!(
                    %invoice_id,
                    db_error = ?err,
                    "invoice_mutation: failed to delete invoice"
                );
            }
        }
    }

    /// Loads what the edit form needs. The invoice and the customer list
    /// are independent reads and run concurrently.
    pub async fn load_edit_form(
        &self,
        invoice_id: Uuid,
    ) -> Result<Option<(InvoiceForForm, Vec<CustomerField>)>> {
        let (invoice, customers) = tokio::join!(
            self.invoice_repository.find_for_edit_form(invoice_id),
            self.customer_repository.list_customer_fields(),
        );
        let customers = customers?;

        match invoice? {
            Some(invoice) => Ok(Some((invoice, customers))),
            None => {
                info!(%invoice_id, "invoice_mutation: edit form requested for missing invoice");
                Ok(None)
            }
        }
    }

    pub async fn list(&self, search: Option<String>, page: i64) -> Result<Vec<InvoiceListRow>> {
        let page = page.max(1);
        let offset = (page - 1) * LIST_PAGE_SIZE;

        self.invoice_repository
            .list_invoices(search, LIST_PAGE_SIZE, offset)
            .await
    }
}
