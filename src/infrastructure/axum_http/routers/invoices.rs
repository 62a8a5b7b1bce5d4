use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, put},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    application::{
        interfaces::view_cache::ListViewCache, usecases::invoice_mutation::InvoiceMutationUseCase,
    },
    auth::AuthUser,
    config::config_model::DotEnvyConfig,
    domain::{
        repositories::{customers::CustomerRepository, invoices::InvoiceRepository},
        value_objects::{
            action_states::MutationOutcome,
            invoice_form::RawInvoiceForm,
            invoices::{CustomerField, InvoiceForForm},
        },
    },
    infrastructure::{
        axum_http::error_responses::AppError,
        postgres::{
            postgres_connection::PgPool,
            repositories::{customers::CustomerPostgres, invoices::InvoicePostgres},
        },
        view_cache::InProcessViewCache,
    },
};

pub fn routes(config: Arc<DotEnvyConfig>, db_pool: Arc<PgPool>) -> Router {
    let invoice_repository = InvoicePostgres::new(Arc::clone(&db_pool));
    let customer_repository = CustomerPostgres::new(Arc::clone(&db_pool));
    let list_view_cache = InProcessViewCache::new();
    let invoice_mutation_usecase = InvoiceMutationUseCase::new(
        Arc::new(invoice_repository),
        Arc::new(customer_repository),
        Arc::new(list_view_cache),
        config.routes.invoices_path.clone(),
    );

    Router::new()
        .route("/", get(list_invoices).post(create_invoice))
        .route("/:id", put(update_invoice).delete(delete_invoice))
        .route("/:id/edit-form", get(edit_form))
        .with_state(Arc::new(invoice_mutation_usecase))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub query: Option<String>,
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

#[derive(Debug, Serialize)]
pub struct EditFormData {
    pub invoice: InvoiceForForm,
    pub customers: Vec<CustomerField>,
}

pub async fn list_invoices<I, C, V>(
    State(invoice_mutation_usecase): State<Arc<InvoiceMutationUseCase<I, C, V>>>,
    _auth: AuthUser,
    Query(list_query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError>
where
    I: InvoiceRepository + Send + Sync + 'static,
    C: CustomerRepository + Send + Sync + 'static,
    V: ListViewCache + 'static,
{
    let rows = invoice_mutation_usecase
        .list(list_query.query, list_query.page)
        .await?;

    Ok(Json(rows))
}

pub async fn create_invoice<I, C, V>(
    State(invoice_mutation_usecase): State<Arc<InvoiceMutationUseCase<I, C, V>>>,
    _auth: AuthUser,
    Form(raw_form): Form<RawInvoiceForm>,
) -> impl IntoResponse
where
    I: InvoiceRepository + Send + Sync + 'static,
    C: CustomerRepository + Send + Sync + 'static,
    V: ListViewCache + 'static,
{
    mutation_response(invoice_mutation_usecase.create(raw_form).await)
}

pub async fn update_invoice<I, C, V>(
    State(invoice_mutation_usecase): State<Arc<InvoiceMutationUseCase<I, C, V>>>,
    _auth: AuthUser,
    Path(invoice_id): Path<Uuid>,
    Form(raw_form): Form<RawInvoiceForm>,
) -> impl IntoResponse
where
    I: InvoiceRepository + Send + Sync + 'static,
    C: CustomerRepository + Send + Sync + 'static,
    V: ListViewCache + 'static,
{
    mutation_response(invoice_mutation_usecase.update(invoice_id, raw_form).await)
}

pub async fn delete_invoice<I, C, V>(
    State(invoice_mutation_usecase): State<Arc<InvoiceMutationUseCase<I, C, V>>>,
    _auth: AuthUser,
    Path(invoice_id): Path<Uuid>,
) -> impl IntoResponse
where
    I: InvoiceRepository + Send + Sync + 'static,
    C: CustomerRepository + Send + Sync + 'static,
    V: ListViewCache + 'static,
{
    invoice_mutation_usecase.delete(invoice_id).await;
    StatusCode::NO_CONTENT
}

pub async fn edit_form<I, C, V>(
    State(invoice_mutation_usecase): State<Arc<InvoiceMutationUseCase<I, C, V>>>,
    _auth: AuthUser,
    Path(invoice_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    I: InvoiceRepository + Send + Sync + 'static,
    C: CustomerRepository + Send + Sync + 'static,
    V: ListViewCache + 'static,
{
    let (invoice, customers) = invoice_mutation_usecase
        .load_edit_form(invoice_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(EditFormData { invoice, customers }))
}

// A redirect outcome becomes a real 303; re-render outcomes carry the
// reconciled action state back to the form.
fn mutation_response(outcome: MutationOutcome) -> Response {
    match outcome {
        MutationOutcome::Redirect(path) => Redirect::to(&path).into_response(),
        MutationOutcome::Rerender(state) => {
            let status = match state
                .error
                .as_ref()
                .and_then(|feedback| feedback.field_errors.as_ref())
            {
                Some(_) => StatusCode::UNPROCESSABLE_ENTITY,
                None => StatusCode::INTERNAL_SERVER_ERROR,
            };

            (status, Json(state)).into_response()
        }
    }
}
