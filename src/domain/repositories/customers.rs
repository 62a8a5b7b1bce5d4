use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::invoices::CustomerField;

#[async_trait]
#[automock]
pub trait CustomerRepository {
    async fn list_customer_fields(&self) -> Result<Vec<CustomerField>>;
}
