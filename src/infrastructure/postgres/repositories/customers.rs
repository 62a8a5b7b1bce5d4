use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;

use crate::{
    domain::{
        entities::customers::CustomerEntity, repositories::customers::CustomerRepository,
        value_objects::invoices::CustomerField,
    },
    infrastructure::postgres::{postgres_connection::PgPool, schema::customers},
};

pub struct CustomerPostgres {
    db_pool: Arc<PgPool>,
}

impl CustomerPostgres {
    pub fn new(db_pool: Arc<PgPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl CustomerRepository for CustomerPostgres {
    async fn list_customer_fields(&self) -> Result<Vec<CustomerField>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = customers::table
            .order(customers::name.asc())
            .load::<CustomerEntity>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|entity| CustomerField {
                id: entity.id,
                name: entity.name,
            })
            .collect())
    }
}
