use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use sea_orm::ActiveValue;
use tokio::sync::RwLock;

use models::product;

use crate::catalog::repository::ProductRepository;
use crate::errors::ServiceError;

/// In-memory repository over a `BTreeMap` keyed by id.
///
/// Ids come from a monotonic sequence starting at 1 and are never handed out
/// twice, so a deleted id stays retired just like a database sequence. Every
/// operation takes the lock once, making each call atomic on its own. Saving
/// with an id only overwrites a row that still exists; a vanished row is a Db
/// error, matching the UPDATE semantics of the SQL store.
pub struct InMemoryProductRepository {
    rows: RwLock<BTreeMap<i64, product::Model>>,
    next_id: AtomicI64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self { rows: RwLock::new(BTreeMap::new()), next_id: AtomicI64::new(1) }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn column<T>(value: ActiveValue<T>, name: &str) -> Result<T, ServiceError>
where
    T: Into<sea_orm::Value>,
{
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Ok(v),
        ActiveValue::NotSet => Err(ServiceError::Db(format!("missing value for column {name}"))),
    }
}

#[async_trait::async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<product::Model>, ServiceError> {
        let rows = self.rows.read().await;
        Ok(rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<product::Model>, ServiceError> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    async fn save(&self, entity: product::ActiveModel) -> Result<product::Model, ServiceError> {
        // Hold the write lock across the existence check and the insert
        let mut rows = self.rows.write().await;
        let id = match entity.id {
            ActiveValue::Set(v) | ActiveValue::Unchanged(v) => {
                if !rows.contains_key(&v) {
                    return Err(ServiceError::Db(format!("no row to update for id {v}")));
                }
                v
            }
            ActiveValue::NotSet => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        let model = product::Model {
            id,
            name: column(entity.name, "name")?,
            description: column(entity.description, "description")?,
            price: column(entity.price, "price")?,
            quantity: column(entity.quantity, "quantity")?,
        };
        rows.insert(id, model.clone());
        Ok(model)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let rows = self.rows.read().await;
        Ok(rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, ServiceError> {
        let mut rows = self.rows.write().await;
        Ok(if rows.remove(&id).is_some() { 1 } else { 0 })
    }

    async fn find_by_name_containing_ignore_case(
        &self,
        name: &str,
    ) -> Result<Vec<product::Model>, ServiceError> {
        let needle = name.to_lowercase();
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|m| m.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn find_by_price_less_than_equal(
        &self,
        price: f64,
    ) -> Result<Vec<product::Model>, ServiceError> {
        let rows = self.rows.read().await;
        Ok(rows.values().filter(|m| m.price <= price).cloned().collect())
    }

    async fn find_by_quantity_greater_than(
        &self,
        quantity: i32,
    ) -> Result<Vec<product::Model>, ServiceError> {
        let rows = self.rows.read().await;
        Ok(rows.values().filter(|m| m.quantity > quantity).cloned().collect())
    }
}
