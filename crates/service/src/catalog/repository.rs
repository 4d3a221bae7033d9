use async_trait::async_trait;
use models::product;

use crate::errors::ServiceError;

/// Storage contract for the product catalog.
///
/// The store owns the canonical copy of every product. `save` inserts and
/// assigns a fresh identifier when the active model carries none; when it
/// carries one it overwrites the stored record, and a record that no longer
/// exists is a `Db` error rather than a re-insert. `delete_by_id` reports the
/// number of rows removed instead of treating a missing record as an error;
/// interpreting zero is the caller's job. Scans and queries return rows in
/// primary-key order.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<product::Model>, ServiceError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<product::Model>, ServiceError>;

    async fn save(&self, entity: product::ActiveModel) -> Result<product::Model, ServiceError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError>;

    async fn delete_by_id(&self, id: i64) -> Result<u64, ServiceError>;

    /// Case-insensitive substring match on name. Callers decide the blank
    /// substring policy; the service never passes one.
    async fn find_by_name_containing_ignore_case(
        &self,
        name: &str,
    ) -> Result<Vec<product::Model>, ServiceError>;

    async fn find_by_price_less_than_equal(
        &self,
        price: f64,
    ) -> Result<Vec<product::Model>, ServiceError>;

    async fn find_by_quantity_greater_than(
        &self,
        quantity: i32,
    ) -> Result<Vec<product::Model>, ServiceError>;
}
