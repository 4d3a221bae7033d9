use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use models::product::{self, Entity as Product};

use crate::catalog::repository::ProductRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation (Postgres).
///
/// Overwrite-by-id runs as a single UPDATE and delete as a single DELETE, so
/// each operation is atomic on its own; a vanished row surfaces as a Db error
/// instead of being resurrected.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_all(&self) -> Result<Vec<product::Model>, ServiceError> {
        Product::find()
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<product::Model>, ServiceError> {
        Product::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn save(&self, entity: product::ActiveModel) -> Result<product::Model, ServiceError> {
        let persisted = if matches!(entity.id, ActiveValue::NotSet) {
            entity.insert(&self.db).await
        } else {
            entity.update(&self.db).await
        };
        persisted.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let count = Product::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, ServiceError> {
        let res = Product::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected)
    }

    async fn find_by_name_containing_ignore_case(
        &self,
        name: &str,
    ) -> Result<Vec<product::Model>, ServiceError> {
        let pattern = format!("%{}%", name);
        Product::find()
            .filter(Expr::col(product::Column::Name).ilike(pattern))
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_price_less_than_equal(
        &self,
        price: f64,
    ) -> Result<Vec<product::Model>, ServiceError> {
        Product::find()
            .filter(product::Column::Price.lte(price))
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_quantity_greater_than(
        &self,
        quantity: i32,
    ) -> Result<Vec<product::Model>, ServiceError> {
        Product::find()
            .filter(product::Column::Quantity.gt(quantity))
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }
}
