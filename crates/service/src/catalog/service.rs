use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{ProductRequest, ProductResponse};
use super::repository::ProductRepository;
use super::{mapper, validator};
use crate::errors::ServiceError;

/// Catalog business service independent of the web framework.
///
/// Orchestrates validation, mapping and persistence, and enforces existence
/// before update and delete. Holds no entity state across calls; the
/// repository owns the canonical records. Concurrent updates of the same id
/// are last-write-wins.
pub struct CatalogService<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> CatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get_all_products(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.repo.find_all().await?;
        Ok(mapper::to_response_list(products))
    }

    pub async fn get_product_by_id(&self, id: i64) -> Result<ProductResponse, ServiceError> {
        let product = self.repo.find_by_id(id).await?.ok_or(ServiceError::NotFound(id))?;
        Ok(mapper::to_response(product))
    }

    /// Rejects with the full violation list before anything is written.
    #[instrument(skip(self, request))]
    pub async fn create_product(
        &self,
        request: ProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let violations = validator::validate(&request);
        if !violations.is_empty() {
            return Err(ServiceError::Validation(violations));
        }
        let saved = self.repo.save(mapper::to_entity(&request)).await?;
        info!(id = saved.id, name = %saved.name, "product created");
        Ok(mapper::to_response(saved))
    }

    /// Existence is checked before validation, so a missing id reports
    /// NotFound even for an invalid request. On success every mutable field
    /// is overwritten from the request; the id is preserved.
    #[instrument(skip(self, request))]
    pub async fn update_product(
        &self,
        id: i64,
        request: ProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let existing = self.repo.find_by_id(id).await?.ok_or(ServiceError::NotFound(id))?;
        let violations = validator::validate(&request);
        if !violations.is_empty() {
            return Err(ServiceError::Validation(violations));
        }
        let saved = self
            .repo
            .save(mapper::update_entity_from_request(&request, existing))
            .await?;
        info!(id = saved.id, "product updated");
        Ok(mapper::to_response(saved))
    }

    /// Existence is checked first, and the removal count is re-checked so a
    /// concurrent delete of the same id cannot also report success.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(ServiceError::NotFound(id));
        }
        if self.repo.delete_by_id(id).await? == 0 {
            return Err(ServiceError::NotFound(id));
        }
        info!(id, "product deleted");
        Ok(())
    }

    /// A missing or blank name behaves exactly like `get_all_products`, so
    /// the repository never sees a blank substring.
    pub async fn search_products_by_name(
        &self,
        name: Option<&str>,
    ) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = match name {
            Some(n) if !n.trim().is_empty() => {
                self.repo.find_by_name_containing_ignore_case(n).await?
            }
            _ => self.repo.find_all().await?,
        };
        Ok(mapper::to_response_list(products))
    }
}
