use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use service::catalog::domain::{ProductRequest, ProductResponse};
use service::catalog::repo::seaorm::SeaOrmProductRepository;
use service::catalog::CatalogService;

use crate::errors::JsonApiError;

/// Shared state handed to every product handler.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<CatalogService<SeaOrmProductRepository>>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct SearchQuery {
    pub name: Option<String>,
}

#[utoipa::path(
    get, path = "/products", tag = "products",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<ProductResponse>>, JsonApiError> {
    let products = state.catalog.get_all_products().await?;
    info!(count = products.len(), "list products");
    Ok(Json(products))
}

#[utoipa::path(
    post, path = "/products", tag = "products",
    request_body = crate::openapi::ProductRequestDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), JsonApiError> {
    let created = state.catalog.create_product(input).await?;
    info!(id = created.id, name = %created.name, "created product");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>, JsonApiError> {
    let product = state.catalog.get_product_by_id(id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    put, path = "/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = crate::openapi::ProductRequestDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<ProductRequest>,
) -> Result<Json<ProductResponse>, JsonApiError> {
    let updated = state.catalog.update_product(id, input).await?;
    info!(id = updated.id, "updated product");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, JsonApiError> {
    state.catalog.delete_product(id).await?;
    info!(id, "deleted product");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/products/search", tag = "products",
    params(SearchQuery),
    responses(
        (status = 200, description = "Search OK"),
        (status = 500, description = "Search Failed")
    )
)]
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<ProductResponse>>, JsonApiError> {
    let products = state.catalog.search_products_by_name(query.name.as_deref()).await?;
    info!(count = products.len(), "search products");
    Ok(Json(products))
}
