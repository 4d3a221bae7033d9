//! Catalog module: domain shapes, validation, mapping, the repository
//! contract and the service orchestrating them.

pub mod domain;
pub mod mapper;
pub mod repo;
pub mod repository;
pub mod service;
pub mod validator;

pub use service::CatalogService;
