//! Service layer providing the catalog business operations on top of models.
//! - Separates business rules from data access behind a repository contract.
//! - Validation and request/entity/response mapping live here.
//! - Clear error types so callers handle NotFound and Validation explicitly.

pub mod catalog;
pub mod errors;
#[cfg(test)]
pub mod test_support;
