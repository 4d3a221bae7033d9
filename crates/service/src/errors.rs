use thiserror::Error;

use crate::catalog::domain::Violation;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("product not found with id: {0}")]
    NotFound(i64),
    #[error("validation failed: {}", summarize(.0))]
    Validation(Vec<Violation>),
    #[error("database error: {0}")]
    Db(String),
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_id() {
        let err = ServiceError::NotFound(42);
        assert_eq!(err.to_string(), "product not found with id: 42");
    }

    #[test]
    fn validation_lists_every_violation() {
        let err = ServiceError::Validation(vec![
            Violation { field: "name", message: "name is required" },
            Violation { field: "price", message: "price must be positive" },
        ]);
        let msg = err.to_string();
        assert!(msg.contains("name: name is required"));
        assert!(msg.contains("price: price must be positive"));
    }
}
