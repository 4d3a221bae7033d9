use serde::{Deserialize, Serialize};

/// Candidate product as submitted by a caller.
///
/// Carries no identifier. Every field is optional so the validator can report
/// missing required fields instead of failing at deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<i32>,
}

/// Read-only projection of a persisted product returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

/// A single field rule failure reported by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}
