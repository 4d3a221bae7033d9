use super::domain::{ProductRequest, Violation};

/// Check every field rule independently and collect all violations.
///
/// An empty result means the request is valid. Rules are never short-circuited:
/// a request can violate the name, price and quantity rules at once and all
/// three are reported. Never touches storage. `description` is unconstrained.
pub fn validate(request: &ProductRequest) -> Vec<Violation> {
    let mut violations = Vec::new();

    match &request.name {
        Some(name) if !name.trim().is_empty() => {}
        _ => violations.push(Violation { field: "name", message: "name is required" }),
    }

    match request.price {
        None => violations.push(Violation { field: "price", message: "price is required" }),
        Some(price) if price <= 0.0 => {
            violations.push(Violation { field: "price", message: "price must be positive" })
        }
        Some(_) => {}
    }

    match request.quantity {
        None => violations.push(Violation { field: "quantity", message: "quantity is required" }),
        Some(quantity) if quantity < 0 => violations.push(Violation {
            field: "quantity",
            message: "quantity must be zero or positive",
        }),
        Some(_) => {}
    }

    violations
}
