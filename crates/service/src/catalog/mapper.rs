use models::product;
use sea_orm::ActiveValue::{NotSet, Set};

use super::domain::{ProductRequest, ProductResponse};

/// Field-for-field projection of a persisted product, identifier included.
pub fn to_response(entity: product::Model) -> ProductResponse {
    ProductResponse {
        id: entity.id,
        name: entity.name,
        description: entity.description,
        price: entity.price,
        quantity: entity.quantity,
    }
}

/// Order-preserving element-wise projection.
pub fn to_response_list(entities: Vec<product::Model>) -> Vec<ProductResponse> {
    entities.into_iter().map(to_response).collect()
}

/// Build a fresh entity from a request; the id stays unassigned so the store
/// allocates one on save. The service validates before mapping, so the
/// numeric defaults below are never persisted.
pub fn to_entity(request: &ProductRequest) -> product::ActiveModel {
    product::ActiveModel {
        id: NotSet,
        name: Set(request.name.clone().unwrap_or_default()),
        description: Set(request.description.clone()),
        price: Set(request.price.unwrap_or_default()),
        quantity: Set(request.quantity.unwrap_or_default()),
    }
}

/// Overwrite every mutable field of an existing entity from the request,
/// keeping the identifier. This is a full replacement, not a patch: a request
/// without a description clears the stored one.
pub fn update_entity_from_request(
    request: &ProductRequest,
    existing: product::Model,
) -> product::ActiveModel {
    let mut entity: product::ActiveModel = existing.into();
    entity.name = Set(request.name.clone().unwrap_or_default());
    entity.description = Set(request.description.clone());
    entity.price = Set(request.price.unwrap_or_default());
    entity.quantity = Set(request.quantity.unwrap_or_default());
    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    fn laptop() -> product::Model {
        product::Model {
            id: 1,
            name: "Laptop".into(),
            description: Some("High-end laptop".into()),
            price: 999.99,
            quantity: 10,
        }
    }

    #[test]
    fn to_response_projects_every_field() {
        let response = to_response(laptop());
        assert_eq!(response.id, 1);
        assert_eq!(response.name, "Laptop");
        assert_eq!(response.description.as_deref(), Some("High-end laptop"));
        assert_eq!(response.price, 999.99);
        assert_eq!(response.quantity, 10);
    }

    #[test]
    fn to_response_list_preserves_order() {
        let second = product::Model { id: 2, name: "Mouse".into(), ..laptop() };
        let responses = to_response_list(vec![laptop(), second]);
        assert_eq!(responses.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn to_entity_leaves_id_unassigned() {
        let request = ProductRequest {
            name: Some("Laptop".into()),
            description: None,
            price: Some(999.99),
            quantity: Some(10),
        };
        let entity = to_entity(&request);
        assert!(matches!(entity.id, ActiveValue::NotSet));
        assert_eq!(entity.name, ActiveValue::Set("Laptop".into()));
        assert_eq!(entity.description, ActiveValue::Set(None));
    }

    #[test]
    fn update_keeps_id_and_replaces_all_fields() {
        let request = ProductRequest {
            name: Some("Laptop Pro".into()),
            description: None,
            price: Some(1299.99),
            quantity: Some(5),
        };
        let entity = update_entity_from_request(&request, laptop());
        assert_eq!(entity.id, ActiveValue::Unchanged(1));
        assert_eq!(entity.name, ActiveValue::Set("Laptop Pro".into()));
        // full replacement: absent description clears the stored one
        assert_eq!(entity.description, ActiveValue::Set(None));
        assert_eq!(entity.price, ActiveValue::Set(1299.99));
        assert_eq!(entity.quantity, ActiveValue::Set(5));
    }
}
