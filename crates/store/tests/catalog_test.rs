//! Integration tests for the client and product repositories.

use invoicer_core::billing::BillingRules;
use invoicer_core::client::{ClientFilter, CreateClientInput, UpdateClientInput};
use invoicer_core::product::{
    CreateProductInput, ProductFilter, ProductSort, ProductUnit, UpdateProductInput,
};
use invoicer_shared::types::{ClientId, ProductId};
use invoicer_store::{Store, StoreError};
use rust_decimal_macros::dec;

fn client_input(name: &str, email: &str) -> CreateClientInput {
    CreateClientInput {
        name: name.to_string(),
        email: email.to_string(),
        ..CreateClientInput::default()
    }
}

#[tokio::test]
async fn test_client_create_prepends_and_stamps() {
    let store = Store::empty(BillingRules::default());

    let first = store
        .clients
        .create(client_input("Acme Corp", "contact@acme.com"))
        .await
        .unwrap();
    let second = store
        .clients
        .create(client_input("Tech Solutions", "hello@techsolutions.com"))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(second.created_at, second.updated_at);

    let listed = store.clients.list(&ClientFilter::default()).await;
    let names: Vec<&str> = listed.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Tech Solutions", "Acme Corp"]);
}

#[tokio::test]
async fn test_client_create_rejects_missing_email() {
    let store = Store::empty(BillingRules::default());

    let result = store.clients.create(client_input("Acme Corp", "")).await;

    assert!(matches!(result, Err(StoreError::Client(_))));
    assert_eq!(store.clients.count().await, 0);
}

#[tokio::test]
async fn test_client_update_merges_supplied_fields() {
    let store = Store::empty(BillingRules::default());
    let created = store
        .clients
        .create(client_input("Acme Corp", "contact@acme.com"))
        .await
        .unwrap();

    let updated = store
        .clients
        .update(
            created.id,
            UpdateClientInput {
                phone: Some("+33 1 23 45 67 89".to_string()),
                ..UpdateClientInput::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.phone.as_deref(), Some("+33 1 23 45 67 89"));
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(store.clients.get(created.id).await, Some(updated));
}

#[tokio::test]
async fn test_client_update_and_delete_unknown_id() {
    let store = Store::empty(BillingRules::default());
    let id = ClientId::new();

    let update = store
        .clients
        .update(id, UpdateClientInput::default())
        .await;
    assert!(matches!(update, Err(StoreError::NotFound { kind: "client", .. })));

    let delete = store.clients.delete(id).await;
    assert!(matches!(delete, Err(StoreError::NotFound { .. })));
}

#[tokio::test]
async fn test_client_delete_removes_exactly_one() {
    let store = Store::empty(BillingRules::default());
    let keep = store
        .clients
        .create(client_input("Acme Corp", "contact@acme.com"))
        .await
        .unwrap();
    let removed = store
        .clients
        .create(client_input("Design Studio", "info@designstudio.fr"))
        .await
        .unwrap();

    store.clients.delete(removed.id).await.unwrap();

    assert!(store.clients.get(removed.id).await.is_none());
    assert_eq!(store.clients.get(keep.id).await, Some(keep));
    assert_eq!(store.clients.count().await, 1);
}

#[tokio::test]
async fn test_client_search() {
    let store = Store::empty(BillingRules::default());
    store
        .clients
        .create(CreateClientInput {
            contact_name: Some("Jean Dupont".to_string()),
            ..client_input("Acme Corp", "contact@acme.com")
        })
        .await
        .unwrap();
    store
        .clients
        .create(client_input("Tech Solutions", "hello@techsolutions.com"))
        .await
        .unwrap();

    let found = store.clients.list(&ClientFilter::search(Some("DUPONT"))).await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Acme Corp");
}

fn product_input(name: &str, price: rust_decimal::Decimal, category: &str) -> CreateProductInput {
    CreateProductInput {
        name: name.to_string(),
        description: format!("{name} sur mesure"),
        price,
        category: category.to_string(),
        unit: ProductUnit::Project,
        ..CreateProductInput::default()
    }
}

#[tokio::test]
async fn test_product_crud_and_listing() {
    let store = Store::empty(BillingRules::default());
    let site = store
        .products
        .create(product_input("Site web", dec!(2500), "Développement"))
        .await
        .unwrap();
    store
        .products
        .create(product_input("Logo", dec!(800), "Design"))
        .await
        .unwrap();

    let by_price = store
        .products
        .list(&ProductFilter::new(None, Some("all"), ProductSort::Price))
        .await;
    let names: Vec<&str> = by_price.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Logo", "Site web"]);

    let updated = store
        .products
        .update(
            site.id,
            UpdateProductInput {
                price: Some(dec!(2750)),
                ..UpdateProductInput::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, dec!(2750));

    assert_eq!(
        store.products.categories().await,
        vec!["Design".to_string(), "Développement".to_string()]
    );

    store.products.delete(site.id).await.unwrap();
    assert_eq!(store.products.count().await, 1);
}

#[tokio::test]
async fn test_product_validation_and_unknown_id() {
    let store = Store::empty(BillingRules::default());

    let negative = store
        .products
        .create(product_input("Remise", dec!(-10), "Autre"))
        .await;
    assert!(matches!(negative, Err(StoreError::Product(_))));

    assert!(store.products.get(ProductId::new()).await.is_none());
    assert!(matches!(
        store.products.delete(ProductId::new()).await,
        Err(StoreError::NotFound { kind: "product", .. })
    ));
}
