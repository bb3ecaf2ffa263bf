//! End-to-end admin flow over the in-memory store: live catalog cache,
//! filtered view, bulk deletion, and admin gating.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use serde_json::json;

use menu_admin::auth::{AdminGate, AuthUser, IdentityProvider};
use menu_admin::catalog::{CatalogService, CatalogView, ItemEditor, SortKey};
use menu_admin::store::{
    BlobStore, DocPath, DocumentStore, MENU_COLLECTION, MemoryBlobStore, MemoryIdentity,
    MemoryStore,
};
use shared::models::{ItemPatch, LocalizedText};

async fn settle() {
    // Let the subscription task observe the latest push
    tokio::time::sleep(Duration::from_millis(20)).await;
}

fn patch(name: &str, category: &str, price: f64) -> ItemPatch {
    ItemPatch {
        name: Some(LocalizedText::new(name)),
        category: Some(category.to_string()),
        price: Some(price),
        ..Default::default()
    }
}

#[tokio::test]
async fn catalog_edit_and_bulk_delete_flow() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let blobs = Arc::new(MemoryBlobStore::new());
    let editor = ItemEditor::new(store.clone(), blobs.clone());
    let service = CatalogService::start(store.clone());

    // Seed the menu through the reconciliation unit
    let borsch = editor
        .save(None, patch("Борщ", "Супы", 45.0), Some(vec![0xFF]))
        .await?;
    editor.save(None, patch("Окрошка", "Супы", 40.0), None).await?;
    editor.save(None, patch("Цезарь", "Салаты", 80.0), None).await?;
    settle().await;

    // The standing subscription filled the cache without a refresh
    let mut view = CatalogView::new(2);
    view.set_items(service.snapshot());
    assert_eq!(view.page().total, 3);

    // Category filter narrows the derived view
    view.set_category_filter("Супы");
    view.set_sort(SortKey::PriceAsc);
    let page = view.page();
    assert_eq!(page.total, 2);
    assert_eq!(page.data[0].name.ru, "Окрошка");

    // Select the visible page and bulk delete it
    view.select_visible();
    assert_eq!(view.selected_count(), 2);
    let deleted = editor.delete_many(view.selected_ids()).await;
    assert_eq!(deleted, 2);
    view.clear_selection();
    settle().await;

    view.set_items(service.snapshot());
    view.set_category_filter("");
    let page = view.page();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].name.ru, "Цезарь");
    assert_eq!(view.selected_count(), 0);

    // The deleted item's image blob went with it
    let image_path = borsch.image.expect("image was uploaded");
    assert!(blobs.download_url(&image_path).await.is_err());

    Ok(())
}

#[tokio::test]
async fn remote_change_reaches_view_without_refresh() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let service = CatalogService::start(store.clone());

    // Another session writes directly to the store
    store
        .set(
            &DocPath::new(MENU_COLLECTION, "m-remote"),
            json!({ "name": "Плацинда", "category": "Выпечка", "price": 25 }),
            true,
        )
        .await?;
    settle().await;

    let items = service.snapshot();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id.as_deref(), Some("m-remote"));
    assert!(items[0].active);

    Ok(())
}

#[tokio::test]
async fn allow_list_gates_admin_access() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    store
        .set(
            &DocPath::settings("admin"),
            json!({ "ownerEmail": "owner@example.com, chef@example.com" }),
            true,
        )
        .await?;

    let identity = Arc::new(MemoryIdentity::new(AuthUser::new("chef@example.com")));
    let gate = AdminGate::new(identity.clone(), store.clone());

    // Signed out: no access
    assert!(!gate.is_admin().await);

    identity.sign_in().await?;
    assert!(gate.is_admin().await);

    identity.sign_out().await?;
    assert!(!gate.is_admin().await);

    // An unknown account never gates in
    let stranger = Arc::new(MemoryIdentity::new(AuthUser::new("guest@example.com")));
    stranger.sign_in().await?;
    let gate = AdminGate::new(stranger, store);
    assert!(!gate.is_admin().await);

    Ok(())
}
