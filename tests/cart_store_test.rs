use cart_store::{
    CartLine, CartSettings, CartStore, KeyValueStore, LocalStorage, MemoryStorage, Product,
    SnapshotPolicy, DEFAULT_STORAGE_KEY,
};
use std::sync::Arc;
use tempfile::TempDir;

fn shirt() -> Product {
    Product::new("p1", "Shirt", "u", 10.0)
}

fn settings_for(temp_dir: &TempDir) -> CartSettings {
    CartSettings {
        data_dir: temp_dir.path().to_str().unwrap().to_string(),
        ..CartSettings::default()
    }
}

async fn open(settings: &CartSettings) -> CartStore<LocalStorage> {
    CartStore::from_config(LocalStorage::new(&settings.data_dir), settings)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_add_to_empty_cart_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let store = open(&settings_for(&temp_dir)).await;

    let cart = store.add_to_cart(shirt()).await.unwrap();

    assert_eq!(
        cart.into_lines(),
        vec![CartLine {
            id: "p1".to_string(),
            title: "Shirt".to_string(),
            image_url: "u".to_string(),
            price: 10.0,
            quantity: 1,
        }]
    );
}

#[tokio::test]
async fn test_snapshot_survives_reload() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings_for(&temp_dir);

    let expected = {
        let store = open(&settings).await;
        store.add_to_cart(shirt()).await.unwrap();
        store
            .add_to_cart(Product::new("p2", "Hat", "https://img/hat.png", 5.5))
            .await
            .unwrap();
        store.increment("p2").await.unwrap();
        store.increment("p1").await.unwrap();
        store.decrement("p1").await.unwrap()
    };

    let reloaded = open(&settings).await;
    assert_eq!(reloaded.products(), expected);
    assert_eq!(reloaded.get("p2").unwrap().quantity, 2);

    let ids: Vec<String> = reloaded.products().into_lines().into_iter().map(|l| l.id).collect();
    assert_eq!(ids, vec!["p1", "p2"]);
}

#[tokio::test]
async fn test_file_holds_json_array_under_fixed_key() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings_for(&temp_dir);
    let store = open(&settings).await;

    store.add_to_cart(shirt()).await.unwrap();

    let storage = LocalStorage::new(&settings.data_dir);
    let raw = storage.get_item(DEFAULT_STORAGE_KEY).await.unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(json[0]["id"], "p1");
    assert_eq!(json[0]["image_url"], "u");
    assert_eq!(json[0]["quantity"], 1);
    assert!(storage.path_for(DEFAULT_STORAGE_KEY).exists());
}

#[tokio::test]
async fn test_decrement_from_two_and_from_one() {
    let storage = MemoryStorage::new();
    storage
        .set_item(
            DEFAULT_STORAGE_KEY,
            r#"[{"id":"p1","title":"Shirt","image_url":"u","price":10,"quantity":2}]"#,
        )
        .await
        .unwrap();
    let store = CartStore::load(storage, DEFAULT_STORAGE_KEY, SnapshotPolicy::Strict)
        .await
        .unwrap();

    assert_eq!(store.decrement("p1").await.unwrap().get("p1").unwrap().quantity, 1);
    assert_eq!(store.decrement("p1").await.unwrap().get("p1").unwrap().quantity, 1);
}

#[tokio::test]
async fn test_strict_load_rejects_invalid_snapshot_but_lenient_accepts() {
    let storage = MemoryStorage::new();
    storage
        .set_item(
            DEFAULT_STORAGE_KEY,
            r#"[{"id":"p1","title":"a","image_url":"u","price":1,"quantity":0}]"#,
        )
        .await
        .unwrap();

    assert!(
        CartStore::load(storage.clone(), DEFAULT_STORAGE_KEY, SnapshotPolicy::Strict)
            .await
            .is_err()
    );

    let store = CartStore::load(storage, DEFAULT_STORAGE_KEY, SnapshotPolicy::Lenient)
        .await
        .unwrap();
    assert_eq!(store.get("p1").unwrap().quantity, 0);
}

#[tokio::test]
async fn test_concurrent_mutations_do_not_lose_updates() {
    let storage = MemoryStorage::new();
    let store = Arc::new(
        CartStore::load(storage.clone(), DEFAULT_STORAGE_KEY, SnapshotPolicy::Strict)
            .await
            .unwrap(),
    );
    store.add_to_cart(shirt()).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..50 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            if i % 2 == 0 {
                store.increment("p1").await
            } else {
                store.add_to_cart(shirt()).await
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(store.get("p1").unwrap().quantity, 51);

    let reloaded = CartStore::load(storage, DEFAULT_STORAGE_KEY, SnapshotPolicy::Strict)
        .await
        .unwrap();
    assert_eq!(reloaded.products(), store.products());
}

#[tokio::test]
async fn test_custom_storage_key_is_isolated() {
    let storage = MemoryStorage::new();
    let a = CartStore::load(storage.clone(), "@Shop:a", SnapshotPolicy::Strict)
        .await
        .unwrap();
    a.add_to_cart(shirt()).await.unwrap();

    let b = CartStore::load(storage.clone(), "@Shop:b", SnapshotPolicy::Strict)
        .await
        .unwrap();
    assert!(b.products().is_empty());
    assert_eq!(storage.get_item(DEFAULT_STORAGE_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn test_infinite_price_never_reaches_disk() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings_for(&temp_dir);
    let store = open(&settings).await;

    let result = store
        .add_to_cart(Product::new("p1", "Shirt", "u", f64::INFINITY))
        .await;
    assert!(matches!(result, Err(cart_store::CartError::InvalidProductError { .. })));

    let storage = LocalStorage::new(&settings.data_dir);
    assert!(!storage.path_for(DEFAULT_STORAGE_KEY).exists());

    store.add_to_cart(shirt()).await.unwrap();
    let reloaded = open(&settings).await;
    assert_eq!(reloaded.products(), store.products());
}
