use std::sync::Arc;
use storage_traits::StorageDynT;
use wallet_owner_core::{
    now_utc_micros, UniqueField, ValidationError, WalletOwner, WalletOwnerCandidate,
    WalletOwnerField, WalletOwnerInsert, WalletOwnerUpdate,
};
use wallet_owner_store::{Error, WalletOwnerFilter, WalletOwnerStorage, WalletOwnerStore};

/// This will run once at load time (i.e. presumably before main function is called).
#[ctor::ctor]
fn overall_init() {
    test_util::ctor_overall_init();
}

fn candidate(name: &str, id_card: &str, wallet_number: &str) -> WalletOwnerCandidate {
    WalletOwnerCandidate::default()
        .with_name(name)
        .with_id_card(id_card)
        .with_wallet_number(wallet_number)
}

async fn sqlite_pool() -> sqlx::SqlitePool {
    // Each connection to "sqlite::memory:" gets its own database, so the pool must have only one.
    sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("pass")
}

async fn sqlite_wallet_owner_storage() -> Arc<dyn WalletOwnerStorage> {
    let sqlite_pool = sqlite_pool().await;
    Arc::new(
        wallet_owner_storage_sqlite::WalletOwnerStorageSQLite::open_and_run_migrations(sqlite_pool)
            .await
            .expect("pass"),
    )
}

async fn sqlite_wallet_owner_store() -> WalletOwnerStore {
    WalletOwnerStore::new(sqlite_wallet_owner_storage().await)
}

fn mock_wallet_owner_storage() -> Arc<dyn WalletOwnerStorage> {
    Arc::new(wallet_owner_storage_mock::WalletOwnerStorageMock::new())
}

fn mock_wallet_owner_store() -> WalletOwnerStore {
    WalletOwnerStore::new(mock_wallet_owner_storage())
}

async fn test_create_list_and_search_impl(wallet_owner_store: WalletOwnerStore) {
    assert!(wallet_owner_store
        .get_all_wallet_owners(None)
        .await
        .expect("pass")
        .is_empty());

    let ali = wallet_owner_store
        .validate_and_add_wallet_owner(
            None,
            &candidate("Ali Hassan", "ID-100", "W-1").with_phone(Some("0912345678".to_string())),
        )
        .await
        .expect("pass");
    assert_eq!(ali.phone_o.as_deref(), Some("0912345678"));
    let sara = wallet_owner_store
        .validate_and_add_wallet_owner(None, &candidate("Sara", "ID-200", "W-2"))
        .await
        .expect("pass");
    assert_eq!(sara.phone_o, None);
    assert_ne!(ali.id, sara.id);

    // Newest first.
    let wallet_owner_v = wallet_owner_store
        .get_all_wallet_owners(None)
        .await
        .expect("pass");
    assert_eq!(wallet_owner_v, vec![sara.clone(), ali.clone()]);

    assert_eq!(
        wallet_owner_store
            .get_wallet_owner(None, &ali.id)
            .await
            .expect("pass"),
        Some(ali.clone())
    );
    assert_eq!(
        wallet_owner_store
            .get_wallet_owner(None, "no-such-id")
            .await
            .expect("pass"),
        None
    );

    // Case-insensitive substring match on any searchable field.
    let search = |query: &'static str| {
        let wallet_owner_store = wallet_owner_store.clone();
        async move {
            wallet_owner_store
                .search_wallet_owners(None, query)
                .await
                .expect("pass")
        }
    };
    assert_eq!(search("ali").await, vec![ali.clone()]);
    assert_eq!(search("id-").await, vec![sara.clone(), ali.clone()]);
    assert_eq!(search("w-2").await, vec![sara.clone()]);
    assert_eq!(search("0912").await, vec![ali.clone()]);
    assert!(search("nothing matches this").await.is_empty());
    // At the storage layer an empty query matches every record.
    assert_eq!(search("").await, vec![sara.clone(), ali.clone()]);
}

async fn test_unicode_search_impl(wallet_owner_store: WalletOwnerStore) {
    let elise = wallet_owner_store
        .validate_and_add_wallet_owner(None, &candidate("ÉLISE Мария", "ID-300", "W-3"))
        .await
        .expect("pass");
    let ali = wallet_owner_store
        .validate_and_add_wallet_owner(None, &candidate("Ali", "ИД-400", "W-4"))
        .await
        .expect("pass");

    let search = |query: &'static str| {
        let wallet_owner_store = wallet_owner_store.clone();
        async move {
            wallet_owner_store
                .search_wallet_owners(None, query)
                .await
                .expect("pass")
        }
    };
    assert_eq!(search("élise").await, vec![elise.clone()]);
    assert_eq!(search("Élise").await, vec![elise.clone()]);
    assert_eq!(search("мария").await, vec![elise.clone()]);
    assert_eq!(search("МАРИЯ").await, vec![elise.clone()]);
    assert_eq!(search("ид-4").await, vec![ali.clone()]);
    assert_eq!(search("").await, vec![ali.clone(), elise.clone()]);

    // Updates keep the searchable form in step with the record.
    let elise = wallet_owner_store
        .validate_and_update_wallet_owner(
            None,
            &elise.id,
            &WalletOwnerCandidate::default()
                .with_name("ΣΩΚΡΆΤΗΣ")
                .with_phone(Some("Ext-Ü".to_string())),
        )
        .await
        .expect("pass");
    assert_eq!(search("σωκρ").await, vec![elise.clone()]);
    assert_eq!(search("ext-ü").await, vec![elise.clone()]);
    assert!(search("мария").await.is_empty());
}

async fn test_duplicates_impl(wallet_owner_store: WalletOwnerStore) {
    let first = wallet_owner_store
        .validate_and_add_wallet_owner(None, &candidate("First", "ID-1", "W-1"))
        .await
        .expect("pass");

    match wallet_owner_store
        .validate_and_add_wallet_owner(None, &candidate("Second", "ID-1", "W-2"))
        .await
    {
        Err(Error::AlreadyExists(UniqueField::IdCard)) => {}
        other => panic!("expected duplicate ID card error, got {:?}", other),
    }
    match wallet_owner_store
        .validate_and_add_wallet_owner(None, &candidate("Second", "ID-2", "W-1"))
        .await
    {
        Err(Error::AlreadyExists(UniqueField::WalletNumber)) => {}
        other => panic!("expected duplicate wallet number error, got {:?}", other),
    }
    // When both collide, the ID card is reported.
    match wallet_owner_store
        .validate_and_add_wallet_owner(None, &candidate("Second", "ID-1", "W-1"))
        .await
    {
        Err(Error::AlreadyExists(UniqueField::IdCard)) => {}
        other => panic!("expected duplicate ID card error, got {:?}", other),
    }
    // Uniqueness is exact, not case-insensitive.
    wallet_owner_store
        .validate_and_add_wallet_owner(None, &candidate("Third", "id-1", "w-1"))
        .await
        .expect("pass");

    // Nothing was written by the rejected attempts.
    let wallet_owner_v = wallet_owner_store
        .get_all_wallet_owners(None)
        .await
        .expect("pass");
    assert_eq!(wallet_owner_v.len(), 2);
    assert_eq!(wallet_owner_v[1], first);
}

async fn test_validation_impl(wallet_owner_store: WalletOwnerStore) {
    match wallet_owner_store
        .validate_and_add_wallet_owner(
            None,
            &WalletOwnerCandidate::default().with_id_card("ID-1"),
        )
        .await
    {
        Err(Error::Validation(validation_error)) => {
            assert_eq!(validation_error, ValidationError::missing(WalletOwnerField::Name))
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(wallet_owner_store
        .get_all_wallet_owners(None)
        .await
        .expect("pass")
        .is_empty());
}

async fn test_update_impl(wallet_owner_store: WalletOwnerStore) {
    let ali = wallet_owner_store
        .validate_and_add_wallet_owner(
            None,
            &candidate("Ali", "ID-1", "W-1").with_phone(Some("0911".to_string())),
        )
        .await
        .expect("pass");
    let sara = wallet_owner_store
        .validate_and_add_wallet_owner(None, &candidate("Sara", "ID-2", "W-2"))
        .await
        .expect("pass");

    // Partial update leaves the other fields alone.
    let updated = wallet_owner_store
        .validate_and_update_wallet_owner(
            None,
            &ali.id,
            &WalletOwnerCandidate::default().with_name("Ali Hassan"),
        )
        .await
        .expect("pass");
    assert_eq!(updated.name, "Ali Hassan");
    assert_eq!(updated.id, ali.id);
    assert_eq!(updated.id_card, ali.id_card);
    assert_eq!(updated.wallet_number, ali.wallet_number);
    assert_eq!(updated.phone_o, ali.phone_o);
    assert_eq!(updated.created_at, ali.created_at);

    // Resubmitting a record's own ID card and wallet number is not a conflict.
    wallet_owner_store
        .validate_and_update_wallet_owner(
            None,
            &ali.id,
            &candidate("Ali Hassan", "ID-1", "W-1"),
        )
        .await
        .expect("pass");

    // Taking another record's ID card or wallet number is.
    match wallet_owner_store
        .validate_and_update_wallet_owner(
            None,
            &ali.id,
            &WalletOwnerCandidate::default().with_id_card("ID-2"),
        )
        .await
    {
        Err(Error::AlreadyExists(UniqueField::IdCard)) => {}
        other => panic!("expected duplicate ID card error, got {:?}", other),
    }
    match wallet_owner_store
        .validate_and_update_wallet_owner(
            None,
            &sara.id,
            &WalletOwnerCandidate::default().with_wallet_number("W-1"),
        )
        .await
    {
        Err(Error::AlreadyExists(UniqueField::WalletNumber)) => {}
        other => panic!("expected duplicate wallet number error, got {:?}", other),
    }

    // Explicit null clears the phone.
    let updated = wallet_owner_store
        .validate_and_update_wallet_owner(
            None,
            &ali.id,
            &WalletOwnerCandidate::default().with_phone(None),
        )
        .await
        .expect("pass");
    assert_eq!(updated.phone_o, None);

    // An empty update is accepted and changes nothing.
    let unchanged = wallet_owner_store
        .validate_and_update_wallet_owner(None, &ali.id, &WalletOwnerCandidate::default())
        .await
        .expect("pass");
    assert_eq!(unchanged, updated);

    // A provided-but-empty required field is rejected.
    match wallet_owner_store
        .validate_and_update_wallet_owner(
            None,
            &ali.id,
            &WalletOwnerCandidate::default().with_wallet_number(""),
        )
        .await
    {
        Err(Error::Validation(validation_error)) => {
            assert_eq!(validation_error, ValidationError::empty(WalletOwnerField::WalletNumber))
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    match wallet_owner_store
        .validate_and_update_wallet_owner(
            None,
            "no-such-id",
            &WalletOwnerCandidate::default().with_name("Nobody"),
        )
        .await
    {
        Err(Error::NotFound(_)) => {}
        other => panic!("expected not found error, got {:?}", other),
    }

    // Updating doesn't change the ordering.
    let wallet_owner_v = wallet_owner_store
        .get_all_wallet_owners(None)
        .await
        .expect("pass");
    assert_eq!(
        wallet_owner_v
            .iter()
            .map(|wallet_owner| wallet_owner.id.as_str())
            .collect::<Vec<_>>(),
        vec![sara.id.as_str(), ali.id.as_str()]
    );
}

async fn test_delete_impl(wallet_owner_store: WalletOwnerStore) {
    let ali = wallet_owner_store
        .validate_and_add_wallet_owner(None, &candidate("Ali", "ID-1", "W-1"))
        .await
        .expect("pass");

    wallet_owner_store
        .delete_wallet_owner(None, &ali.id)
        .await
        .expect("pass");
    assert_eq!(
        wallet_owner_store
            .get_wallet_owner(None, &ali.id)
            .await
            .expect("pass"),
        None
    );
    match wallet_owner_store.delete_wallet_owner(None, &ali.id).await {
        Err(Error::NotFound(_)) => {}
        other => panic!("expected not found error, got {:?}", other),
    }

    // The freed ID card and wallet number can be registered again.
    wallet_owner_store
        .validate_and_add_wallet_owner(None, &candidate("Ali again", "ID-1", "W-1"))
        .await
        .expect("pass");
}

async fn test_transaction_impl(wallet_owner_store: WalletOwnerStore) {
    let mut transaction_b = wallet_owner_store.begin_transaction().await.expect("pass");
    let ali = wallet_owner_store
        .validate_and_add_wallet_owner(
            Some(transaction_b.as_mut()),
            &candidate("Ali", "ID-1", "W-1"),
        )
        .await
        .expect("pass");
    assert_eq!(
        wallet_owner_store
            .get_wallet_owner(Some(transaction_b.as_mut()), &ali.id)
            .await
            .expect("pass"),
        Some(ali.clone())
    );
    transaction_b.commit().await.expect("pass");

    assert_eq!(
        wallet_owner_store
            .get_all_wallet_owners(None)
            .await
            .expect("pass"),
        vec![ali]
    );
}

/// Calls the storage directly, bypassing the store's pre-checks, to make sure the backend itself
/// refuses duplicates.
async fn test_backend_uniqueness_impl(wallet_owner_storage_a: Arc<dyn WalletOwnerStorage>) {
    let insert = |id_card: &str, wallet_number: &str| WalletOwnerInsert {
        name: "Ali".to_string(),
        id_card: id_card.to_string(),
        wallet_number: wallet_number.to_string(),
        phone_o: None,
    };
    wallet_owner_storage_a
        .add_wallet_owner(None, &insert("ID-1", "W-1"))
        .await
        .expect("pass");
    let second = wallet_owner_storage_a
        .add_wallet_owner(None, &insert("ID-2", "W-2"))
        .await
        .expect("pass");

    match wallet_owner_storage_a
        .add_wallet_owner(None, &insert("ID-1", "W-3"))
        .await
    {
        Err(Error::AlreadyExists(UniqueField::IdCard)) => {}
        other => panic!("expected duplicate ID card error, got {:?}", other),
    }
    match wallet_owner_storage_a
        .add_wallet_owner(None, &insert("ID-3", "W-1"))
        .await
    {
        Err(Error::AlreadyExists(UniqueField::WalletNumber)) => {}
        other => panic!("expected duplicate wallet number error, got {:?}", other),
    }

    let mut wallet_owner_update = WalletOwnerUpdate::empty(second.id.as_str());
    wallet_owner_update.wallet_number_o = Some("W-1".to_string());
    match wallet_owner_storage_a
        .update_wallet_owner(None, &wallet_owner_update)
        .await
    {
        Err(Error::AlreadyExists(UniqueField::WalletNumber)) => {}
        other => panic!("expected duplicate wallet number error, got {:?}", other),
    }

    // Updates of a missing record and deletes of a missing record are reported, not errors.
    assert_eq!(
        wallet_owner_storage_a
            .update_wallet_owner(None, &WalletOwnerUpdate::empty("no-such-id"))
            .await
            .expect("pass"),
        None
    );
    assert!(!wallet_owner_storage_a
        .delete_wallet_owner(None, "no-such-id")
        .await
        .expect("pass"));

    assert_eq!(
        wallet_owner_storage_a
            .get_wallet_owner_with_id_card(None, "ID-2")
            .await
            .expect("pass"),
        Some(second)
    );
}

#[tokio::test]
async fn test_wallet_owner_storage_mock_tie_order() {
    let wallet_owner_storage_mock = wallet_owner_storage_mock::WalletOwnerStorageMock::new();
    let created_at = now_utc_micros();
    for (id, id_card, wallet_number) in TIED_RECORDS {
        wallet_owner_storage_mock
            .insert_wallet_owner(WalletOwner {
                id: id.to_string(),
                name: format!("Owner {}", id),
                id_card: id_card.to_string(),
                wallet_number: wallet_number.to_string(),
                phone_o: None,
                created_at,
            })
            .expect("pass");
    }
    assert_tie_order(&wallet_owner_storage_mock).await;
}

#[tokio::test]
async fn test_wallet_owner_storage_sqlite_tie_order() {
    let sqlite_pool = sqlite_pool().await;
    let wallet_owner_storage_sqlite =
        wallet_owner_storage_sqlite::WalletOwnerStorageSQLite::open_and_run_migrations(
            sqlite_pool.clone(),
        )
        .await
        .expect("pass");
    for (id, id_card, wallet_number) in TIED_RECORDS {
        sqlx::query(
            r#"
                insert into wallet_owners(
                    id, name, id_card, wallet_number, created_at,
                    name_folded, id_card_folded, wallet_number_folded
                )
                values ($1, $2, $3, $4, '2024-05-01T12:00:00.000000Z', $5, $6, $7)
            "#,
        )
        .bind(id)
        .bind(format!("Owner {}", id))
        .bind(id_card)
        .bind(wallet_number)
        .bind(format!("owner {}", id))
        .bind(id_card.to_lowercase())
        .bind(wallet_number.to_lowercase())
        .execute(&sqlite_pool)
        .await
        .expect("pass");
    }
    assert_tie_order(&wallet_owner_storage_sqlite).await;
}

const TIED_RECORDS: [(&str, &str, &str); 3] =
    [("a", "ID-1", "W-1"), ("b", "ID-2", "W-2"), ("c", "ID-3", "W-3")];

/// Expects exactly the records "a", "b", "c", inserted in that order with equal created_at.
async fn assert_tie_order(wallet_owner_storage: &dyn WalletOwnerStorage) {
    let ids = |wallet_owner_v: Vec<WalletOwner>| {
        wallet_owner_v
            .into_iter()
            .map(|wallet_owner| wallet_owner.id)
            .collect::<Vec<_>>()
    };
    // Records created at the same instant come back most-recently-inserted first.
    let wallet_owner_v = wallet_owner_storage
        .get_wallet_owners(None, &WalletOwnerFilter::all())
        .await
        .expect("pass");
    assert!(wallet_owner_v
        .iter()
        .all(|wallet_owner| wallet_owner.created_at == wallet_owner_v[0].created_at));
    assert_eq!(ids(wallet_owner_v), vec!["c", "b", "a"]);
    assert_eq!(
        ids(wallet_owner_storage
            .get_wallet_owners(None, &WalletOwnerFilter::search("OWNER"))
            .await
            .expect("pass")),
        vec!["c", "b", "a"]
    );

    // A later record still comes first.
    let newest = wallet_owner_storage
        .add_wallet_owner(
            None,
            &WalletOwnerInsert {
                name: "Newest".to_string(),
                id_card: "ID-4".to_string(),
                wallet_number: "W-4".to_string(),
                phone_o: None,
            },
        )
        .await
        .expect("pass");
    assert_eq!(
        ids(wallet_owner_storage
            .get_wallet_owners(None, &WalletOwnerFilter::search(""))
            .await
            .expect("pass")),
        vec![newest.id.as_str(), "c", "b", "a"]
    );
}

#[tokio::test]
async fn test_wallet_owner_storage_backend_uniqueness() {
    test_backend_uniqueness_impl(mock_wallet_owner_storage()).await;
    test_backend_uniqueness_impl(sqlite_wallet_owner_storage().await).await;
}

#[tokio::test]
async fn test_wallet_owner_store_mock() {
    test_create_list_and_search_impl(mock_wallet_owner_store()).await;
    test_unicode_search_impl(mock_wallet_owner_store()).await;
    test_duplicates_impl(mock_wallet_owner_store()).await;
    test_validation_impl(mock_wallet_owner_store()).await;
    test_update_impl(mock_wallet_owner_store()).await;
    test_delete_impl(mock_wallet_owner_store()).await;
    test_transaction_impl(mock_wallet_owner_store()).await;
}

#[tokio::test]
async fn test_wallet_owner_store_sqlite() {
    test_create_list_and_search_impl(sqlite_wallet_owner_store().await).await;
    test_unicode_search_impl(sqlite_wallet_owner_store().await).await;
    test_duplicates_impl(sqlite_wallet_owner_store().await).await;
    test_validation_impl(sqlite_wallet_owner_store().await).await;
    test_update_impl(sqlite_wallet_owner_store().await).await;
    test_delete_impl(sqlite_wallet_owner_store().await).await;
    test_transaction_impl(sqlite_wallet_owner_store().await).await;
}

#[tokio::test]
async fn test_sqlite_transaction_rollback() {
    let wallet_owner_store = sqlite_wallet_owner_store().await;
    let mut transaction_b = wallet_owner_store.begin_transaction().await.expect("pass");
    wallet_owner_store
        .validate_and_add_wallet_owner(
            Some(transaction_b.as_mut()),
            &candidate("Ali", "ID-1", "W-1"),
        )
        .await
        .expect("pass");
    transaction_b.rollback().await.expect("pass");

    assert!(wallet_owner_store
        .get_all_wallet_owners(None)
        .await
        .expect("pass")
        .is_empty());
}
