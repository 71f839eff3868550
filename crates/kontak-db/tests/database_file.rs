//! Integration tests against an on-disk database file.

use kontak_core::{ContactInput, ContactRepository, ContactUpdate};
use kontak_db::{CoreFactory, SqliteContactRepository, setup_database};
use tempfile::tempdir;

#[tokio::test]
async fn setup_creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("nested").join("data").join("kontak.db");

    let pool = setup_database(&db_path).await.unwrap();
    assert!(db_path.exists());

    let repo = SqliteContactRepository::new(pool);
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn contacts_survive_reopening_the_database() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("kontak.db");

    let id = {
        let pool = setup_database(&db_path).await.unwrap();
        let service = CoreFactory::build_contact_service(pool.clone());
        let committed = service
            .create(ContactInput::new("Alice", "alice@x.com", "+6281234567890"))
            .await
            .unwrap();
        pool.close().await;
        committed.value.id
    };

    let pool = setup_database(&db_path).await.unwrap();
    let service = CoreFactory::build_contact_service(pool);
    let alice = service.find_by_name("Alice").await.unwrap();
    assert_eq!(alice.id, id);
    assert_eq!(alice.email.as_deref(), Some("alice@x.com"));
}

#[tokio::test]
async fn rename_through_the_service_keeps_the_id() {
    let dir = tempdir().unwrap();
    let pool = setup_database(&dir.path().join("kontak.db")).await.unwrap();
    let service = CoreFactory::build_contact_service(pool);

    let alice = service
        .create(ContactInput::new("Alice", "alice@x.com", "+6281234567890"))
        .await
        .unwrap()
        .value;

    service
        .update(ContactUpdate {
            id: alice.id,
            input: ContactInput::new("Alice2", "alice@x.com", "+6281234567890"),
            old_name: "Alice".to_string(),
        })
        .await
        .unwrap();

    let renamed = service.get_by_id(alice.id).await.unwrap().unwrap();
    assert_eq!(renamed.name, "Alice2");
    assert!(service.get_by_name("Alice").await.unwrap().is_none());
}
