use super::*;

/// Tests inserting a credential for a new user.
///
/// Expected: Ok with exactly one row holding the given ciphertext
#[tokio::test]
async fn inserts_new_credential() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserCredential)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserCredentialRepository::new(db);
    repo.upsert(123456789, "ciphertext".to_string()).await?;

    let stored = entity::prelude::UserCredential::find_by_id(123456789i64)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.encrypted_credential, "ciphertext");

    Ok(())
}

/// Tests that a second write replaces the first instead of adding a row.
///
/// Expected: Ok with one row holding the newest ciphertext
#[tokio::test]
async fn replaces_existing_credential() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserCredential)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserCredentialRepository::new(db);
    repo.upsert(123456789, "first".to_string()).await?;
    let original = entity::prelude::UserCredential::find_by_id(123456789i64)
        .one(db)
        .await?
        .unwrap();

    repo.upsert(123456789, "second".to_string()).await?;

    let count = entity::prelude::UserCredential::find().count(db).await?;
    assert_eq!(count, 1);

    let stored = entity::prelude::UserCredential::find_by_id(123456789i64)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.encrypted_credential, "second");
    assert!(stored.updated_at >= original.updated_at);

    Ok(())
}

/// Tests that an ID above `i64::MAX` is rejected before touching the database.
///
/// Expected: Err(InternalErr)
#[tokio::test]
async fn rejects_unstorable_user_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserCredential)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserCredentialRepository::new(db);
    let result = repo.upsert(u64::MAX, "ciphertext".to_string()).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
