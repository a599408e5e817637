use super::*;
use test_utils::factory::user_credential::create_user_credential;

/// Tests deleting an existing credential.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserCredential)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = create_user_credential(db).await?;
    let other = create_user_credential(db).await?;

    let repo = UserCredentialRepository::new(db);
    let deleted = repo.delete(row.user_id as u64).await?;

    assert!(deleted);
    assert!(repo.find_by_user_id(row.user_id as u64).await?.is_none());
    // Other users are untouched
    assert!(repo.find_by_user_id(other.user_id as u64).await?.is_some());

    Ok(())
}

/// Tests deleting when nothing is stored.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserCredential)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserCredentialRepository::new(db);

    assert!(!repo.delete(42).await?);
    assert_eq!(entity::prelude::UserCredential::find().count(db).await?, 0);

    Ok(())
}
