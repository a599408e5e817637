use super::*;
use test_utils::factory::user_credential::UserCredentialFactory;

/// Tests reading back a stored ciphertext.
///
/// Expected: Ok(Some) with the stored value
#[tokio::test]
async fn returns_stored_ciphertext() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserCredential)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = UserCredentialFactory::new(db)
        .encrypted_credential("stored")
        .build()
        .await?;

    let repo = UserCredentialRepository::new(db);
    let result = repo.find_by_user_id(row.user_id as u64).await?;

    assert_eq!(result.as_deref(), Some("stored"));

    Ok(())
}

/// Tests that a user without a row reads as absent.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserCredential)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserCredentialRepository::new(db);
    let result = repo.find_by_user_id(987654321).await?;

    assert!(result.is_none());

    Ok(())
}
