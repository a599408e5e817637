use super::*;

/// Tests deleting a user's settings.
///
/// Expected: Ok(true) then Ok(false) on the second call
#[tokio::test]
async fn deletes_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::user_setting::create_user_setting(db).await?;

    let repo = UserSettingRepository::new(db);

    assert!(repo.delete(row.user_id as u64).await?);
    assert!(!repo.delete(row.user_id as u64).await?);
    assert!(repo.find_by_user_id(row.user_id as u64).await?.is_none());

    Ok(())
}
