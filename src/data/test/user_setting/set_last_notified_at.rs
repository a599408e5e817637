use super::*;
use chrono::{DurationRound, TimeDelta, Utc};

/// Tests recording a delivered reminder.
///
/// Expected: Ok with last_notified_at set and the enabled flag unchanged
#[tokio::test]
async fn records_timestamp() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::user_setting::UserSettingFactory::new(db)
        .enabled(true)
        .build()
        .await?;
    let at = Utc::now().duration_trunc(TimeDelta::seconds(1)).unwrap();

    let repo = UserSettingRepository::new(db);
    repo.set_last_notified_at(row.user_id as u64, at).await?;

    let stored = repo.find_by_user_id(row.user_id as u64).await?.unwrap();
    assert_eq!(stored.last_notified_at, Some(at));
    assert!(stored.resin_reminder_enabled);

    Ok(())
}

/// Tests that recording for a user without settings does not create a row.
///
/// Expected: Ok and no row
#[tokio::test]
async fn ignores_missing_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserSettingRepository::new(db);
    repo.set_last_notified_at(42, Utc::now()).await?;

    assert!(repo.find_by_user_id(42).await?.is_none());

    Ok(())
}
