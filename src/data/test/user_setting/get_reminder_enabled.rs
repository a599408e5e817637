use super::*;
use crate::model::setting::ReminderTarget;

/// Tests that only enabled users are returned, with their thresholds.
///
/// Expected: Ok with the two enabled users in ID order
#[tokio::test]
async fn returns_only_enabled_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user_setting::UserSettingFactory::new(db)
        .enabled(true)
        .threshold(180)
        .build()
        .await?;
    factory::user_setting::UserSettingFactory::new(db)
        .enabled(false)
        .build()
        .await?;
    let second = factory::user_setting::UserSettingFactory::new(db)
        .enabled(true)
        .build()
        .await?;

    let repo = UserSettingRepository::new(db);
    let targets = repo.get_reminder_enabled().await?;

    assert_eq!(
        targets,
        vec![
            ReminderTarget {
                user_id: first.user_id as u64,
                threshold: 180,
            },
            ReminderTarget {
                user_id: second.user_id as u64,
                threshold: 200,
            },
        ]
    );

    Ok(())
}

/// Tests the empty table case.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_when_nobody_enabled() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user_setting::create_user_setting(db).await?;

    let repo = UserSettingRepository::new(db);

    assert!(repo.get_reminder_enabled().await?.is_empty());

    Ok(())
}

/// Tests that a row with an out-of-range stored ID does not hide the other users.
///
/// Expected: Ok with only the valid enabled user
#[tokio::test]
async fn skips_rows_with_invalid_user_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user_setting::UserSettingFactory::new(db)
        .user_id(-5)
        .enabled(true)
        .build()
        .await?;
    let valid = factory::user_setting::UserSettingFactory::new(db)
        .enabled(true)
        .build()
        .await?;

    let repo = UserSettingRepository::new(db);
    let targets = repo.get_reminder_enabled().await?;

    assert_eq!(
        targets,
        vec![ReminderTarget {
            user_id: valid.user_id as u64,
            threshold: 200,
        }]
    );

    Ok(())
}
