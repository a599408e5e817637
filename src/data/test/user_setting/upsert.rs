use super::*;

/// Tests creating settings with only the enabled flag given.
///
/// Expected: Ok with threshold defaulted to max resin and timezone to UTC
#[tokio::test]
async fn creates_row_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserSettingRepository::new(db);
    let setting = repo
        .upsert(
            123456789,
            UpsertNotificationSettingParam {
                resin_reminder_enabled: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(setting.user_id, 123456789);
    assert!(setting.resin_reminder_enabled);
    assert_eq!(setting.resin_threshold, 200);
    assert_eq!(setting.timezone, "UTC");
    assert!(setting.last_notified_at.is_none());

    Ok(())
}

/// Tests that a partial update keeps fields that were not provided.
///
/// Given `{enabled: true, threshold: 150}`, writing only `threshold = 180` must leave
/// the flag enabled.
///
/// Expected: Ok with `{enabled: true, threshold: 180}`
#[tokio::test]
async fn partial_update_preserves_other_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::user_setting::UserSettingFactory::new(db)
        .enabled(true)
        .threshold(150)
        .build()
        .await?;

    let repo = UserSettingRepository::new(db);
    let setting = repo
        .upsert(
            row.user_id as u64,
            UpsertNotificationSettingParam {
                resin_threshold: Some(180),
                ..Default::default()
            },
        )
        .await?;

    assert!(setting.resin_reminder_enabled);
    assert_eq!(setting.resin_threshold, 180);

    let stored = repo.find_by_user_id(row.user_id as u64).await?.unwrap();
    assert_eq!(stored, setting);

    Ok(())
}

/// Tests disabling the reminder without touching the threshold.
///
/// Expected: Ok with the flag cleared and the threshold kept
#[tokio::test]
async fn disabling_keeps_threshold() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::user_setting::UserSettingFactory::new(db)
        .enabled(true)
        .threshold(160)
        .build()
        .await?;

    let repo = UserSettingRepository::new(db);
    let setting = repo
        .upsert(
            row.user_id as u64,
            UpsertNotificationSettingParam {
                resin_reminder_enabled: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert!(!setting.resin_reminder_enabled);
    assert_eq!(setting.resin_threshold, 160);

    Ok(())
}
