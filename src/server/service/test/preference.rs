use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::preference::{NotificationChannel, Toggle, UpdatePreferenceDto},
    server::{
        error::AppError,
        model::preference::{UpdatePreferenceParam, UserPreference},
        service::preference::PreferenceService,
    },
};

/// Tests a user without stored rows reads every default.
///
/// Expected: UserPreference::default()
#[tokio::test]
async fn unset_user_reads_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let preference = PreferenceService::new(db).get(user.id).await?;

    assert_eq!(preference, UserPreference::default());
    assert_eq!(preference.report_notif, NotificationChannel::On);
    assert_eq!(preference.friend_invite, Toggle::On);

    Ok(())
}

/// Tests that two partial saves each keep the keys the other wrote.
///
/// Expected: report_notif=Off and task_notif=Email, every other key at its default
#[tokio::test]
async fn partial_saves_keep_earlier_keys() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let service = PreferenceService::new(db);

    service
        .save(
            user.id,
            UpdatePreferenceParam::from_dto(UpdatePreferenceDto {
                report_notif: Some(NotificationChannel::Off),
                ..Default::default()
            }),
        )
        .await?;
    service
        .save(
            user.id,
            UpdatePreferenceParam::from_dto(UpdatePreferenceDto {
                task_notif: Some(NotificationChannel::Email),
                ..Default::default()
            }),
        )
        .await?;

    let preference = service.get(user.id).await?;

    assert_eq!(
        preference,
        UserPreference {
            report_notif: NotificationChannel::Off,
            task_notif: NotificationChannel::Email,
            ..Default::default()
        }
    );

    Ok(())
}

/// Tests an empty update writes nothing.
///
/// Expected: previous values returned unchanged
#[tokio::test]
async fn empty_save_changes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let service = PreferenceService::new(db);

    service
        .save(
            user.id,
            UpdatePreferenceParam::from_dto(UpdatePreferenceDto {
                friend_invite: Some(Toggle::Off),
                ..Default::default()
            }),
        )
        .await?;
    let preference = service
        .save(user.id, UpdatePreferenceParam::from_dto(UpdatePreferenceDto::default()))
        .await?;

    assert_eq!(preference.friend_invite, Toggle::Off);
    assert_eq!(preference.org_notif, NotificationChannel::On);

    Ok(())
}
