use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::suspension::{CreateSuspensionParam, UpdateSuspensionParam},
    service::suspension::SuspensionService,
};

fn suspend(user_id: i32, days: i64) -> CreateSuspensionParam {
    CreateSuspensionParam {
        user_id,
        reason: "spam".to_string(),
        expired_at: Utc::now() + Duration::days(days),
    }
}

/// Tests that every operation requires an admin.
///
/// Expected: Err(AuthErr) for each call by a regular user
#[tokio::test]
async fn non_admin_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let target = factory::user::create_user(db).await?;

    let service = SuspensionService::new(db);
    assert!(matches!(
        service.add(user.id, suspend(target.id, 1)).await,
        Err(AppError::AuthErr(_))
    ));
    assert!(matches!(
        service.get_all(user.id).await,
        Err(AppError::AuthErr(_))
    ));
    assert!(matches!(
        service.get_active_for_user(user.id, target.id).await,
        Err(AppError::AuthErr(_))
    ));
    assert!(matches!(
        service.delete(user.id, 1).await,
        Err(AppError::AuthErr(_))
    ));

    Ok(())
}

/// Tests the admin lifecycle of a suspension.
///
/// Expected: active after add, updated reason, gone after delete
#[tokio::test]
async fn admin_manages_suspensions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let target = factory::user::create_user(db).await?;

    let service = SuspensionService::new(db);
    let suspension = service.add(admin.id, suspend(target.id, 3)).await?;

    let active = service.get_active_for_user(admin.id, target.id).await?;
    assert_eq!(active.map(|s| s.id), Some(suspension.id));

    let updated = service
        .update(
            admin.id,
            UpdateSuspensionParam {
                id: suspension.id,
                reason: "abuse".to_string(),
                expired_at: suspension.expired_at,
            },
        )
        .await?;
    assert_eq!(updated.reason, "abuse");

    service.delete(admin.id, suspension.id).await?;
    assert!(service.get_all(admin.id).await?.is_empty());

    Ok(())
}

/// Tests that an expiry in the past is refused.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_past_expiry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let target = factory::user::create_user(db).await?;

    let result = SuspensionService::new(db)
        .add(admin.id, suspend(target.id, -1))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
