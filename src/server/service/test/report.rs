use test_utils::{builder::TestBuilder, factory};

use super::notification_bus;
use crate::{
    model::notification::NotificationCategory,
    server::{
        data::notification::NotificationRepository,
        error::AppError,
        model::report::CreateReportParam,
        service::report::ReportService,
    },
};

/// Tests filing and resolving a report.
///
/// Expected: regular users cannot resolve, admins can, and the reporter gets a
/// Laporan notification
#[tokio::test]
async fn admin_resolves_and_reporter_is_notified() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let admin = factory::user::create_admin(db).await?;
    let reporter = factory::user::create_user(db).await?;
    let reported = factory::user::create_user(db).await?;

    let service = ReportService::new(db, &events);
    let report = service
        .create(CreateReportParam {
            sender_id: reporter.id,
            reported_id: reported.id,
            title: "Spam".to_string(),
            description: "Mengirim tautan aneh".to_string(),
        })
        .await?;

    assert!(matches!(
        service.resolve(reporter.id, report.id).await,
        Err(AppError::AuthErr(_))
    ));

    let resolved = service.resolve(admin.id, report.id).await?;
    assert!(resolved.resolved);

    assert!(matches!(
        service.resolve(admin.id, report.id).await,
        Err(AppError::BadRequest(_))
    ));

    let open = service.get_all(admin.id, Some(false)).await?;
    assert!(open.is_empty());

    let notifications = NotificationRepository::new(db).get_by_user(reporter.id).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].category, NotificationCategory::Laporan);

    Ok(())
}
