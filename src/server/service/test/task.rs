use test_utils::{builder::TestBuilder, factory};

use super::notification_bus;
use crate::{
    model::notification::NotificationCategory,
    server::{
        data::{notification::NotificationRepository, task::TaskRepository},
        error::AppError,
        model::task::{CreateTaskParam, UpdateTaskParam},
        service::task::TaskService,
    },
};

fn create_param(bucket_id: i32, name: &str) -> CreateTaskParam {
    CreateTaskParam {
        bucket_id,
        name: name.to_string(),
        description: None,
        start_at: None,
        end_at: None,
    }
}

/// Tests that tasks append after the bucket's maximum order.
///
/// Expected: first task in an empty bucket gets order 1, the next one order 2
#[tokio::test]
async fn add_task_appends_to_bucket() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let user = factory::user::create_user(db).await?;
    let (_, _, bucket) = factory::helpers::create_bucket_with_dependencies(db, user.id).await?;

    let service = TaskService::new(db, &events);
    let first = service.add_task(user.id, create_param(bucket.id, "Desain")).await?;
    let second = service.add_task(user.id, create_param(bucket.id, "Koding")).await?;

    assert_eq!(first.task.order, 1);
    assert_eq!(second.task.order, 2);

    Ok(())
}

/// Tests adding a task to a bucket that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn add_task_to_missing_bucket_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let user = factory::user::create_user(db).await?;

    let result = TaskService::new(db, &events)
        .add_task(user.id, create_param(999, "Orphan"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests moving a task before another in a different bucket.
///
/// Expected: the stored order equals the before task's order and the task
/// lives in the before task's bucket
#[tokio::test]
async fn move_before_copies_order_verbatim() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let user = factory::user::create_user(db).await?;
    let (_, project, source) =
        factory::helpers::create_bucket_with_dependencies(db, user.id).await?;
    let target = factory::bucket::create_bucket(db, project.id).await?;
    let t1 = factory::task::create_task(db, target.id, 5).await?;
    let t2 = factory::task::create_task(db, source.id, 1).await?;

    TaskService::new(db, &events)
        .update_task(
            user.id,
            UpdateTaskParam {
                id: t2.id,
                before_id: Some(t1.id),
                ..Default::default()
            },
        )
        .await?;

    let repo = TaskRepository::new(db);
    let stored_t1 = repo.find_by_id(t1.id).await?.unwrap();
    let stored_t2 = repo.find_by_id(t2.id).await?.unwrap();
    assert_eq!(stored_t2.order, stored_t1.order);
    assert_eq!(stored_t2.bucket_id, target.id);

    let listed = repo.get_by_bucket(target.id).await?;
    assert_eq!(
        listed.iter().map(|task| task.id).collect::<Vec<_>>(),
        vec![t1.id, t2.id]
    );

    Ok(())
}

/// Tests a `bucket_id` that disagrees with the bucket of `before_id`.
///
/// Expected: Err(BadRequest) and the task keeps its position
#[tokio::test]
async fn move_before_with_conflicting_bucket_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let user = factory::user::create_user(db).await?;
    let (_, project, source) =
        factory::helpers::create_bucket_with_dependencies(db, user.id).await?;
    let target = factory::bucket::create_bucket(db, project.id).await?;
    let t1 = factory::task::create_task(db, target.id, 5).await?;
    let t2 = factory::task::create_task(db, source.id, 1).await?;

    let result = TaskService::new(db, &events)
        .update_task(
            user.id,
            UpdateTaskParam {
                id: t2.id,
                before_id: Some(t1.id),
                bucket_id: Some(source.id),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = TaskRepository::new(db).find_by_id(t2.id).await?.unwrap();
    assert_eq!(stored.bucket_id, source.id);
    assert_eq!(stored.order, 1);

    Ok(())
}

/// Tests re-homing a task with only `bucket_id`, including an empty target bucket.
///
/// Expected: order 1 in the empty bucket
#[tokio::test]
async fn move_to_empty_bucket_starts_at_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let user = factory::user::create_user(db).await?;
    let (_, project, source) =
        factory::helpers::create_bucket_with_dependencies(db, user.id).await?;
    let target = factory::bucket::create_bucket(db, project.id).await?;
    let task = factory::task::create_task(db, source.id, 7).await?;

    let updated = TaskService::new(db, &events)
        .update_task(
            user.id,
            UpdateTaskParam {
                id: task.id,
                bucket_id: Some(target.id),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.task.bucket_id, target.id);
    assert_eq!(updated.task.order, 1);

    Ok(())
}

/// Tests a plain field update.
///
/// Expected: name changes while bucket and order stay
#[tokio::test]
async fn field_update_keeps_position() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let user = factory::user::create_user(db).await?;
    let (_, _, bucket) = factory::helpers::create_bucket_with_dependencies(db, user.id).await?;
    let task = factory::task::create_task(db, bucket.id, 3).await?;

    let updated = TaskService::new(db, &events)
        .update_task(
            user.id,
            UpdateTaskParam {
                id: task.id,
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.task.name, "Renamed");
    assert_eq!(updated.task.bucket_id, bucket.id);
    assert_eq!(updated.task.order, 3);

    Ok(())
}

/// Tests that outsiders cannot touch a project's tasks.
///
/// Expected: Err(AuthErr)
#[tokio::test]
async fn outsider_cannot_update_task() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let owner = factory::user::create_user(db).await?;
    let outsider = factory::user::create_user(db).await?;
    let (_, _, bucket) = factory::helpers::create_bucket_with_dependencies(db, owner.id).await?;
    let task = factory::task::create_task(db, bucket.id, 1).await?;

    let result = TaskService::new(db, &events)
        .update_task(
            outsider.id,
            UpdateTaskParam {
                id: task.id,
                done: Some(true),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

/// Tests assignment and completion notifications.
///
/// Expected: the assignee gets a Tugas notification, and completion by the
/// assignee gives the project admin a Kontribusi notification
#[tokio::test]
async fn assign_and_complete_notify() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let admin = factory::user::create_user(db).await?;
    let dev = factory::user::create_user(db).await?;
    let (_, project, bucket) =
        factory::helpers::create_bucket_with_dependencies(db, admin.id).await?;
    factory::project::add_member(db, project.id, dev.id, "Dev").await?;
    let task = factory::task::create_task(db, bucket.id, 1).await?;

    let service = TaskService::new(db, &events);
    let assignees = service.assign(admin.id, task.id, dev.id).await?;
    assert_eq!(assignees, vec![dev.id]);

    assert!(matches!(
        service.assign(admin.id, task.id, dev.id).await,
        Err(AppError::BadRequest(_))
    ));

    service
        .update_task(
            dev.id,
            UpdateTaskParam {
                id: task.id,
                done: Some(true),
                ..Default::default()
            },
        )
        .await?;

    let repo = NotificationRepository::new(db);
    let dev_notifications = repo.get_by_user(dev.id).await?;
    assert_eq!(dev_notifications.len(), 1);
    assert_eq!(dev_notifications[0].category, NotificationCategory::Tugas);

    let admin_notifications = repo.get_by_user(admin.id).await?;
    assert_eq!(admin_notifications.len(), 1);
    assert_eq!(
        admin_notifications[0].category,
        NotificationCategory::Kontribusi
    );

    Ok(())
}

/// Tests assigning a user outside the project.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn assign_requires_project_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let admin = factory::user::create_user(db).await?;
    let outsider = factory::user::create_user(db).await?;
    let (_, _, bucket) = factory::helpers::create_bucket_with_dependencies(db, admin.id).await?;
    let task = factory::task::create_task(db, bucket.id, 1).await?;

    let result = TaskService::new(db, &events)
        .assign(admin.id, task.id, outsider.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
