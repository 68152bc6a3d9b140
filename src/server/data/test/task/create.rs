use super::*;

/// Tests inserting a task with an explicit order.
///
/// Expected: Ok(Task) not done, with the given order
#[tokio::test]
async fn stores_given_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_, _, bucket) = factory::helpers::create_bucket_with_dependencies(db, user.id).await?;

    let repo = TaskRepository::new(db);
    let task = repo.create(create_param(bucket.id, "Rancang API"), 4).await?;

    assert_eq!(task.bucket_id, bucket.id);
    assert_eq!(task.order, 4);
    assert!(!task.done);

    Ok(())
}

/// Tests that a task cannot reference a missing bucket.
///
/// Expected: Err(DbErr) from the foreign key
#[tokio::test]
async fn rejects_unknown_bucket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TaskRepository::new(db);
    let result = repo.create(create_param(9999, "Orphan"), 1).await;

    assert!(result.is_err());

    Ok(())
}
