use super::*;

/// Tests moving a task to another bucket at an explicit order.
///
/// Expected: stored bucket and order both change
#[tokio::test]
async fn writes_bucket_and_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_, project, bucket) =
        factory::helpers::create_bucket_with_dependencies(db, user.id).await?;
    let target = factory::bucket::create_bucket(db, project.id).await?;
    let task = factory::task::create_task(db, bucket.id, 1).await?;

    let repo = TaskRepository::new(db);
    repo.set_position(task.id, target.id, 12).await?;

    let stored = repo.find_by_id(task.id).await?.expect("task should exist");
    assert_eq!(stored.bucket_id, target.id);
    assert_eq!(stored.order, 12);

    Ok(())
}
