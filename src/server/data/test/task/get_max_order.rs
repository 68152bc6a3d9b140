use super::*;

/// Tests the maximum order of an empty bucket.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_empty_bucket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_, _, bucket) = factory::helpers::create_bucket_with_dependencies(db, user.id).await?;

    let repo = TaskRepository::new(db);

    assert_eq!(repo.get_max_order(bucket.id).await?, None);

    Ok(())
}

/// Tests that the maximum only considers the requested bucket.
///
/// Expected: Ok(Some(7)) for the bucket holding orders 2 and 7
#[tokio::test]
async fn returns_highest_order_in_bucket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_, project, bucket) =
        factory::helpers::create_bucket_with_dependencies(db, user.id).await?;
    let other = factory::bucket::create_bucket(db, project.id).await?;

    factory::task::create_task(db, bucket.id, 2).await?;
    factory::task::create_task(db, bucket.id, 7).await?;
    factory::task::create_task(db, other.id, 40).await?;

    let repo = TaskRepository::new(db);

    assert_eq!(repo.get_max_order(bucket.id).await?, Some(7));

    Ok(())
}
