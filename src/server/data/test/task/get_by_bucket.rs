use super::*;

/// Tests listing order with duplicate order values.
///
/// Expected: tasks sorted by order, equal orders sorted by id
#[tokio::test]
async fn orders_by_order_then_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_, _, bucket) = factory::helpers::create_bucket_with_dependencies(db, user.id).await?;

    let third = factory::task::create_task(db, bucket.id, 5).await?;
    let first = factory::task::create_task(db, bucket.id, 1).await?;
    let second_a = factory::task::create_task(db, bucket.id, 3).await?;
    let second_b = factory::task::create_task(db, bucket.id, 3).await?;

    let repo = TaskRepository::new(db);
    let tasks = repo.get_by_bucket(bucket.id).await?;

    let ids: Vec<i32> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first.id, second_a.id, second_b.id, third.id]);

    Ok(())
}
