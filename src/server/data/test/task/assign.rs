use super::*;

/// Tests assigning the same user twice.
///
/// Expected: first call adds the row, second call reports it already existed
#[tokio::test]
async fn assignment_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_, _, bucket) = factory::helpers::create_bucket_with_dependencies(db, user.id).await?;
    let task = factory::task::create_task(db, bucket.id, 1).await?;

    let repo = TaskRepository::new(db);

    assert!(repo.assign(task.id, user.id).await?);
    assert!(!repo.assign(task.id, user.id).await?);
    assert_eq!(repo.get_assignees(task.id).await?, vec![user.id]);

    Ok(())
}

/// Tests loading assignees for several tasks and unassigning.
///
/// Expected: map keyed by task id; unassigned user disappears
#[tokio::test]
async fn groups_assignees_by_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let helper = factory::user::create_user(db).await?;
    let (_, _, bucket) = factory::helpers::create_bucket_with_dependencies(db, owner.id).await?;
    let first = factory::task::create_task(db, bucket.id, 1).await?;
    let second = factory::task::create_task(db, bucket.id, 2).await?;

    let repo = TaskRepository::new(db);
    repo.assign(first.id, owner.id).await?;
    repo.assign(first.id, helper.id).await?;
    repo.assign(second.id, helper.id).await?;
    assert!(repo.unassign(first.id, owner.id).await?);

    let assignees = repo.get_assignees_for(vec![first.id, second.id]).await?;

    assert_eq!(assignees.get(&first.id), Some(&vec![helper.id]));
    assert_eq!(assignees.get(&second.id), Some(&vec![helper.id]));

    Ok(())
}
