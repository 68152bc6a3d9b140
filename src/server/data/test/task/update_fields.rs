use super::*;

/// Tests that a partial update leaves absent fields and the order untouched.
///
/// Expected: only name and done change
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_, _, bucket) = factory::helpers::create_bucket_with_dependencies(db, user.id).await?;

    let repo = TaskRepository::new(db);
    let mut param = create_param(bucket.id, "Awal");
    param.description = Some("Deskripsi".to_string());
    let task = repo.create(param, 3).await?;

    let updated = repo
        .update_fields(&UpdateTaskParam {
            id: task.id,
            name: Some("Akhir".to_string()),
            done: Some(true),
            ..Default::default()
        })
        .await?
        .expect("task should exist");

    assert_eq!(updated.name, "Akhir");
    assert!(updated.done);
    assert_eq!(updated.description.as_deref(), Some("Deskripsi"));
    assert_eq!(updated.order, 3);
    assert_eq!(updated.bucket_id, bucket.id);

    Ok(())
}

/// Tests updating a missing task.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TaskRepository::new(db);
    let result = repo
        .update_fields(&UpdateTaskParam {
            id: 404,
            done: Some(true),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
