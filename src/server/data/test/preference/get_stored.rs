use super::*;

/// Tests reading preferences of a user who never saved any.
///
/// Expected: Ok(empty map)
#[tokio::test]
async fn returns_empty_map_without_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = PreferenceRepository::new(db);
    let stored = repo.get_stored(user.id).await?;

    assert!(stored.is_empty());

    Ok(())
}

/// Tests that only the user's own rows are returned, keyed by preference name.
///
/// Expected: Ok(map) with the single stored key of that user
#[tokio::test]
async fn returns_only_own_rows_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let repo = PreferenceRepository::new(db);
    repo.upsert_many(user.id, &[(PreferenceKey::TaskNotif, "email")])
        .await?;
    repo.upsert_many(other.id, &[(PreferenceKey::OrgNotif, "off")])
        .await?;

    let stored = repo.get_stored(user.id).await?;

    assert_eq!(stored.len(), 1);
    assert_eq!(stored.get("task_notif").map(String::as_str), Some("email"));

    Ok(())
}
