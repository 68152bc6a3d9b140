use super::*;

/// Tests bulk loading skips unknown ids and keeps id order.
///
/// Expected: Ok(Vec<User>) with the two existing users in id order
#[tokio::test]
async fn skips_missing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.find_many(vec![second.id, 9999, first.id]).await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that an empty id list does not query.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_many(Vec::new()).await?.is_empty());

    Ok(())
}
