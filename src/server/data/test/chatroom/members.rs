use super::*;

/// Tests that adding a member twice keeps a single membership.
///
/// Expected: member list contains the user once
#[tokio::test]
async fn add_member_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = ChatroomRepository::new(db);
    let room = repo.create("Privat".to_string(), None).await?;
    repo.add_member(room.id, user.id).await?;
    repo.add_member(room.id, user.id).await?;

    assert_eq!(repo.get_member_ids(room.id).await?, vec![user.id]);
    assert!(repo.is_member(room.id, user.id).await?);
    assert_eq!(repo.get_for_user(user.id).await?.len(), 1);

    repo.remove_member(room.id, user.id).await?;
    assert!(!repo.is_member(room.id, user.id).await?);

    Ok(())
}
