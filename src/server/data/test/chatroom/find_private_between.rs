use super::*;

/// Tests finding the private room shared by two users.
///
/// Expected: the private room, not the project room both users are in
#[tokio::test]
async fn ignores_project_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::user::create_user(db).await?;
    let b = factory::user::create_user(db).await?;
    let (_, project) = factory::helpers::create_project_with_dependencies(db, a.id).await?;

    let repo = ChatroomRepository::new(db);
    let project_room = repo.create("Diskusi".to_string(), Some(project.id)).await?;
    repo.add_member(project_room.id, a.id).await?;
    repo.add_member(project_room.id, b.id).await?;

    assert!(repo.find_private_between(a.id, b.id).await?.is_none());

    let private_room = repo.create("A & B".to_string(), None).await?;
    repo.add_member(private_room.id, a.id).await?;
    repo.add_member(private_room.id, b.id).await?;

    let found = repo.find_private_between(b.id, a.id).await?;
    assert_eq!(found.map(|room| room.id), Some(private_room.id));

    Ok(())
}
