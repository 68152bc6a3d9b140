use super::*;

/// Tests listing messages with sender names in sending order.
///
/// Expected: both messages oldest first, each carrying its sender's name
#[tokio::test]
async fn lists_messages_with_sender_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sari = factory::user::UserFactory::new(db).name("Sari").build().await?;
    let budi = factory::user::UserFactory::new(db).name("Budi").build().await?;

    let rooms = ChatroomRepository::new(db);
    let room = rooms.create("Privat".to_string(), None).await?;

    let repo = MessageRepository::new(db);
    repo.create(
        SendMessageParam {
            chatroom_id: room.id,
            sender_id: sari.id,
            message: "Halo".to_string(),
        },
        sari.name.clone(),
    )
    .await?;
    repo.create(
        SendMessageParam {
            chatroom_id: room.id,
            sender_id: budi.id,
            message: "Hai juga".to_string(),
        },
        budi.name.clone(),
    )
    .await?;

    let messages = repo.get_by_chatroom(room.id).await?;

    let lines: Vec<(&str, &str)> = messages
        .iter()
        .map(|m| (m.sender_name.as_str(), m.message.as_str()))
        .collect();
    assert_eq!(lines, vec![("Sari", "Halo"), ("Budi", "Hai juga")]);

    Ok(())
}
