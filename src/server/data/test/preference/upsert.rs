use super::*;

/// Tests that writing a key twice keeps a single row with the latest value.
///
/// Expected: one stored row holding the second value
#[tokio::test]
async fn replaces_existing_value() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = PreferenceRepository::new(db);
    repo.upsert_many(user.id, &[(PreferenceKey::FriendInvite, "on")])
        .await?;
    repo.upsert_many(user.id, &[(PreferenceKey::FriendInvite, "off")])
        .await?;

    let stored = repo.get_stored(user.id).await?;

    assert_eq!(stored.len(), 1);
    assert_eq!(stored.get("friend_invite").map(String::as_str), Some("off"));

    Ok(())
}

/// Tests that all nine keys are seeded and resolvable.
///
/// Expected: Ok(map) with nine ids
#[tokio::test]
async fn resolves_every_seeded_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PreferenceRepository::new(db);
    let ids = repo.get_ids().await?;

    for key in PreferenceKey::ALL {
        assert!(ids.contains_key(key.as_str()), "missing {}", key.as_str());
    }

    Ok(())
}
