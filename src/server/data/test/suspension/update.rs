use super::*;

/// Tests shortening a suspension so it expires.
///
/// Expected: updated row no longer active; delete removes it
#[tokio::test]
async fn updates_and_deletes_suspension() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = SuspensionRepository::new(db);
    let suspension = repo
        .create(CreateSuspensionParam {
            user_id: user.id,
            reason: "spam".to_string(),
            expired_at: Utc::now() + Duration::days(7),
        })
        .await?;

    let updated = repo
        .update(UpdateSuspensionParam {
            id: suspension.id,
            reason: "dicabut".to_string(),
            expired_at: Utc::now() - Duration::minutes(1),
        })
        .await?
        .expect("suspension should exist");

    assert_eq!(updated.reason, "dicabut");
    assert!(repo.find_active_for_user(user.id, Utc::now()).await?.is_none());

    assert!(repo.delete(suspension.id).await?);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
