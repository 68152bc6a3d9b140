use super::*;

/// Tests that expired suspensions are not active.
///
/// Expected: Ok(None) with only an expired suspension
#[tokio::test]
async fn ignores_expired_suspensions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = SuspensionRepository::new(db);
    repo.create(CreateSuspensionParam {
        user_id: user.id,
        reason: "spam".to_string(),
        expired_at: Utc::now() - Duration::days(1),
    })
    .await?;

    assert!(repo.find_active_for_user(user.id, Utc::now()).await?.is_none());

    Ok(())
}

/// Tests that the longest active suspension is returned.
///
/// Expected: Ok(Some) with the later expiry
#[tokio::test]
async fn returns_longest_active_suspension() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = SuspensionRepository::new(db);
    repo.create(CreateSuspensionParam {
        user_id: user.id,
        reason: "spam".to_string(),
        expired_at: Utc::now() + Duration::days(1),
    })
    .await?;
    let longest = repo
        .create(CreateSuspensionParam {
            user_id: user.id,
            reason: "pelecehan".to_string(),
            expired_at: Utc::now() + Duration::days(30),
        })
        .await?;

    let active = repo
        .find_active_for_user(user.id, Utc::now())
        .await?
        .expect("user should be suspended");
    assert_eq!(active.id, longest.id);

    Ok(())
}
