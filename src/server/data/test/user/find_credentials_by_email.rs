use super::*;

/// Tests loading credentials for login.
///
/// Expected: Ok(Some(UserCredentials)) carrying the stored hash
#[tokio::test]
async fn returns_stored_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("login@example.com")
        .password("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_email("login@example.com").await?;

    let credentials = credentials.expect("credentials should exist");
    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.password_hash, "stored-hash");

    Ok(())
}

/// Tests lookup of an unknown e-mail.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo
        .find_credentials_by_email("nobody@example.com")
        .await?
        .is_none());
    assert!(!repo.email_exists("nobody@example.com").await?);

    Ok(())
}
