use super::*;

/// Tests creating a user.
///
/// Verifies that the stored user carries the given fields and that the password
/// hash is not exposed on the domain model.
///
/// Expected: Ok(User) with matching name and e-mail
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Sari".to_string(),
            email: "sari@example.com".to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
            is_admin: false,
        })
        .await?;

    assert_eq!(user.name, "Sari");
    assert_eq!(user.email, "sari@example.com");
    assert!(!user.is_admin);
    assert!(user.about.is_none());

    Ok(())
}

/// Tests that e-mail addresses are unique.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("dup@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            name: "Other".to_string(),
            email: "dup@example.com".to_string(),
            password_hash: "hash".to_string(),
            is_admin: false,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
