use super::*;

/// Tests listing articles per author.
///
/// Expected: author filter returns only that author's articles, newest first
#[tokio::test]
async fn lists_articles_by_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let repo = ArticleRepository::new(db);
    let first = repo.create(author.id, article("Pertama")).await?;
    let second = repo.create(author.id, article("Kedua")).await?;
    repo.create(other.id, article("Lain")).await?;

    let mine = repo.get_all(Some(author.id)).await?;

    assert_eq!(
        mine.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );
    assert_eq!(repo.get_all(None).await?.len(), 3);

    Ok(())
}

/// Tests updating and deleting an article.
///
/// Expected: content replaced, then article gone
#[tokio::test]
async fn updates_and_deletes_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;

    let repo = ArticleRepository::new(db);
    let created = repo.create(author.id, article("Draf")).await?;

    let updated = repo
        .update(
            created.id,
            ArticleParam {
                name: "Final".to_string(),
                description: "Siap".to_string(),
                content: "**tebal**".to_string(),
            },
        )
        .await?
        .expect("article should exist");

    assert_eq!(updated.name, "Final");
    assert_eq!(updated.content, "**tebal**");

    assert!(repo.delete(created.id).await?);
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}
