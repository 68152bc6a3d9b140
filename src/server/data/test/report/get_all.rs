use super::*;

/// Tests filtering reports by resolution state.
///
/// Expected: resolved filter returns only the resolved report
#[tokio::test]
async fn filters_by_resolution() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::user::create_user(db).await?;
    let reported = factory::user::create_user(db).await?;

    let repo = ReportRepository::new(db);
    let first = repo
        .create(CreateReportParam {
            sender_id: sender.id,
            reported_id: reported.id,
            title: "Spam".to_string(),
            description: "Mengirim tautan".to_string(),
        })
        .await?;
    let second = repo
        .create(CreateReportParam {
            sender_id: sender.id,
            reported_id: reported.id,
            title: "Kasar".to_string(),
            description: String::new(),
        })
        .await?;

    assert!(repo.set_resolved(first.id, true).await?);

    let resolved = repo.get_all(Some(true)).await?;
    let open = repo.get_all(Some(false)).await?;
    let all = repo.get_all(None).await?;

    assert_eq!(resolved.iter().map(|r| r.id).collect::<Vec<_>>(), vec![first.id]);
    assert_eq!(open.iter().map(|r| r.id).collect::<Vec<_>>(), vec![second.id]);
    assert_eq!(all.len(), 2);

    Ok(())
}
