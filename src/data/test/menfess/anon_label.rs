use super::*;

/// Tests assigning and reading an anonymous label.
///
/// Expected: Ok with the label found and counted
#[tokio::test]
async fn assigns_label() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menfess_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenfessRepository::new(db);
    repo.create_anon_label(42, "Anon #001".to_string()).await?;

    assert_eq!(repo.find_anon_label(42).await?, Some("Anon #001".to_string()));
    assert_eq!(repo.find_anon_label(43).await?, None);
    assert_eq!(repo.count_anon_labels().await?, 1);

    Ok(())
}

/// Tests that a label cannot be given to two users.
///
/// Expected: Err on the duplicate label
#[tokio::test]
async fn rejects_duplicate_label() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menfess_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::menfess::create_anon(db, "1", "Anon #001").await?;
    let result = MenfessRepository::new(db)
        .create_anon_label(2, "Anon #001".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
