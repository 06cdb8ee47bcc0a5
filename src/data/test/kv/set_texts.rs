use super::*;

/// Tests writing several keys in one batch.
///
/// Expected: Ok with every key readable afterwards
#[tokio::test]
async fn writes_all_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::KvEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KvRepository::new(db);
    repo.set_texts(&[
        ("sorting.bag", r#"["light","dark"]"#.to_string()),
        ("sorting.cursor", "1".to_string()),
        ("sorting.last", "light".to_string()),
    ])
    .await?;

    assert_eq!(
        repo.get_text("sorting.bag").await?,
        Some(r#"["light","dark"]"#.to_string())
    );
    assert_eq!(repo.get_text("sorting.cursor").await?, Some("1".to_string()));
    assert_eq!(repo.get_text("sorting.last").await?, Some("light".to_string()));

    Ok(())
}

/// Tests overwriting an existing key.
///
/// Expected: Ok with the new value and still a single row for the key
#[tokio::test]
async fn overwrites_existing_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::KvEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KvRepository::new(db);
    repo.set_texts(&[("sorting.cursor", "1".to_string())]).await?;
    repo.set_texts(&[("sorting.cursor", "2".to_string())]).await?;

    assert_eq!(repo.get_text("sorting.cursor").await?, Some("2".to_string()));
    assert_eq!(entity::prelude::KvEntry::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a batch written inside a rolled back transaction leaves no trace.
///
/// Expected: Ok with no entries stored
#[tokio::test]
async fn rolls_back_with_outer_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::KvEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let txn = db.begin().await?;
    KvRepository::new(&txn)
        .set_texts(&[
            ("sorting.bag", r#"["dark","light"]"#.to_string()),
            ("sorting.cursor", "1".to_string()),
        ])
        .await?;
    txn.rollback().await?;

    let repo = KvRepository::new(db);
    assert!(repo.get_text("sorting.bag").await?.is_none());
    assert!(repo.get_text("sorting.cursor").await?.is_none());

    Ok(())
}
