use super::*;

/// Tests reading a key that was never written.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::KvEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KvRepository::new(db);
    let value = repo.get_text("sorting.bag").await?;

    assert!(value.is_none());

    Ok(())
}

/// Tests reading back a stored value.
///
/// Expected: Ok(Some) with the exact text written
#[tokio::test]
async fn returns_stored_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::KvEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KvRepository::new(db);
    repo.set_texts(&[("sorting.cursor", "7".to_string())]).await?;

    assert_eq!(repo.get_text("sorting.cursor").await?, Some("7".to_string()));

    Ok(())
}

/// Tests that a read fails when the table is missing.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KvRepository::new(db);
    let result = repo.get_text("sorting.bag").await;

    assert!(result.is_err());

    Ok(())
}
