use super::*;

/// Tests clearing an existing AFK status.
///
/// Expected: Ok(true) and no status left
#[tokio::test]
async fn clears_existing_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AfkUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AfkRepository::new(db);
    repo.set(42, "AFK".to_string()).await?;

    assert!(repo.clear(42).await?);
    assert!(repo.get_many(&[42]).await?.is_empty());

    Ok(())
}

/// Tests clearing a member who is not AFK.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_not_afk() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AfkUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!AfkRepository::new(db).clear(42).await?);

    Ok(())
}
