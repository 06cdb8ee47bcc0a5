use super::*;

/// Tests setting an AFK status for the first time.
///
/// Expected: Ok with the reason stored
#[tokio::test]
async fn sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AfkUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AfkRepository::new(db);
    let status = repo.set(42, "tidur".to_string()).await?;

    assert_eq!(status.user_id, 42);
    assert_eq!(status.reason, "tidur");
    assert_eq!(repo.get_many(&[42]).await?[0].reason, "tidur");

    Ok(())
}

/// Tests replacing an existing AFK status.
///
/// Expected: Ok with the new reason and a refreshed timestamp
#[tokio::test]
async fn replaces_existing_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AfkUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::afk_user::AfkUserFactory::new(db)
        .reason("makan")
        .build()
        .await?;
    let user_id: u64 = row.user_id.parse().unwrap();

    let status = AfkRepository::new(db)
        .set(user_id, "kerja".to_string())
        .await?;

    assert_eq!(status.reason, "kerja");
    assert!(status.since >= row.since);

    Ok(())
}
