use super::*;

/// Tests reserving post numbers.
///
/// Expected: Ok with increasing numbers and no message ID yet
#[tokio::test]
async fn reserves_increasing_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menfess_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenfessRepository::new(db);
    let first = repo.create_post(555).await?;
    let second = repo.create_post(555).await?;

    assert!(second.id > first.id);
    assert_eq!(first.channel_id, 555);
    assert!(first.message_id.is_none());

    Ok(())
}

/// Tests attaching the Discord message to a reserved post.
///
/// Expected: Ok(Some) with the message ID readable through `get_post`
#[tokio::test]
async fn sets_message_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menfess_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenfessRepository::new(db);
    let post = repo.create_post(555).await?;
    let updated = repo.set_message_id(post.id, 999).await?.unwrap();

    assert_eq!(updated.message_id, Some(999));
    assert_eq!(repo.get_post(post.id).await?.unwrap().message_id, Some(999));

    Ok(())
}

/// Tests attaching a message to a post number that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn set_message_id_returns_none_for_unknown_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menfess_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MenfessRepository::new(db).set_message_id(404, 999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests reading a post created by the factory.
///
/// Expected: Ok(Some) with the factory's channel
#[tokio::test]
async fn gets_sent_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menfess_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::menfess::create_post(db, "321").await?;
    let post = MenfessRepository::new(db).get_post(row.id).await?.unwrap();

    assert_eq!(post.channel_id, 321);
    assert!(post.message_id.is_some());

    Ok(())
}
