use super::*;

/// Tests looking up several members where only some are AFK.
///
/// Expected: Ok with statuses for the AFK members only
#[tokio::test]
async fn returns_only_afk_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AfkUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AfkRepository::new(db);
    repo.set(1, "tidur".to_string()).await?;
    repo.set(3, "kuliah".to_string()).await?;

    let mut statuses = repo.get_many(&[1, 2, 3]).await?;
    statuses.sort_by_key(|s| s.user_id);

    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].user_id, 1);
    assert_eq!(statuses[1].reason, "kuliah");

    Ok(())
}

/// Tests looking up an empty list of members.
///
/// Expected: Ok with no statuses
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AfkUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(AfkRepository::new(db).get_many(&[]).await?.is_empty());

    Ok(())
}

/// Tests that a stored row reads back with its reason.
///
/// Expected: Ok with the single stored status
#[tokio::test]
async fn reads_stored_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AfkUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::afk_user::create_afk_user(db).await?;
    let user_id: u64 = row.user_id.parse().unwrap();

    let statuses = AfkRepository::new(db).get_many(&[user_id]).await?;

    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].reason, "AFK");

    Ok(())
}
