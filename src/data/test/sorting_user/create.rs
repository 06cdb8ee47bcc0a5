use super::*;

/// Tests recording a member's house.
///
/// Expected: Ok with the stored house and user ID
#[tokio::test]
async fn records_house() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SortingUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SortingUserRepository::new(db);
    let sorted = repo.create(123456789, House::Dark).await?;

    assert_eq!(sorted.user_id, 123456789);
    assert_eq!(sorted.house, House::Dark);

    let stored = repo.find_by_user_id(123456789).await?.unwrap();
    assert_eq!(stored.house, House::Dark);

    Ok(())
}

/// Tests that an existing result cannot be overwritten.
///
/// Expected: Err on the second insert and the first house kept
#[tokio::test]
async fn rejects_second_result_for_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SortingUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SortingUserRepository::new(db);
    repo.create(42, House::Light).await?;
    let result = repo.create(42, House::Dark).await;

    assert!(result.is_err());
    assert_eq!(
        repo.find_by_user_id(42).await?.unwrap().house,
        House::Light
    );

    Ok(())
}
