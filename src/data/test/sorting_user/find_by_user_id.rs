use super::*;

/// Tests finding an unsorted member.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unsorted_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SortingUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SortingUserRepository::new(db).find_by_user_id(1).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests finding a member created through the factory.
///
/// Expected: Ok(Some) with the factory's house
#[tokio::test]
async fn finds_sorted_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SortingUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::sorting_user::SortingUserFactory::new(db)
        .house("dark")
        .build()
        .await?;
    let user_id: u64 = row.user_id.parse().unwrap();

    let sorted = SortingUserRepository::new(db)
        .find_by_user_id(user_id)
        .await?
        .unwrap();

    assert_eq!(sorted.user_id, user_id);
    assert_eq!(sorted.house, House::Dark);

    Ok(())
}

/// Tests that a row with an unknown house tag surfaces as an error.
///
/// Expected: Err(DbErr::Type)
#[tokio::test]
async fn fails_on_unknown_house_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SortingUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::sorting_user::SortingUserFactory::new(db)
        .user_id("77")
        .house("purple")
        .build()
        .await?;

    let result = SortingUserRepository::new(db).find_by_user_id(77).await;

    assert!(matches!(result, Err(DbErr::Type(_))));

    Ok(())
}

/// Tests that a default factory row reads back in the light house.
///
/// Expected: Ok(Some) with House::Light
#[tokio::test]
async fn finds_default_sorted_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SortingUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::sorting_user::create_sorting_user(db).await?;
    let user_id: u64 = row.user_id.parse().unwrap();

    let sorted = SortingUserRepository::new(db).find_by_user_id(user_id).await?;

    assert_eq!(sorted.map(|s| s.house), Some(House::Light));

    Ok(())
}
