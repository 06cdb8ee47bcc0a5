use super::*;

/// Tests finding a member without a card.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_card() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::IdCard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::id_card::create_id_card(db).await?;
    let stranger: u64 = factory::helpers::next_snowflake().parse().unwrap();

    let card = IdCardRepository::new(db).find_by_user_id(stranger).await?;

    assert!(card.is_none());

    Ok(())
}

/// Tests finding a stored card with a dark theme.
///
/// Expected: Ok(Some) with the stored number and theme
#[tokio::test]
async fn finds_stored_card() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::IdCard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::id_card::IdCardFactory::new(db)
        .number("0521767225600000")
        .theme("dark")
        .build()
        .await?;
    let user_id: u64 = row.user_id.parse().unwrap();

    let card = IdCardRepository::new(db)
        .find_by_user_id(user_id)
        .await?
        .unwrap();

    assert_eq!(card.user_id, user_id);
    assert_eq!(card.number, "0521767225600000");
    assert_eq!(card.theme, CardTheme::Dark);

    Ok(())
}
