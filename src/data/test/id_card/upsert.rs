use super::*;

/// Tests creating a card for a member without one.
///
/// Expected: Ok with the provided number and fields stored
#[tokio::test]
async fn creates_new_card() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::IdCard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = IdCardRepository::new(db);
    let card = repo.upsert(param(123456789, "Valerie")).await?;

    assert_eq!(card.user_id, 123456789);
    assert_eq!(card.number, "0000000000000001");
    assert_eq!(card.name, "Valerie");
    assert_eq!(card.theme, CardTheme::Light);
    assert_eq!(card.created_at, card.updated_at);

    Ok(())
}

/// Tests updating a card keeps its number and creation time.
///
/// Verifies that the editable fields change while `number` and `created_at` stay as they
/// were on first creation, even when a different new number is offered.
///
/// Expected: Ok with fields updated and identity preserved
#[tokio::test]
async fn update_preserves_number_and_created_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::IdCard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = IdCardRepository::new(db);
    let original = repo.upsert(param(42, "Valerie")).await?;

    let mut update = param(42, "Val");
    update.theme = CardTheme::Dark;
    update.new_number = "9999999999999999".to_string();
    let updated = repo.upsert(update).await?;

    assert_eq!(updated.name, "Val");
    assert_eq!(updated.theme, CardTheme::Dark);
    assert_eq!(updated.number, original.number);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at >= original.updated_at);

    Ok(())
}
