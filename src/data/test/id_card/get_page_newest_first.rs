use super::*;

/// Tests listing an empty registry.
///
/// Expected: Ok with no cards and a total of zero
#[tokio::test]
async fn returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::IdCard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (cards, total) = IdCardRepository::new(db)
        .get_page_newest_first(0, 10)
        .await?;

    assert!(cards.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests ordering and paging of cards.
///
/// Creates three cards with increasing creation times and reads them two per page.
///
/// Expected: Ok with newest card first and the remaining card on the second page
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::IdCard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for (offset, name) in [(3, "oldest"), (2, "middle"), (1, "newest")] {
        factory::id_card::IdCardFactory::new(db)
            .name(name)
            .created_at(now - Duration::minutes(offset))
            .build()
            .await?;
    }

    let repo = IdCardRepository::new(db);
    let (first, total) = repo.get_page_newest_first(0, 2).await?;
    let (second, _) = repo.get_page_newest_first(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        first.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        vec!["newest", "middle"]
    );
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "oldest");

    Ok(())
}
