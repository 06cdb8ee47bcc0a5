//! ID card data repository.
//!
//! Provides `IdCardRepository` for creating, updating and listing member identity cards.
//! Card numbers and creation timestamps are set once and preserved by every update.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::model::id_card::{IdCard, UpsertIdCardParam};

/// Repository providing database operations for identity cards.
pub struct IdCardRepository<'a, C> {
    db: &'a C,
}

impl<'a, C> IdCardRepository<'a, C>
where
    C: ConnectionTrait,
{
    /// Creates a new IdCardRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a member's ID card.
    ///
    /// # Returns
    /// - `Ok(Some(IdCard))` - The member has a card
    /// - `Ok(None)` - No card for this member
    /// - `Err(DbErr)` - Database error or corrupt row
    pub async fn find_by_user_id(&self, user_id: u64) -> Result<Option<IdCard>, DbErr> {
        entity::prelude::IdCard::find_by_id(user_id.to_string())
            .one(self.db)
            .await?
            .map(IdCard::from_entity)
            .transpose()
    }

    /// Creates a card or updates the editable fields of an existing one.
    ///
    /// On creation the card receives `param.new_number` and `created_at = now`. On update
    /// the stored number and `created_at` are kept and only `updated_at` moves.
    ///
    /// # Arguments
    /// - `param` - Sanitised card fields
    ///
    /// # Returns
    /// - `Ok(IdCard)` - The created or updated card
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertIdCardParam) -> Result<IdCard, DbErr> {
        let existing = entity::prelude::IdCard::find_by_id(param.user_id.to_string())
            .one(self.db)
            .await?;

        let now = Utc::now();

        let entity = if let Some(existing) = existing {
            let mut active: entity::id_card::ActiveModel = existing.into();
            active.name = ActiveValue::Set(param.name);
            active.gender = ActiveValue::Set(param.gender);
            active.domicile = ActiveValue::Set(param.domicile);
            active.hobby = ActiveValue::Set(param.hobby);
            active.status = ActiveValue::Set(param.status);
            active.theme = ActiveValue::Set(param.theme.as_str().to_string());
            active.updated_at = ActiveValue::Set(now);
            active.update(self.db).await?
        } else {
            entity::id_card::ActiveModel {
                user_id: ActiveValue::Set(param.user_id.to_string()),
                number: ActiveValue::Set(param.new_number),
                name: ActiveValue::Set(param.name),
                gender: ActiveValue::Set(param.gender),
                domicile: ActiveValue::Set(param.domicile),
                hobby: ActiveValue::Set(param.hobby),
                status: ActiveValue::Set(param.status),
                theme: ActiveValue::Set(param.theme.as_str().to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            }
            .insert(self.db)
            .await?
        };

        IdCard::from_entity(entity)
    }

    /// Gets a page of ID cards, newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-based page number
    /// - `per_page` - Number of cards per page
    ///
    /// # Returns
    /// - `Ok((Vec<IdCard>, u64))` - Cards on the page and the total number of cards
    /// - `Err(DbErr)` - Database error or corrupt row
    pub async fn get_page_newest_first(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<IdCard>, u64), DbErr> {
        let paginator = entity::prelude::IdCard::find()
            .order_by_desc(entity::id_card::Column::CreatedAt)
            .order_by_asc(entity::id_card::Column::UserId)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let cards = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(IdCard::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((cards, total))
    }
}
