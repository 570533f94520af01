use chrono::NaiveDateTime;
use entity::party::{NewParty, PartyStatus};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::util::geo::BoundingBox;

/// A party joined with its catalog item.
pub type PartyWithItem = (entity::party::Model, Option<entity::item::Model>);

pub struct PartyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PartyRepository<'a, C> {
    /// Creates a new instance of [`PartyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new party in the RECRUITING status
    pub async fn create(
        &self,
        party: NewParty,
        now: NaiveDateTime,
    ) -> Result<entity::party::Model, DbErr> {
        entity::party::ActiveModel::recruiting(party, now)
            .insert(self.db)
            .await
    }

    /// Finds a party by ID, selecting the row `FOR UPDATE` when `lock` is set.
    pub async fn get_by_id(
        &self,
        party_id: i32,
        lock: bool,
    ) -> Result<Option<entity::party::Model>, DbErr> {
        let mut query = entity::prelude::Party::find_by_id(party_id);

        if lock {
            query = query.lock_exclusive();
        }

        query.one(self.db).await
    }

    pub async fn get_by_id_with_item(
        &self,
        party_id: i32,
        lock: bool,
    ) -> Result<Option<PartyWithItem>, DbErr> {
        let mut query = entity::prelude::Party::find_by_id(party_id);

        if lock {
            query = query.lock_exclusive();
        }

        query
            .find_also_related(entity::item::Entity)
            .one(self.db)
            .await
    }

    /// Finds a party by ID only if `creator_id` created it.
    ///
    /// With `lock` set the row is selected `FOR UPDATE`, holding it until the surrounding
    /// transaction ends. Backends without row locks ignore the flag.
    pub async fn get_by_id_and_creator_id(
        &self,
        party_id: i32,
        creator_id: i32,
        lock: bool,
    ) -> Result<Option<entity::party::Model>, DbErr> {
        let mut query = entity::prelude::Party::find_by_id(party_id)
            .filter(entity::party::Column::CreatorId.eq(creator_id));

        if lock {
            query = query.lock_exclusive();
        }

        query.one(self.db).await
    }

    /// Parties created by `creator_id`, oldest first
    pub async fn get_all_by_creator_id(
        &self,
        creator_id: i32,
    ) -> Result<Vec<PartyWithItem>, DbErr> {
        entity::prelude::Party::find()
            .filter(entity::party::Column::CreatorId.eq(creator_id))
            .find_also_related(entity::item::Entity)
            .order_by_asc(entity::party::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_many_by_ids(&self, party_ids: Vec<i32>) -> Result<Vec<PartyWithItem>, DbErr> {
        if party_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Party::find()
            .filter(entity::party::Column::Id.is_in(party_ids))
            .find_also_related(entity::item::Entity)
            .order_by_asc(entity::party::Column::Id)
            .all(self.db)
            .await
    }

    /// Writes the item, quantity, time window and target member count of `party`.
    ///
    /// The status column is left untouched.
    pub async fn update_details(
        &self,
        party: &entity::party::Model,
        now: NaiveDateTime,
    ) -> Result<entity::party::Model, DbErr> {
        entity::party::ActiveModel {
            id: ActiveValue::Unchanged(party.id),
            item_id: ActiveValue::Set(party.item_id),
            item_count: ActiveValue::Set(party.item_count),
            item_unit: ActiveValue::Set(party.item_unit.clone()),
            start_time: ActiveValue::Set(party.start_time),
            end_time: ActiveValue::Set(party.end_time),
            members_count: ActiveValue::Set(party.members_count),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Writes only the status of a party.
    pub async fn update_status(
        &self,
        party_id: i32,
        status: PartyStatus,
        now: NaiveDateTime,
    ) -> Result<entity::party::Model, DbErr> {
        entity::party::ActiveModel {
            id: ActiveValue::Unchanged(party_id),
            status: ActiveValue::Set(status),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Parties inside `bounds` whose status is one of `statuses`.
    pub async fn find_in_bounds(
        &self,
        bounds: &BoundingBox,
        statuses: &[PartyStatus],
    ) -> Result<Vec<PartyWithItem>, DbErr> {
        let (min_lat, max_lat) = bounds.latitude;

        let mut query = entity::prelude::Party::find()
            .filter(
                entity::party::Column::Latitude.between(to_decimal(min_lat)?, to_decimal(max_lat)?),
            )
            .filter(entity::party::Column::Status.is_in(statuses.iter().copied()));

        if let Some((min_lon, max_lon)) = bounds.longitude {
            query = query.filter(
                entity::party::Column::Longitude
                    .between(to_decimal(min_lon)?, to_decimal(max_lon)?),
            );
        }

        query
            .find_also_related(entity::item::Entity)
            .order_by_asc(entity::party::Column::Id)
            .all(self.db)
            .await
    }
}

fn to_decimal(value: f64) -> Result<Decimal, DbErr> {
    Decimal::from_f64_retain(value)
        .ok_or_else(|| DbErr::Custom(format!("Coordinate {} is not a finite number", value)))
}
