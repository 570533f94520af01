use sea_orm::{entity::prelude::*, ActiveValue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of a party.
///
/// `Recruiting -> Joined -> Done`, with `Canceled` reachable from any state.
/// `Done` and `Canceled` are terminal for item, time and member changes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartyStatus {
    #[sea_orm(string_value = "RECRUITING")]
    Recruiting,
    #[sea_orm(string_value = "JOINED")]
    Joined,
    #[sea_orm(string_value = "DONE")]
    Done,
    #[sea_orm(string_value = "CANCELED")]
    Canceled,
}

/// Events that move a party through its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyEvent {
    /// Accepted member count reached the target
    Join,
    Complete,
    Cancel,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("Party start time must be before its end time")]
    InvalidTimeRange,
    #[error("Cannot apply {event:?} to a party with status {from:?}")]
    IllegalTransition { from: PartyStatus, event: PartyEvent },
}

impl PartyStatus {
    /// Whether the party is closed to further item, time and member changes
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Canceled)
    }

    /// Resolves the status reached by applying `event` to `self`.
    ///
    /// `Complete` and `Cancel` are accepted from every state, including the
    /// terminal ones; only `Join` is guarded.
    pub fn apply(self, event: PartyEvent) -> Result<Self, LifecycleError> {
        match (self, event) {
            (Self::Recruiting | Self::Joined, PartyEvent::Join) => Ok(Self::Joined),
            (Self::Done | Self::Canceled, PartyEvent::Join) => {
                Err(LifecycleError::IllegalTransition { from: self, event })
            }
            (_, PartyEvent::Complete) => Ok(Self::Done),
            (_, PartyEvent::Cancel) => Ok(Self::Canceled),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "party")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub market_name: String,
    pub market_address: String,
    #[sea_orm(column_type = "Decimal(Some((10, 7)))")]
    pub latitude: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 7)))")]
    pub longitude: Decimal,
    pub item_id: i32,
    pub item_count: i32,
    pub item_unit: String,
    pub start_time: DateTime,
    pub end_time: DateTime,
    /// Target number of accepted members, leader included
    pub members_count: i32,
    pub creator_id: i32,
    pub status: PartyStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::item::Entity",
        from = "Column::ItemId",
        to = "super::item::Column::Id"
    )]
    Item,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatorId",
        to = "super::user::Column::Id"
    )]
    Creator,
    #[sea_orm(has_many = "super::party_member::Entity")]
    PartyMember,
    #[sea_orm(has_many = "super::chat_message::Entity")]
    ChatMessage,
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl Related<super::party_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyMember.def()
    }
}

impl Related<super::chat_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatMessage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields required to open a new party.
///
/// Quantity and time window must already be validated by the caller.
#[derive(Clone, Debug)]
pub struct NewParty {
    pub market_name: String,
    pub market_address: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub item_id: i32,
    pub item_count: i32,
    pub item_unit: String,
    pub start_time: DateTime,
    pub end_time: DateTime,
    pub members_count: i32,
    pub creator_id: i32,
}

/// Replacement values for the mutable fields of a party.
#[derive(Clone, Debug)]
pub struct PartyDetails {
    pub item_id: i32,
    pub item_count: i32,
    pub item_unit: String,
    pub start_time: DateTime,
    pub end_time: DateTime,
    pub members_count: i32,
}

impl ActiveModel {
    /// Builds a party in [`PartyStatus::Recruiting`]
    pub fn recruiting(party: NewParty, now: DateTime) -> Self {
        Self {
            market_name: ActiveValue::Set(party.market_name),
            market_address: ActiveValue::Set(party.market_address),
            latitude: ActiveValue::Set(party.latitude),
            longitude: ActiveValue::Set(party.longitude),
            item_id: ActiveValue::Set(party.item_id),
            item_count: ActiveValue::Set(party.item_count),
            item_unit: ActiveValue::Set(party.item_unit),
            start_time: ActiveValue::Set(party.start_time),
            end_time: ActiveValue::Set(party.end_time),
            members_count: ActiveValue::Set(party.members_count),
            creator_id: ActiveValue::Set(party.creator_id),
            status: ActiveValue::Set(PartyStatus::Recruiting),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Model {
    /// Replaces item, quantity, time window and target member count.
    ///
    /// Leaves the party untouched and returns [`LifecycleError::InvalidTimeRange`]
    /// unless `start_time < end_time`.
    pub fn update_details(&mut self, details: PartyDetails) -> Result<(), LifecycleError> {
        if details.start_time >= details.end_time {
            return Err(LifecycleError::InvalidTimeRange);
        }

        self.item_id = details.item_id;
        self.item_count = details.item_count;
        self.item_unit = details.item_unit;
        self.start_time = details.start_time;
        self.end_time = details.end_time;
        self.members_count = details.members_count;

        Ok(())
    }

    /// Moves the party to [`PartyStatus::Joined`].
    ///
    /// Returns `Ok(false)` when the party was already joined.
    pub fn join(&mut self) -> Result<bool, LifecycleError> {
        let next = self.status.apply(PartyEvent::Join)?;
        let changed = next != self.status;
        self.status = next;

        Ok(changed)
    }

    pub fn complete(&mut self) -> Result<(), LifecycleError> {
        self.status = self.status.apply(PartyEvent::Complete)?;
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<(), LifecycleError> {
        self.status = self.status.apply(PartyEvent::Cancel)?;
        Ok(())
    }
}
