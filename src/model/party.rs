use entity::party::PartyStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for creating a new party.
///
/// Times use the `MM-dd HH:mm` format and are anchored to the current year.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PartyCreateRequest {
    pub market_name: String,
    pub market_address: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub item_id: i32,
    pub item_count: i32,
    pub item_unit: String,
    #[schema(example = "03-12 10:00")]
    pub start_time: String,
    #[schema(example = "03-12 12:00")]
    pub end_time: String,
    pub members_count: i32,
}

/// Body for replacing a party's mutable details.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PartyUpdateRequest {
    pub item_id: i32,
    pub item_count: i32,
    pub item_unit: String,
    #[schema(example = "03-12 10:00")]
    pub start_time: String,
    #[schema(example = "03-12 12:00")]
    pub end_time: String,
    pub members_count: i32,
}

/// The caller's relation to a party, from the caller's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PartyRole {
    Leader,
    Member,
}

/// A party as seen by one of its members.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PartyResponse {
    pub id: i32,
    pub market_name: String,
    pub market_address: String,
    pub item_id: i32,
    pub category: String,
    pub item_count: i32,
    pub item_unit: String,
    /// Start time formatted as `MM-dd HH:mm`
    pub start_time: String,
    /// End time formatted as `MM-dd HH:mm`
    pub end_time: String,
    pub members_count: i32,
    #[schema(value_type = String, example = "RECRUITING")]
    pub party_status: PartyStatus,
    pub role: PartyRole,
}

/// A party found near the caller, with its distance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NearbyPartyResponse {
    pub id: i32,
    pub market_name: String,
    pub market_address: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub item_id: i32,
    pub category: String,
    pub item_count: i32,
    pub item_unit: String,
    pub start_time: String,
    pub end_time: String,
    pub members_count: i32,
    #[schema(value_type = String, example = "RECRUITING")]
    pub party_status: PartyStatus,
    /// Great-circle distance from the caller in kilometres
    pub distance_km: f64,
}

/// Whether the caller belongs to a party.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PartyMembershipResponse {
    pub party_id: i32,
    pub is_member: bool,
}
