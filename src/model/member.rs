use entity::{
    party::PartyStatus,
    party_member::{InviteStatus, MemberRole},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PartyMemberResponse {
    pub id: i32,
    pub user_id: i32,
    pub party_id: i32,
    #[schema(value_type = String, example = "MEMBER")]
    pub role: MemberRole,
    #[schema(value_type = String, example = "PENDING")]
    pub invite_status: InviteStatus,
}

impl From<entity::party_member::Model> for PartyMemberResponse {
    fn from(member: entity::party_member::Model) -> Self {
        Self {
            id: member.id,
            user_id: member.user_id,
            party_id: member.party_id,
            role: member.role,
            invite_status: member.invite_status,
        }
    }
}

/// Leader decision on a join request.
///
/// When either field is missing no membership is touched and only the party status is
/// recomputed.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PartyMemberUpdateRequest {
    pub user_id: Option<i32>,
    #[schema(value_type = Option<String>, example = "ACCEPTED")]
    pub invite_status: Option<InviteStatus>,
}

/// Party status after a join request decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PartyStatusResponse {
    pub party_id: i32,
    #[schema(value_type = String, example = "JOINED")]
    pub party_status: PartyStatus,
}
