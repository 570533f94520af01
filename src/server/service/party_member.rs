use entity::{
    party::PartyStatus,
    party_member::{InviteStatus, MemberRole},
};
use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::member::PartyMemberResponse,
    server::{
        data::{party::PartyRepository, party_member::PartyMemberRepository},
        error::{party::PartyError, Error},
        model::{app::SharedClock, auth::AuthUser},
    },
};

/// Join requests and the leader's view of them.
pub struct PartyMemberService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a SharedClock,
}

impl<'a> PartyMemberService<'a> {
    /// Creates a new instance of [`PartyMemberService`]
    pub fn new(db: &'a DatabaseConnection, clock: &'a SharedClock) -> Self {
        Self { db, clock }
    }

    /// Asks to join a recruiting party as a pending member.
    ///
    /// # Returns
    /// - `Ok(PartyMemberResponse)` - The new MEMBER/PENDING membership
    /// - `Err(Error::PartyError(PartyNotFound))` - The party does not exist
    /// - `Err(Error::PartyError(PartyNotRecruiting))` - The party is no longer recruiting
    /// - `Err(Error::PartyError(AlreadyPartyMember))` - The caller already has a membership
    pub async fn request_join(
        &self,
        party_id: i32,
        caller: &AuthUser,
    ) -> Result<PartyMemberResponse, Error> {
        let txn = self.db.begin().await?;
        let member_repo = PartyMemberRepository::new(&txn);

        let party = PartyRepository::new(&txn)
            .get_by_id(party_id, true)
            .await?
            .ok_or(PartyError::PartyNotFound(party_id))?;

        if party.status != PartyStatus::Recruiting {
            return Err(PartyError::PartyNotRecruiting(party_id).into());
        }

        if member_repo
            .get_by_party_id_and_user_id(party_id, caller.id)
            .await?
            .is_some()
        {
            return Err(PartyError::AlreadyPartyMember {
                party_id,
                user_id: caller.id,
            }
            .into());
        }

        let member = member_repo
            .create(
                caller.id,
                party_id,
                MemberRole::Member,
                InviteStatus::Pending,
                self.clock.utc().naive_utc(),
            )
            .await
            .map_err(|err| membership_conflict(err, party_id, caller.id))?;

        txn.commit().await?;

        tracing::info!(party_id = %party_id, user_id = %caller.id, "Requested to join party");

        Ok(PartyMemberResponse::from(member))
    }

    /// Pending join requests, visible to the party leader only.
    pub async fn get_join_requests(
        &self,
        party_id: i32,
        caller: &AuthUser,
    ) -> Result<Vec<PartyMemberResponse>, Error> {
        let txn = self.db.begin().await?;

        PartyRepository::new(&txn)
            .get_by_id_and_creator_id(party_id, caller.id, false)
            .await?
            .ok_or(PartyError::NotPartyLeader {
                party_id,
                user_id: caller.id,
            })?;

        let members = PartyMemberRepository::new(&txn)
            .get_by_party_id(party_id)
            .await?;

        txn.commit().await?;

        Ok(members
            .into_iter()
            .filter(|member| member.invite_status == InviteStatus::Pending)
            .map(PartyMemberResponse::from)
            .collect())
    }
}

/// Maps a violation of the unique `(party_id, user_id)` index to `AlreadyPartyMember`.
fn membership_conflict(err: DbErr, party_id: i32, user_id: i32) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            PartyError::AlreadyPartyMember { party_id, user_id }.into()
        }
        _ => err.into(),
    }
}
