//! Party coordination service.
//!
//! Every public operation runs inside a single database transaction. Entities are mutated
//! only through their own lifecycle methods, then persisted through the repositories.

pub mod nearby;
pub mod status;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use chrono::{Datelike, NaiveDateTime};
use entity::{
    party::{LifecycleError, NewParty, PartyDetails, PartyStatus},
    party_member::{InviteStatus, MemberRole},
};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        member::{PartyMemberResponse, PartyMemberUpdateRequest},
        party::{
            NearbyPartyResponse, PartyCreateRequest, PartyResponse, PartyRole, PartyUpdateRequest,
        },
    },
    server::{
        data::{
            item::ItemRepository, party::PartyRepository, party_member::PartyMemberRepository,
            user::UserRepository,
        },
        error::{party::PartyError, Error},
        model::{app::SharedClock, auth::AuthUser},
        service::party::{nearby::NearbyPartyQuery, status::recompute_status},
        util::{
            geo::NearbyFilter,
            time::{format_party_time, parse_party_time},
        },
    },
};

pub struct PartyService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a SharedClock,
}

impl<'a> PartyService<'a> {
    /// Creates a new instance of [`PartyService`]
    pub fn new(db: &'a DatabaseConnection, clock: &'a SharedClock) -> Self {
        Self { db, clock }
    }

    /// Creates a party led by the caller.
    ///
    /// The party and the caller's accepted leader membership are committed together.
    ///
    /// # Returns
    /// - `Ok(PartyResponse)` - The new RECRUITING party, labelled `Leader`
    /// - `Err(Error::PartyError(ItemNotFound))` - The item does not exist
    /// - `Err(Error::PartyError(InvalidItemCount | InvalidTimeRange | InvalidMembersCount))` -
    ///   The request failed validation
    /// - `Err(Error::ParseError)` - A time is not in `MM-dd HH:mm` format
    pub async fn create_party(
        &self,
        request: PartyCreateRequest,
        caller: &AuthUser,
    ) -> Result<PartyResponse, Error> {
        let txn = self.db.begin().await?;

        let item = ItemRepository::new(&txn)
            .get_by_id(request.item_id)
            .await?
            .ok_or(PartyError::ItemNotFound(request.item_id))?;

        let (start_time, end_time) = self.validate_details(
            request.item_count,
            &request.start_time,
            &request.end_time,
            request.members_count,
        )?;

        let now = self.now();
        let party = PartyRepository::new(&txn)
            .create(
                NewParty {
                    market_name: request.market_name,
                    market_address: request.market_address,
                    latitude: request.latitude,
                    longitude: request.longitude,
                    item_id: item.id,
                    item_count: request.item_count,
                    item_unit: request.item_unit,
                    start_time,
                    end_time,
                    members_count: request.members_count,
                    creator_id: caller.id,
                },
                now,
            )
            .await?;

        PartyMemberRepository::new(&txn)
            .create(
                caller.id,
                party.id,
                MemberRole::Leader,
                InviteStatus::Accepted,
                now,
            )
            .await?;

        txn.commit().await?;

        tracing::info!(party_id = %party.id, creator_id = %caller.id, "Created party");

        Ok(party_response(party, item, PartyRole::Leader))
    }

    /// Applies the leader's decision on a join request and recomputes the party status.
    ///
    /// The party row stays locked until the transaction ends so concurrent decisions on the
    /// same party are serialized. When either request field is missing only the status is
    /// recomputed.
    ///
    /// # Returns
    /// - `Ok(PartyStatus)` - The party's status after recomputation
    /// - `Err(Error::PartyError(NotPartyLeader))` - The caller did not create the party
    /// - `Err(Error::PartyError(PartyClosed))` - The party is DONE or CANCELED
    /// - `Err(Error::PartyError(PartyMemberNotFound))` - The user has no membership
    pub async fn handle_join_request(
        &self,
        party_id: i32,
        caller: &AuthUser,
        request: PartyMemberUpdateRequest,
    ) -> Result<PartyStatus, Error> {
        let txn = self.db.begin().await?;
        let party_repo = PartyRepository::new(&txn);
        let member_repo = PartyMemberRepository::new(&txn);

        let mut party = party_repo
            .get_by_id_and_creator_id(party_id, caller.id, true)
            .await?
            .ok_or(PartyError::NotPartyLeader {
                party_id,
                user_id: caller.id,
            })?;

        if let (Some(user_id), Some(invite_status)) = (request.user_id, request.invite_status) {
            if party.status.is_terminal() {
                return Err(PartyError::PartyClosed(party_id).into());
            }

            let mut member = member_repo
                .get_by_party_id_and_user_id(party_id, user_id)
                .await?
                .ok_or(PartyError::PartyMemberNotFound { party_id, user_id })?;

            member.update_invite_status(invite_status);
            member_repo.update(member).await?;

            tracing::debug!(
                party_id = %party_id,
                user_id = %user_id,
                invite_status = ?invite_status,
                "Updated join request"
            );
        }

        let members = member_repo.get_by_party_id(party_id).await?;
        if recompute_status(&party, &members) == PartyStatus::Joined && party.join()? {
            party = party_repo
                .update_status(party.id, party.status, self.now())
                .await?;

            tracing::info!(party_id = %party_id, "Party reached its target member count");
        }

        txn.commit().await?;

        Ok(party.status)
    }

    /// Marks a party DONE from any status.
    pub async fn complete_party(&self, party_id: i32) -> Result<PartyResponse, Error> {
        self.close_party(party_id, entity::party::Model::complete)
            .await
    }

    /// Marks a party CANCELED from any status, DONE included.
    pub async fn cancel_party(&self, party_id: i32) -> Result<PartyResponse, Error> {
        self.close_party(party_id, entity::party::Model::cancel)
            .await
    }

    async fn close_party(
        &self,
        party_id: i32,
        close: fn(&mut entity::party::Model) -> Result<(), LifecycleError>,
    ) -> Result<PartyResponse, Error> {
        let txn = self.db.begin().await?;
        let party_repo = PartyRepository::new(&txn);

        let (mut party, item) = party_repo
            .get_by_id_with_item(party_id, true)
            .await?
            .ok_or(PartyError::PartyNotFound(party_id))?;
        let item = require_item(&party, item)?;

        let previous = party.status;
        close(&mut party)?;
        let party = party_repo
            .update_status(party.id, party.status, self.now())
            .await?;

        txn.commit().await?;

        tracing::info!(
            party_id = %party_id,
            from = ?previous,
            to = ?party.status,
            "Closed party"
        );

        Ok(party_response(party, item, PartyRole::Leader))
    }

    /// Accepted members of a finished party, visible to its leader only.
    ///
    /// # Returns
    /// - `Ok(Vec<PartyMemberResponse>)` - Accepted memberships, the leader's included
    /// - `Err(Error::PartyError(NotPartyLeader))` - The caller did not create the party
    /// - `Err(Error::PartyError(PartyNotDone))` - The party is not DONE
    pub async fn get_members_after_party_closed(
        &self,
        party_id: i32,
        caller: &AuthUser,
    ) -> Result<Vec<PartyMemberResponse>, Error> {
        let txn = self.db.begin().await?;

        let party = Self::find_led_party(&txn, party_id, caller.id).await?;
        if party.status != PartyStatus::Done {
            return Err(PartyError::PartyNotDone(party_id).into());
        }

        let members = PartyMemberRepository::new(&txn)
            .get_by_party_id(party_id)
            .await?;

        txn.commit().await?;

        Ok(members
            .into_iter()
            .filter(|member| member.is_accepted())
            .map(PartyMemberResponse::from)
            .collect())
    }

    /// Replaces a party's item, quantity, time window and target member count.
    ///
    /// Any member of the party may call this; the HTTP layer additionally requires the
    /// leader.
    ///
    /// # Returns
    /// - `Ok(PartyResponse)` - The updated party, labelled `Leader`
    /// - `Err(Error::PartyError(PartyNotFound))` - The party does not exist
    /// - `Err(Error::PartyError(NotPartyLeader))` - The caller holds no membership
    /// - `Err(Error::PartyError(PartyClosed))` - The party is DONE or CANCELED
    /// - `Err(Error::PartyError(ItemNotFound))` - The new item does not exist
    /// - Validation errors as for [`PartyService::create_party`]
    pub async fn update_party(
        &self,
        party_id: i32,
        request: PartyUpdateRequest,
        caller: &AuthUser,
    ) -> Result<PartyResponse, Error> {
        let txn = self.db.begin().await?;
        let party_repo = PartyRepository::new(&txn);

        let mut party = party_repo
            .get_by_id(party_id, true)
            .await?
            .ok_or(PartyError::PartyNotFound(party_id))?;

        PartyMemberRepository::new(&txn)
            .get_by_party_id_and_user_id(party_id, caller.id)
            .await?
            .ok_or(PartyError::NotPartyLeader {
                party_id,
                user_id: caller.id,
            })?;

        if party.status.is_terminal() {
            return Err(PartyError::PartyClosed(party_id).into());
        }

        let item = ItemRepository::new(&txn)
            .get_by_id(request.item_id)
            .await?
            .ok_or(PartyError::ItemNotFound(request.item_id))?;

        let (start_time, end_time) = self.validate_details(
            request.item_count,
            &request.start_time,
            &request.end_time,
            request.members_count,
        )?;

        party.update_details(PartyDetails {
            item_id: item.id,
            item_count: request.item_count,
            item_unit: request.item_unit,
            start_time,
            end_time,
            members_count: request.members_count,
        })?;
        let party = party_repo.update_details(&party, self.now()).await?;

        txn.commit().await?;

        tracing::info!(party_id = %party_id, "Updated party details");

        Ok(party_response(party, item, PartyRole::Leader))
    }

    /// Parties the caller created, followed by the other parties they belong to.
    ///
    /// A party appears once; the `Leader` entry wins over a membership.
    pub async fn get_my_parties(&self, caller: &AuthUser) -> Result<Vec<PartyResponse>, Error> {
        let txn = self.db.begin().await?;
        let party_repo = PartyRepository::new(&txn);

        let created = party_repo.get_all_by_creator_id(caller.id).await?;
        let memberships = PartyMemberRepository::new(&txn)
            .get_by_user_id_with_party(caller.id)
            .await?;

        let mut seen = HashSet::new();
        let mut parties = Vec::new();
        for (party, item) in created {
            seen.insert(party.id);
            let item = require_item(&party, item)?;
            parties.push(party_response(party, item, PartyRole::Leader));
        }

        let joined_ids: Vec<i32> = memberships
            .into_iter()
            .filter_map(|(_, party)| party)
            .map(|party| party.id)
            .filter(|party_id| seen.insert(*party_id))
            .collect();

        let mut joined = party_repo.get_many_by_ids(joined_ids.clone()).await?;
        txn.commit().await?;

        // Keep membership order rather than ID order
        joined.sort_by_key(|(party, _)| joined_ids.iter().position(|id| *id == party.id));
        for (party, item) in joined {
            let item = require_item(&party, item)?;
            parties.push(party_response(party, item, PartyRole::Member));
        }

        Ok(parties)
    }

    /// Whether the caller holds any membership in the party, whatever its invite status.
    pub async fn is_user_in_party(&self, party_id: i32, caller: &AuthUser) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        PartyRepository::new(&txn)
            .get_by_id(party_id, false)
            .await?
            .ok_or(PartyError::PartyNotFound(party_id))?;

        let membership = PartyMemberRepository::new(&txn)
            .get_by_party_id_and_user_id(party_id, caller.id)
            .await?;

        txn.commit().await?;

        Ok(membership.is_some())
    }

    /// Parties near the caller's stored location, nearest first.
    ///
    /// The location is re-read from the database rather than trusted from the session.
    ///
    /// # Returns
    /// - `Ok(Vec<NearbyPartyResponse>)` - Matching parties, possibly empty
    /// - `Err(Error::PartyError(UserNotFound))` - The caller no longer exists
    /// - `Err(Error::PartyError(UserLocationMissing))` - The caller has no stored location
    pub async fn get_nearby_parties(
        &self,
        caller: &AuthUser,
        filter: &NearbyFilter,
    ) -> Result<Vec<NearbyPartyResponse>, Error> {
        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .get_by_id(caller.id)
            .await?
            .ok_or(PartyError::UserNotFound(caller.id))?;

        let (Some(latitude), Some(longitude)) = (user.latitude, user.longitude) else {
            return Err(PartyError::UserLocationMissing(user.id).into());
        };

        let parties = NearbyPartyQuery::new(&txn, filter)
            .find_nearby(latitude, longitude)
            .await?;

        txn.commit().await?;

        Ok(parties)
    }

    /// Ensures the caller created the party.
    ///
    /// # Returns
    /// - `Ok(party)` - The party led by the caller
    /// - `Err(Error::PartyError(NotPartyLeader))` - The party does not exist or has another creator
    pub async fn require_leader(
        &self,
        party_id: i32,
        caller_id: i32,
    ) -> Result<entity::party::Model, Error> {
        Self::find_led_party(self.db, party_id, caller_id).await
    }

    async fn find_led_party<C: ConnectionTrait>(
        db: &C,
        party_id: i32,
        caller_id: i32,
    ) -> Result<entity::party::Model, Error> {
        let party = PartyRepository::new(db)
            .get_by_id_and_creator_id(party_id, caller_id, false)
            .await?
            .ok_or(PartyError::NotPartyLeader {
                party_id,
                user_id: caller_id,
            })?;

        Ok(party)
    }

    fn now(&self) -> NaiveDateTime {
        self.clock.utc().naive_utc()
    }

    /// Validates quantity, time window and target member count, in that order.
    fn validate_details(
        &self,
        item_count: i32,
        start_time: &str,
        end_time: &str,
        members_count: i32,
    ) -> Result<(NaiveDateTime, NaiveDateTime), Error> {
        if item_count < 1 {
            return Err(PartyError::InvalidItemCount(item_count).into());
        }

        let year = self.clock.utc().year();
        let start_time = parse_party_time(start_time, year)?;
        let end_time = parse_party_time(end_time, year)?;
        if start_time >= end_time {
            return Err(PartyError::InvalidTimeRange.into());
        }

        if members_count < 1 {
            return Err(PartyError::InvalidMembersCount(members_count).into());
        }

        Ok((start_time, end_time))
    }
}

fn require_item(
    party: &entity::party::Model,
    item: Option<entity::item::Model>,
) -> Result<entity::item::Model, Error> {
    item.ok_or_else(|| {
        Error::InternalError(format!(
            "Party {} references missing item {}",
            party.id, party.item_id
        ))
    })
}

fn party_response(
    party: entity::party::Model,
    item: entity::item::Model,
    role: PartyRole,
) -> PartyResponse {
    PartyResponse {
        id: party.id,
        market_name: party.market_name,
        market_address: party.market_address,
        item_id: item.id,
        category: item.category,
        item_count: party.item_count,
        item_unit: party.item_unit,
        start_time: format_party_time(party.start_time),
        end_time: format_party_time(party.end_time),
        members_count: party.members_count,
        party_status: party.status,
        role,
    }
}
