//! Party status recomputation.

use entity::party::PartyStatus;

/// Status a party should hold given its memberships.
///
/// A RECRUITING party whose ACCEPTED count equals its target becomes JOINED. Every other
/// party keeps its status; recomputation never demotes.
pub fn recompute_status(
    party: &entity::party::Model,
    members: &[entity::party_member::Model],
) -> PartyStatus {
    let accepted = members.iter().filter(|member| member.is_accepted()).count();

    if party.status == PartyStatus::Recruiting
        && usize::try_from(party.members_count).is_ok_and(|target| accepted == target)
    {
        PartyStatus::Joined
    } else {
        party.status
    }
}
