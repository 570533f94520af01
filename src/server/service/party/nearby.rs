//! Proximity search over open parties.

use rust_decimal::Decimal;
use sea_orm::ConnectionTrait;

use crate::{
    model::party::NearbyPartyResponse,
    server::{
        data::party::PartyRepository,
        error::Error,
        util::{
            geo::{coordinate, haversine_km, BoundingBox, NearbyFilter},
            time::format_party_time,
        },
    },
};

pub struct NearbyPartyQuery<'a, C: ConnectionTrait> {
    db: &'a C,
    filter: &'a NearbyFilter,
}

impl<'a, C: ConnectionTrait> NearbyPartyQuery<'a, C> {
    pub fn new(db: &'a C, filter: &'a NearbyFilter) -> Self {
        Self { db, filter }
    }

    /// Parties within the filter's radius of a point, nearest first.
    ///
    /// Candidates are narrowed by a bounding box in SQL and then by exact haversine
    /// distance. Parties at the same distance keep ID order.
    pub async fn find_nearby(
        &self,
        latitude: Decimal,
        longitude: Decimal,
    ) -> Result<Vec<NearbyPartyResponse>, Error> {
        let (lat, lon) = (coordinate(latitude), coordinate(longitude));
        let bounds = BoundingBox::around(lat, lon, self.filter.radius_km);

        let candidates = PartyRepository::new(self.db)
            .find_in_bounds(&bounds, &self.filter.statuses())
            .await?;

        let mut parties = Vec::new();
        for (party, item) in candidates {
            let distance_km = haversine_km(
                lat,
                lon,
                coordinate(party.latitude),
                coordinate(party.longitude),
            );
            if distance_km > self.filter.radius_km {
                continue;
            }

            let Some(item) = item else {
                return Err(Error::InternalError(format!(
                    "Party {} references missing item {}",
                    party.id, party.item_id
                )));
            };

            parties.push(NearbyPartyResponse {
                id: party.id,
                market_name: party.market_name,
                market_address: party.market_address,
                latitude: party.latitude,
                longitude: party.longitude,
                item_id: item.id,
                category: item.category,
                item_count: party.item_count,
                item_unit: party.item_unit,
                start_time: format_party_time(party.start_time),
                end_time: format_party_time(party.end_time),
                members_count: party.members_count,
                party_status: party.status,
                distance_km,
            });
        }

        parties.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        Ok(parties)
    }
}
