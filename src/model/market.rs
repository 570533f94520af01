use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MarketLookupParams {
    pub market_name: String,
    pub market_address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MarketResponse {
    pub id: i32,
    pub market_name: String,
    pub market_address: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl From<entity::market::Model> for MarketResponse {
    fn from(market: entity::market::Model) -> Self {
        Self {
            id: market.id,
            market_name: market.market_name,
            market_address: market.market_address,
            latitude: market.latitude,
            longitude: market.longitude,
        }
    }
}
