use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct MarketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MarketRepository<'a, C> {
    /// Creates a new instance of [`MarketRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_name_and_address(
        &self,
        market_name: &str,
        market_address: &str,
    ) -> Result<Option<entity::market::Model>, DbErr> {
        entity::prelude::Market::find()
            .filter(entity::market::Column::MarketName.eq(market_name))
            .filter(entity::market::Column::MarketAddress.eq(market_address))
            .one(self.db)
            .await
    }
}
