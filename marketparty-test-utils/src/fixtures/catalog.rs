use rust_decimal::Decimal;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_item(
        &self,
        name: &str,
        category: &str,
    ) -> Result<entity::item::Model, TestError> {
        Ok(entity::prelude::Item::insert(entity::item::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            category: ActiveValue::Set(category.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_market(
        &self,
        market_name: &str,
        market_address: &str,
        latitude: Decimal,
        longitude: Decimal,
    ) -> Result<entity::market::Model, TestError> {
        Ok(entity::prelude::Market::insert(entity::market::ActiveModel {
            market_name: ActiveValue::Set(market_name.to_string()),
            market_address: ActiveValue::Set(market_address.to_string()),
            latitude: ActiveValue::Set(latitude),
            longitude: ActiveValue::Set(longitude),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
