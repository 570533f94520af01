use rust_decimal::Decimal;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(&self, email: &str) -> Result<entity::user::Model, TestError> {
        self.insert(email, None, None).await
    }

    pub async fn insert_user_at(
        &self,
        email: &str,
        latitude: Decimal,
        longitude: Decimal,
    ) -> Result<entity::user::Model, TestError> {
        self.insert(email, Some(latitude), Some(longitude)).await
    }

    async fn insert(
        &self,
        email: &str,
        latitude: Option<Decimal>,
        longitude: Option<Decimal>,
    ) -> Result<entity::user::Model, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            latitude: ActiveValue::Set(latitude),
            longitude: ActiveValue::Set(longitude),
            created_at: ActiveValue::Set(self.setup.clock.utc().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
