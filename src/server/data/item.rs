use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    /// Creates a new instance of [`ItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, item_id: i32) -> Result<Option<entity::item::Model>, DbErr> {
        entity::prelude::Item::find_by_id(item_id).one(self.db).await
    }
}
