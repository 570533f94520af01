//! Declarative test builder.
//!
//! Configuration methods are queued and executed in order during the final `build()` call:
//! tables first, then users, then catalog rows.

use chrono::{DateTime, Utc};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, FixtureClock, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_party_tables: bool,

    users: Vec<String>,
    items: Vec<(String, String)>,

    clock: FixtureClock,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_party_tables: false,
            users: Vec::new(),
            items: Vec::new(),
            clock: FixtureClock::default(),
        }
    }

    /// Add every table the party workflow touches.
    ///
    /// Creates User, Item, Market, Party, PartyMember and ChatMessage.
    pub fn with_party_tables(mut self) -> Self {
        self.include_party_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// ```no_run
    /// use marketparty_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), marketparty_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Item)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user without a registered location.
    ///
    /// Users are inserted in call order, so the first one gets ID 1.
    pub fn with_user(mut self, email: &str) -> Self {
        self.users.push(email.to_string());
        self
    }

    /// Insert a catalog item.
    ///
    /// Items are inserted in call order, so the first one gets ID 1.
    pub fn with_item(mut self, name: &str, category: &str) -> Self {
        self.items.push((name.to_string(), category.to_string()));
        self
    }

    /// Pin the fixture clock to a specific instant.
    pub fn with_clock(mut self, utc_now: DateTime<Utc>) -> Self {
        self.clock = FixtureClock::new(utc_now);
        self
    }

    /// Build the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database with the requested tables and fixtures
    /// - `Err(TestError::DbErr)` - Table creation or a fixture insert failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new(self.clock).await?;

        let mut all_tables = Vec::new();

        if self.include_party_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Item),
                schema.create_table_from_entity(entity::prelude::Market),
                schema.create_table_from_entity(entity::prelude::Party),
                schema.create_table_from_entity(entity::prelude::PartyMember),
                schema.create_table_from_entity(entity::prelude::ChatMessage),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for email in self.users {
            setup.user().insert_user(&email).await?;
        }

        for (name, category) in self.items {
            setup.catalog().insert_item(&name, &category).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
