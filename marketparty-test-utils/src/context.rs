//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context holds an
//! in-memory SQLite database, a session backed by a memory store and the fixed clock every
//! service under test reads its timestamps from.

use std::sync::Arc;

use mockable::Clock;
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{error::TestError, FixtureClock};

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let test = TestBuilder::new().with_party_tables().build().await?;
///
/// let leader = test.user().insert_user("leader@example.com").await?;
/// let item = test.catalog().insert_item("Cabbage", "VEGETABLE").await?;
/// let party = test.party().insert_party(leader.id, item.id, 2).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session store for authenticated handler calls
    pub session: Session,
    /// Clock shared with the application state
    pub clock: Arc<dyn Clock + Send + Sync>,
}

impl TestContext {
    /// Convert the database connection and clock into any type that can be built from them.
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main crate.
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, Arc<dyn Clock + Send + Sync>)>,
    {
        T::from((self.db.clone(), self.clock.clone()))
    }

    pub(crate) async fn new(clock: FixtureClock) -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            session,
            clock: Arc::new(clock),
        })
    }

    /// Execute CREATE TABLE statements queued by the builder.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
