use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use sea_orm::DatabaseConnection;

use crate::server::util::geo::NearbyFilter;

/// Clock shared by every request handler.
pub type SharedClock = Arc<dyn Clock + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub clock: SharedClock,
    pub nearby: NearbyFilter,
}

impl AppState {
    pub fn new(db: DatabaseConnection, nearby: NearbyFilter) -> Self {
        Self {
            db,
            clock: Arc::new(DefaultClock),
            nearby,
        }
    }
}

impl From<(DatabaseConnection, SharedClock)> for AppState {
    fn from((db, clock): (DatabaseConnection, SharedClock)) -> Self {
        Self {
            db,
            clock,
            nearby: NearbyFilter::default(),
        }
    }
}
