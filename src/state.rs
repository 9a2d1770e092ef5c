use std::sync::Arc;

use crate::{
    config::AppConfig,
    db::{DbPool, OrmConn, orm_from_pool},
    events::EventRecorder,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
    pub config: Arc<AppConfig>,
    pub events: EventRecorder,
}

impl AppState {
    pub fn new(pool: DbPool, config: AppConfig, events: EventRecorder) -> Self {
        let orm = orm_from_pool(&pool);
        Self {
            pool,
            orm,
            config: Arc::new(config),
            events,
        }
    }
}
