use std::sync::Arc;

use crate::config::Config;
use crate::db::DatabaseBackend;
use crate::llm::LlmProvider;
use crate::services::TutorService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<dyn DatabaseBackend>,
    pub llm: LlmProvider,
    pub tutor: Arc<TutorService>,
}

impl AppState {
    pub fn new(config: Config, db: Arc<dyn DatabaseBackend>, llm: LlmProvider) -> Self {
        let config = Arc::new(config);
        let tutor = Arc::new(TutorService::new(db.clone(), llm.clone(), config.clone()));

        Self {
            config,
            db,
            llm,
            tutor,
        }
    }
}
