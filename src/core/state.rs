// Application state (AppState)

use crate::core::config::Config;
use crate::ids::{IdGenerator, RandomIds};
use crate::stores::user_store::UserStore;
use std::sync::Arc;

/// Shared application state handed to every request handler.
///
/// All fields are wrapped in Arc for efficient cloning across threads.
#[derive(Clone)]
pub struct AppState {
    /// All user records, including their todos
    pub store: Arc<UserStore>,

    /// Identifier source; swappable so tests get deterministic ids
    pub ids: Arc<dyn IdGenerator>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_id_generator(config, Arc::new(RandomIds))
    }

    pub fn with_id_generator(config: Config, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store: Arc::new(UserStore::new()),
            ids,
            config: Arc::new(config),
        }
    }
}
