//! The two in-memory stores, each behind its own lock.
//!
//! Nothing here outlives the process.

use tokio::sync::Mutex;
use tracing::info;

use crate::config::ActivitiesConfig;
use crate::error::ConfigError;

pub mod activities;
pub mod seed;
pub mod todos;

pub use activities::ActivityRegistry;
pub use todos::TodoStore;

/// Shared by every handler. Each store is mutated only while its lock is held.
#[derive(Debug)]
pub struct Database {
    pub activities: Mutex<ActivityRegistry>,
    pub todos: Mutex<TodoStore>,
}

impl Database {
    pub fn new(activities: ActivityRegistry, todos: TodoStore) -> Self {
        Self {
            activities: Mutex::new(activities),
            todos: Mutex::new(todos),
        }
    }

    /// Seeds the activity registry and starts with no todos
    pub fn init(config: &ActivitiesConfig) -> Result<Self, ConfigError> {
        let activities = match &config.seed_file {
            Some(path) => {
                info!("Loading activities from {}", path.display());
                seed::load_activities(path)?
            }
            None => seed::default_activities(),
        };

        info!("Seeded {} activities", activities.len());
        if config.enforce_capacity {
            info!("Activity capacity is enforced");
        }

        let registry =
            ActivityRegistry::new(activities).with_capacity_enforced(config.enforce_capacity);
        Ok(Self::new(registry, TodoStore::new()))
    }
}
