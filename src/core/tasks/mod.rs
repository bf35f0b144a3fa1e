pub mod manager;

pub use manager::TaskManager;

use crate::core::CatCard;

/// Results delivered from background tasks to the UI thread. Errors cross the
/// channel as strings; the typed error lives on the task side.
pub enum TaskResult {
    PoolLoaded(Result<Vec<CatCard>, String>),
    LoadingMessage(String),
}
