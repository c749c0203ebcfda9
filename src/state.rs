use crate::models::{JournalData, JournalEntry};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<JournalData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: JournalData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
        }
    }

    /// Copy of the current entries, so callers can work without holding the lock.
    pub async fn snapshot(&self) -> Vec<JournalEntry> {
        self.data.lock().await.entries.clone()
    }
}
