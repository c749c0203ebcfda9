use crate::errors::AppError;
use crate::models::JournalData;
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

pub async fn load_data(path: &Path) -> JournalData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<JournalData>(&bytes) {
            Ok(data) => {
                info!("loaded {} journal entries from {}", data.entries.len(), path.display());
                data
            }
            Err(err) => {
                error!("failed to parse journal file: {err}");
                JournalData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => JournalData::default(),
        Err(err) => {
            error!("failed to read journal file: {err}");
            JournalData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &JournalData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JournalEntry;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("mood_journal_{}_{name}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn persisted_entries_load_back() {
        let path = temp_path("roundtrip");
        let data = JournalData {
            entries: vec![JournalEntry {
                id: "1".into(),
                date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
                mood: Some("Sad".into()),
                text: "rainy".into(),
                tags: vec!["weather".into()],
            }],
        };

        persist_data(&path, &data).await.unwrap();
        let loaded = load_data(&path).await;
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.entries, data.entries);
    }

    #[tokio::test]
    async fn missing_or_corrupt_file_loads_empty() {
        let missing = temp_path("missing");
        assert!(load_data(&missing).await.entries.is_empty());

        let corrupt = temp_path("corrupt");
        std::fs::write(&corrupt, b"{ not json").unwrap();
        let loaded = load_data(&corrupt).await;
        let _ = std::fs::remove_file(&corrupt);
        assert!(loaded.entries.is_empty());
    }
}
