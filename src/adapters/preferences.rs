use crate::domain::ports::PreferenceStore;
use crate::utils::error::Result;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Preferences kept as a flat JSON object in a single file.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for FilePreferences {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all().await?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let data = serde_json::to_vec_pretty(&entries)?;
        tokio::fs::write(&self.path, data).await?;
        tracing::debug!(path = %self.path.display(), key, "preference written");
        Ok(())
    }
}

/// Process-local preferences, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    entries: Mutex<HashMap<String, String>>,
}

impl PreferenceStore for MemoryPreferences {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let prefs = FilePreferences::new(dir.path().join("absent.json"));
        assert_eq!(prefs.get("anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_creates_parent_dirs_and_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let prefs = FilePreferences::new(&path);

        prefs.set("theme", "dark").await.unwrap();
        prefs.set("globaldrive_terms_accepted", "true").await.unwrap();

        let reopened = FilePreferences::new(&path);
        assert_eq!(reopened.get("theme").await.unwrap().as_deref(), Some("dark"));
        assert_eq!(
            reopened.get("globaldrive_terms_accepted").await.unwrap().as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn corrupted_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let prefs = FilePreferences::new(&path);
        assert!(prefs.get("globaldrive_terms_accepted").await.is_err());
    }
}
