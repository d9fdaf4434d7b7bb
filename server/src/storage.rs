use std::path::{Path, PathBuf};

use async_trait::async_trait;
use digitpad_shared::{Label, PIXEL_COUNT};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid sample file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("sample {name} has {count} pixels")]
    PixelCount { name: String, count: usize },
    #[error("invalid sample name {0}")]
    InvalidName(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoredSample {
    pub label: Label,
    pub name: String,
}

#[async_trait]
pub trait Storage: Send + Sync {
    /// Persists one labelled sample and returns the name it was stored as.
    async fn save_sample(&self, label: Label, pixels: &[u8]) -> Result<String, StorageError>;
    async fn list_samples(&self) -> Result<Vec<StoredSample>, StorageError>;
    async fn load_sample(&self, name: &str) -> Result<Vec<u8>, StorageError>;
}

/// Stores each sample as `<digit>-<uuid>.json` holding the bare pixel array.
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn sample_path(&self, name: &str) -> Result<PathBuf, StorageError> {
        if label_from_name(name).is_none() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(StorageError::InvalidName(name.to_string()));
        }
        Ok(self.data_dir.join(name))
    }
}

pub fn sample_name(label: Label, id: Uuid) -> String {
    format!("{}-{id}.json", label.digit())
}

/// The label is the first character of a sample's file name.
pub fn label_from_name(name: &str) -> Option<Label> {
    if !name.ends_with(".json") {
        return None;
    }
    let digit = name.chars().next()?.to_digit(10)?;
    Label::new(digit as u8)
}

#[async_trait]
impl Storage for FileStorage {
    async fn save_sample(&self, label: Label, pixels: &[u8]) -> Result<String, StorageError> {
        let name = sample_name(label, Uuid::now_v7());
        let path = self.data_dir.join(&name);
        let payload = serde_json::to_vec(pixels).map_err(|source| StorageError::Json {
            path: path.clone(),
            source,
        })?;
        tokio::fs::write(&path, payload)
            .await
            .map_err(|source| StorageError::Io { path, source })?;
        Ok(name)
    }

    async fn list_samples(&self) -> Result<Vec<StoredSample>, StorageError> {
        let io_error = |source| StorageError::Io {
            path: self.data_dir.clone(),
            source,
        };
        let mut entries = tokio::fs::read_dir(&self.data_dir).await.map_err(io_error)?;
        let mut samples = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if let Some(label) = label_from_name(&name) {
                samples.push(StoredSample { label, name });
            }
        }
        samples.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(samples)
    }

    async fn load_sample(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.sample_path(name)?;
        let payload = tokio::fs::read(&path)
            .await
            .map_err(|source| StorageError::Io {
                path: path.clone(),
                source,
            })?;
        let pixels: Vec<u8> =
            serde_json::from_slice(&payload).map_err(|source| StorageError::Json { path, source })?;
        if pixels.len() != PIXEL_COUNT {
            return Err(StorageError::PixelCount {
                name: name.to_string(),
                count: pixels.len(),
            });
        }
        Ok(pixels)
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
