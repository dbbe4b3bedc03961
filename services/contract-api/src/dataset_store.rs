use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::PromptExample;

pub const DEFAULT_DATASET_PATH: &str = "contract_prompts.json";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Sibling of the dataset file that receives the bytes before the rename.
pub fn tmp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_DATASET_PATH.to_string());
    path.with_file_name(format!(".{name}.tmp"))
}

/// Only a definite "not found" counts as absent; any other stat failure is
/// returned so an unreadable dataset is never mistaken for a missing one.
pub async fn dataset_exists(path: &Path) -> Result<bool, DatasetError> {
    Ok(tokio::fs::try_exists(path).await?)
}

/// Pretty JSON (2-space indent), written to a temp file then renamed over
/// `path`, so readers never observe a half-written dataset.
pub async fn save_dataset(path: &Path, examples: &[PromptExample]) -> Result<(), DatasetError> {
    let bytes = serde_json::to_vec_pretty(examples)?;
    let tmp = tmp_path(path);

    tokio::fs::write(&tmp, &bytes).await?;
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    Ok(())
}

pub async fn load_dataset(path: &Path) -> Result<Vec<PromptExample>, DatasetError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PromptExample> {
        vec![
            PromptExample { prompt: "token".into(), output: "contract T {}".into() },
            PromptExample { prompt: "vault".into(), output: "contract V {}".into() },
        ]
    }

    #[tokio::test]
    async fn test_save_load_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contract_prompts.json");

        assert!(!dataset_exists(&path).await.unwrap());
        save_dataset(&path, &sample()).await.unwrap();
        assert!(dataset_exists(&path).await.unwrap());
        assert!(!tmp_path(&path).exists());

        assert_eq!(load_dataset(&path).await.unwrap(), sample());
    }

    #[tokio::test]
    async fn test_file_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.json");
        save_dataset(&path, &sample()[..1]).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "[\n  {\n    \"prompt\": \"token\",\n    \"output\": \"contract T {}\"\n  }\n]"
        );
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.json");
        save_dataset(&path, &sample()).await.unwrap();
        save_dataset(&path, &[]).await.unwrap();
        assert!(load_dataset(&path).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(load_dataset(&missing).await, Err(DatasetError::Io(_))));

        let corrupt = dir.path().join("corrupt.json");
        std::fs::write(&corrupt, "[{\"prompt\": \"half").unwrap();
        assert!(matches!(load_dataset(&corrupt).await, Err(DatasetError::Json(_))));
    }

    #[tokio::test]
    async fn test_exists_surfaces_stat_errors() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain");
        std::fs::write(&plain, "not a directory").unwrap();

        // ENOTDIR, not ENOENT
        let under_file = plain.join("contract_prompts.json");
        assert!(matches!(dataset_exists(&under_file).await, Err(DatasetError::Io(_))));
    }

    #[test]
    fn test_tmp_path_is_sibling() {
        let p = Path::new("/data/contract_prompts.json");
        assert_eq!(tmp_path(p), PathBuf::from("/data/.contract_prompts.json.tmp"));
    }
}
