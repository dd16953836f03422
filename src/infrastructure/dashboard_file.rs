// Provisioned dashboard files on disk
use crate::application::error::{Result, TransferError};
use crate::domain::dashboard::Dashboard;
use std::path::{Path, PathBuf};

/// Location of a provisioned dashboard: `<out_dir>/<folder>/<stem>.json`
pub fn dashboard_path(out_dir: &Path, folder: &str, stem: &str) -> PathBuf {
    out_dir.join(folder).join(format!("{stem}.json"))
}

/// Write `dashboard` as 2-space indented JSON with a trailing newline, creating
/// parent directories as needed. An existing file is overwritten in place.
pub async fn write_dashboard(path: &Path, dashboard: &Dashboard) -> Result<()> {
    let mut contents = serde_json::to_string_pretty(dashboard)?;
    contents.push('\n');

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| TransferError::Filesystem {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    tokio::fs::write(path, contents)
        .await
        .map_err(|source| TransferError::Filesystem {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dashboard_path() {
        let path = dashboard_path(Path::new("/tmp/out"), "vmi-reference", "cpu-ref");
        assert_eq!(path, PathBuf::from("/tmp/out/vmi-reference/cpu-ref.json"));
    }

    #[tokio::test]
    async fn test_write_creates_directories_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dashboard_path(dir.path(), "nested/folder", "cpu-ref");

        let first: Dashboard = serde_json::from_value(json!({ "title": "old", "panels": [1, 2, 3] })).unwrap();
        write_dashboard(&path, &first).await.unwrap();

        let second: Dashboard = serde_json::from_value(json!({ "title": "cpu-ref", "id": null })).unwrap();
        write_dashboard(&path, &second).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"title\": \"cpu-ref\",\n  \"id\": null\n}\n");
    }

    #[tokio::test]
    async fn test_write_into_file_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("folder");
        std::fs::write(&blocker, "not a directory").unwrap();

        let path = dashboard_path(dir.path(), "folder", "cpu-ref");
        let err = write_dashboard(&path, &Dashboard::default()).await.unwrap_err();
        assert!(matches!(err, TransferError::Filesystem { .. }));
    }
}
