use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".".to_string())
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }

    async fn remove_file(&self, path: &str) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);
        fs::remove_file(full_path)?;
        Ok(())
    }

    async fn list_files(&self, dir: &str, pattern: &str) -> Result<Vec<String>> {
        let matcher = glob::Pattern::new(pattern)?;
        let full_path = Path::new(&self.base_path).join(dir);

        // 目錄不存在時直接回傳 IO 錯誤
        let mut names = Vec::new();
        for entry in fs::read_dir(&full_path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                tracing::warn!("Skipping non UTF-8 file name: {:?}", file_name);
                continue;
            };
            // 符號連結依目標判斷是否為檔案
            if matcher.matches(name) && entry.path().is_file() {
                names.push(name.to_string());
            }
        }

        names.sort();
        tracing::debug!(
            "Found {} files matching '{}' in {}",
            names.len(),
            pattern,
            full_path.display()
        );
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_files_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["consultations_rows_b.csv", "consultations_rows_a.csv", "other.csv"] {
            fs::write(temp_dir.path().join(name), "id\n").unwrap();
        }
        fs::create_dir(temp_dir.path().join("consultations_rows_dir.csv")).unwrap();

        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        let names = storage
            .list_files(".", "consultations_rows*.csv")
            .await
            .unwrap();

        assert_eq!(
            names,
            vec!["consultations_rows_a.csv", "consultations_rows_b.csv"]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_list_files_follows_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        let exports = temp_dir.path().join("exports");
        let input = temp_dir.path().join("in");
        fs::create_dir_all(&exports).unwrap();
        fs::create_dir_all(&input).unwrap();
        fs::write(exports.join("real.csv"), "id\nabc\n").unwrap();
        std::os::unix::fs::symlink(
            exports.join("real.csv"),
            input.join("consultations_rows_1.csv"),
        )
        .unwrap();
        std::os::unix::fs::symlink(
            exports.join("missing.csv"),
            input.join("consultations_rows_2.csv"),
        )
        .unwrap();

        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        let names = storage
            .list_files("in", "consultations_rows*.csv")
            .await
            .unwrap();

        assert_eq!(names, vec!["consultations_rows_1.csv"]);
        assert_eq!(
            storage.read_file("in/consultations_rows_1.csv").await.unwrap(),
            b"id\nabc\n"
        );
    }

    #[tokio::test]
    async fn test_list_files_missing_directory_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        assert!(storage.list_files("does-not-exist", "*.csv").await.is_err());
    }

    #[tokio::test]
    async fn test_write_then_read_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_file("nested/out.json", b"{}").await.unwrap();
        assert_eq!(storage.read_file("nested/out.json").await.unwrap(), b"{}");

        storage.remove_file("nested/out.json").await.unwrap();
        assert!(storage.read_file("nested/out.json").await.is_err());
    }
}
