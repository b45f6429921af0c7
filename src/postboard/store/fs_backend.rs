use super::backend::StorageBackend;
use crate::error::{PostError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_filename(key: &str) -> Result<String> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(PostError::Store(format!("Invalid storage key: '{}'", key)));
        }
        Ok(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PostError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let path = self.root.join(Self::slot_filename(key)?);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PostError::Io(e)),
        }
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let path = self.root.join(Self::slot_filename(key)?);
        self.ensure_dir()?;

        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_file, value).map_err(PostError::Io)?;
        fs::rename(&tmp_file, &path).map_err(PostError::Io)?;

        Ok(())
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        Ok(self.root.join(Self::slot_filename(key)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FsBackend) {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().join("data"));
        (dir, backend)
    }

    #[test]
    fn missing_slot_reads_as_none() {
        let (_dir, backend) = setup();
        assert_eq!(backend.read_slot("posts").unwrap(), None);
    }

    #[test]
    fn write_creates_directory_and_overwrites() {
        let (_dir, backend) = setup();
        backend.write_slot("posts", "[1]").unwrap();
        backend.write_slot("posts", "[2]").unwrap();
        assert_eq!(backend.read_slot("posts").unwrap().as_deref(), Some("[2]"));

        let on_disk = fs::read_to_string(backend.root().join("posts.json")).unwrap();
        assert_eq!(on_disk, "[2]");
    }

    #[test]
    fn leaves_no_tmp_files_behind() {
        let (_dir, backend) = setup();
        backend.write_slot("posts", "[]").unwrap();

        for entry in fs::read_dir(backend.root()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn rejects_keys_that_escape_the_root() {
        let (_dir, backend) = setup();
        assert!(matches!(
            backend.write_slot("../posts", "[]"),
            Err(PostError::Store(_))
        ));
        assert!(backend.slot_path("").is_err());
    }
}
