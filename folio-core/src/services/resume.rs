//! Resume service - the downloadable resume PDF
//!
//! Uploading copies the PDF into the data directory as `resume.pdf` and
//! records its original name, stored path and SHA-256 in storage.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::domain::result::{Error, Result};
use crate::domain::{ResumeInfo, MAX_RESUME_BYTES};
use crate::ports::storage::{RESUME_NAME_KEY, RESUME_PATH_KEY, RESUME_SHA256_KEY};
use crate::ports::KeyValueStorage;

/// File name of the stored copy inside the data directory
pub const RESUME_FILE_NAME: &str = "resume.pdf";

const PDF_MAGIC: &[u8] = b"%PDF-";

pub struct ResumeService {
    storage: Arc<dyn KeyValueStorage>,
    data_dir: PathBuf,
}

impl ResumeService {
    pub fn new(storage: Arc<dyn KeyValueStorage>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            data_dir: data_dir.into(),
        }
    }

    /// Where an uploaded resume is stored
    pub fn stored_path(&self) -> PathBuf {
        self.data_dir.join(RESUME_FILE_NAME)
    }

    /// The published resume, if any
    pub fn current(&self) -> Result<Option<ResumeInfo>> {
        let Some(name) = self.storage.get(RESUME_NAME_KEY)? else {
            return Ok(None);
        };
        let path = self
            .storage
            .get(RESUME_PATH_KEY)?
            .unwrap_or_else(|| self.stored_path().display().to_string());
        let sha256 = self.storage.get(RESUME_SHA256_KEY)?;

        Ok(Some(ResumeInfo { name, path, sha256 }))
    }

    /// Validate and publish a new resume, replacing any previous one.
    ///
    /// Only PDF files up to 5 MiB are accepted.
    pub fn upload(&self, source: &Path) -> Result<ResumeInfo> {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::validation(format!("{} is not a file", source.display())))?;

        let metadata = fs::metadata(source)?;
        if !metadata.is_file() {
            return Err(Error::validation(format!("{} is not a file", source.display())));
        }
        if metadata.len() > MAX_RESUME_BYTES {
            return Err(Error::validation(format!(
                "resume must be at most 5 MB, {} is {} bytes",
                name,
                metadata.len()
            )));
        }

        let bytes = fs::read(source)?;
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(Error::validation(format!("{} is not a PDF file", name)));
        }

        let sha256 = hex::encode(Sha256::digest(&bytes));

        fs::create_dir_all(&self.data_dir)?;
        let target = self.stored_path();
        let mut tmp = NamedTempFile::new_in(&self.data_dir)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&target)
            .map_err(|e| Error::storage(format!("Failed to store resume: {}", e)))?;

        let info = ResumeInfo {
            name,
            path: target.display().to_string(),
            sha256: Some(sha256),
        };
        self.storage.set(RESUME_NAME_KEY, &info.name)?;
        self.storage.set(RESUME_PATH_KEY, &info.path)?;
        if let Some(digest) = &info.sha256 {
            self.storage.set(RESUME_SHA256_KEY, digest)?;
        }

        Ok(info)
    }

    /// Unpublish the resume and delete the stored copy.
    ///
    /// Returns `Ok(false)` if there was no resume.
    pub fn remove(&self) -> Result<bool> {
        let existed = self.current()?.is_some();

        self.storage.remove(RESUME_NAME_KEY)?;
        self.storage.remove(RESUME_PATH_KEY)?;
        self.storage.remove(RESUME_SHA256_KEY)?;

        let stored = self.stored_path();
        if stored.exists() {
            fs::remove_file(&stored)?;
        }

        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStorage;
    use tempfile::tempdir;

    fn service(dir: &Path) -> (Arc<InMemoryStorage>, ResumeService) {
        let storage = Arc::new(InMemoryStorage::new());
        let service = ResumeService::new(storage.clone(), dir.join("data"));
        (storage, service)
    }

    #[test]
    fn test_upload_copies_and_records() {
        let dir = tempdir().unwrap();
        let (storage, service) = service(dir.path());
        let source = dir.path().join("cv-2024.pdf");
        fs::write(&source, b"%PDF-1.7\nhello").unwrap();

        let info = service.upload(&source).unwrap();
        assert_eq!(info.name, "cv-2024.pdf");
        assert_eq!(fs::read(service.stored_path()).unwrap(), b"%PDF-1.7\nhello");
        assert_eq!(info.sha256.as_ref().map(|s| s.len()), Some(64));
        assert_eq!(storage.get(RESUME_NAME_KEY).unwrap().as_deref(), Some("cv-2024.pdf"));
        assert_eq!(service.current().unwrap(), Some(info));
    }

    #[test]
    fn test_upload_rejects_non_pdf_and_oversized() {
        let dir = tempdir().unwrap();
        let (_, service) = service(dir.path());

        let text = dir.path().join("cv.pdf");
        fs::write(&text, b"just text").unwrap();
        assert!(matches!(service.upload(&text), Err(Error::Validation(_))));

        let big = dir.path().join("big.pdf");
        let mut content = PDF_MAGIC.to_vec();
        content.resize(MAX_RESUME_BYTES as usize + 1, b'0');
        fs::write(&big, content).unwrap();
        assert!(matches!(service.upload(&big), Err(Error::Validation(_))));

        assert_eq!(service.current().unwrap(), None);
    }

    #[test]
    fn test_remove() {
        let dir = tempdir().unwrap();
        let (_, service) = service(dir.path());
        assert!(!service.remove().unwrap());

        let source = dir.path().join("cv.pdf");
        fs::write(&source, b"%PDF-1.4").unwrap();
        service.upload(&source).unwrap();

        assert!(service.remove().unwrap());
        assert_eq!(service.current().unwrap(), None);
        assert!(!service.stored_path().exists());
    }
}
