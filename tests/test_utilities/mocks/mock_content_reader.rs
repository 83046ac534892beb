use file_adapters::prelude::*;
use std::path::{Path, PathBuf};

/// Mock ContentReader returning canned content or a not-found error
#[derive(Clone)]
pub struct MockContentReader {
    pub content: String,
    pub should_fail: bool,
    pub requested: std::sync::Arc<std::sync::Mutex<Vec<PathBuf>>>,
}

impl MockContentReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
            requested: Default::default(),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }

    pub fn requested_paths(&self) -> Vec<PathBuf> {
        self.requested.lock().unwrap().clone()
    }
}

impl ContentReader for MockContentReader {
    fn read(&self, path: &Path) -> Result<String> {
        self.requested.lock().unwrap().push(path.to_path_buf());
        if self.should_fail {
            return Err(ReaderError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        Ok(self.content.clone())
    }
}
