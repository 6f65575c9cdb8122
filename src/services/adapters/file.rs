//! File export adapter: materializes "download this content" as a file write
//! into a target directory.

use crate::services::ports::export::FileExporter;
use std::path::PathBuf;

pub struct DownloadExporter {
    dir: PathBuf,
}

impl DownloadExporter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Exports into the current working directory.
    pub fn current_dir() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }
}

impl FileExporter for DownloadExporter {
    fn export(&self, content: &str, mime: &str, filename: &str) {
        let path = self.dir.join(filename);
        match std::fs::write(&path, content) {
            Ok(()) => {
                tracing::info!(path = %path.display(), mime, "exported markdown");
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "export failed");
            }
        }
    }
}
