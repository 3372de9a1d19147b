use qr_layout::{PrintDispatcher, Result};
use std::path::PathBuf;

/// Print dispatcher that writes the print document to a file
pub struct FileDispatcher {
    path: PathBuf,
}

impl FileDispatcher {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PrintDispatcher for FileDispatcher {
    async fn dispatch(&self, html: String) -> Result<()> {
        tokio::fs::write(&self.path, html).await?;
        log::info!("Print document written to {}", self.path.display());
        Ok(())
    }
}
