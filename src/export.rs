//! Output sinks for ASCII art: text file and system clipboard.

use crate::ascii::AsciiArt;
use std::path::{Path, PathBuf};

/// Default filename for saved art when the caller does not choose one.
pub const DEFAULT_TXT_NAME: &str = "ascii-art.txt";

/// Errors that can occur while exporting ASCII art.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Writing the text file failed.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The system clipboard could not be opened or written.
    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// Persist ASCII art as a UTF-8 text file.
pub fn write_txt(art: &AsciiArt, path: &Path) -> Result<(), ExportError> {
    std::fs::write(path, art.to_string()).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("wrote {} rows to '{}'", art.height(), path.display());
    Ok(())
}

/// Copy ASCII art verbatim to the system clipboard.
pub fn copy_to_clipboard(art: &AsciiArt) -> Result<(), ExportError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(art.to_string())?;

    log::info!("copied {} rows to clipboard", art.height());
    Ok(())
}
