//! Document loading
//!
//! Only plain-text documents are read here. Converting PDFs and scans to
//! text happens upstream of this tool.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Where the document text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Stdin,
    File(PathBuf),
}

impl DocumentSource {
    /// `-` means standard input; anything else is a path
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            DocumentSource::Stdin
        } else {
            DocumentSource::File(arg.to_path_buf())
        }
    }

    /// Reads the document as text, replacing invalid UTF-8
    pub fn load(&self) -> Result<String, CliError> {
        match self {
            DocumentSource::Stdin => {
                read_lossy(io::stdin().lock()).map_err(|e| CliError::io("<stdin>", e))
            }
            DocumentSource::File(path) => load_file(path),
        }
    }
}

/// Reads a `.txt` document; the extension check is case-insensitive
pub fn load_file(path: &Path) -> Result<String, CliError> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if extension != "txt" {
        let shown = if extension.is_empty() {
            path.display().to_string()
        } else {
            format!(".{}", extension)
        };
        return Err(CliError::UnsupportedFormat(shown));
    }

    let bytes = fs::read(path).map_err(|e| CliError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "document read");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads everything from `reader`, replacing invalid UTF-8
pub fn read_lossy<R: Read>(mut reader: R) -> io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
