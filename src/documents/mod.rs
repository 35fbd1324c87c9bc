//! Document loaders and the content-extraction seam.
//!
//! Every file handed to a prompt or datasource goes through one mapping:
//! extension to [`Loader`] variant (or unsupported, which fails before any
//! network call). The actual extraction is behind the [`DocumentReader`]
//! trait; rich PDF/spreadsheet/DOCX decoding plugs in there without
//! touching the request path.

use crate::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

/// The document kinds the service accepts as prompt or datasource content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Loader {
    Pdf,
    Excel,
    Csv,
    Docx,
    Image,
}

impl Loader {
    /// Map a file extension to a loader; `None` means unsupported.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Excel),
            "docx" => Some(Self::Docx),
            "png" | "tif" | "jpeg" | "jpg" => Some(Self::Image),
            _ => None,
        }
    }

    /// Declared mime type for an upload with this loader.
    pub fn mime_type(&self, ext: &str) -> String {
        match self {
            Self::Pdf => "application/pdf".to_string(),
            Self::Csv => "application/csv".to_string(),
            Self::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet".to_string()
            }
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                    .to_string()
            }
            Self::Image => format!("image/{}", ext.to_ascii_lowercase()),
        }
    }
}

/// Extracted document payload: text for readable formats, raw bytes for
/// images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentContent {
    Text(String),
    Bytes(Vec<u8>),
}

impl DocumentContent {
    /// Base64 encoding of the payload, as attached to prompts and media.
    pub fn to_base64(&self) -> String {
        match self {
            Self::Text(text) => STANDARD.encode(text.as_bytes()),
            Self::Bytes(bytes) => STANDARD.encode(bytes),
        }
    }

    /// Payload size in bytes before encoding.
    pub fn byte_len(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Bytes(bytes) => bytes.len(),
        }
    }
}

/// Seam for content extraction.
///
/// The SDK only needs "given a file, obtain a payload"; third-party readers
/// implement this trait to supply real PDF text extraction, spreadsheet
/// flattening and the like.
pub trait DocumentReader: Send + Sync {
    fn read(&self, path: &Path, loader: Loader) -> Result<DocumentContent>;
}

/// Default reader: images as raw bytes, everything else as UTF-8 text.
pub struct FsReader;

impl DocumentReader for FsReader {
    fn read(&self, path: &Path, loader: Loader) -> Result<DocumentContent> {
        match loader {
            Loader::Image => Ok(DocumentContent::Bytes(std::fs::read(path)?)),
            _ => Ok(DocumentContent::Text(std::fs::read_to_string(path)?)),
        }
    }
}

/// Resolve the loader and mime type for a file path, failing with
/// [`Error::UnsupportedFileType`] when no loader matches.
pub(crate) fn loader_for_path(path: &Path) -> Result<(Loader, String)> {
    let ext = path
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("");
    let loader = Loader::from_extension(ext).ok_or_else(|| Error::UnsupportedFileType {
        extension: ext.to_string(),
        file: file_name(path),
    })?;
    Ok((loader, loader.mime_type(ext)))
}

/// Final component of a path, as the attachment/media name.
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Whether a datasource entry is a URL rather than a local file.
pub(crate) fn looks_like_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("www.")
}
