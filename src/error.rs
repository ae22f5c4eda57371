use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Everything that can go wrong while exporting pages.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Extraction was requested with no source document loaded.
    #[error("no document is open")]
    NoDocumentOpen,

    /// No page number could be derived from the caller's selection.
    #[error("no page is selected")]
    NoSelection,

    /// The selected page is outside the document.
    #[error("page {page} is out of range (document has {page_count} pages)")]
    InvalidPageIndex { page: u32, page_count: u32 },

    /// No destination file or directory was chosen.
    #[error("no destination was chosen")]
    NoDestination,

    /// The document could not be read, or is empty or corrupt.
    #[error("document is unreadable or corrupt: {0}")]
    CorruptDocument(#[source] lopdf::Error),

    /// The destination could not be written.
    #[error("could not write {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },
}

/// Notification level a failure should be reported at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A problem with the caller's input; re-invoking with corrected
    /// arguments is expected to succeed.
    Warning,
    /// An I/O or document-structure fault.
    Critical,
}

impl ExtractError {
    pub fn severity(&self) -> Severity {
        match self {
            ExtractError::NoDocumentOpen
            | ExtractError::NoSelection
            | ExtractError::InvalidPageIndex { .. }
            | ExtractError::NoDestination => Severity::Warning,
            ExtractError::CorruptDocument(_) | ExtractError::SaveFailed { .. } => {
                Severity::Critical
            }
        }
    }

    pub(crate) fn save_failed(path: impl Into<PathBuf>, source: lopdf::Error) -> Self {
        ExtractError::SaveFailed {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn input_errors_are_warnings() {
        assert_eq!(ExtractError::NoDocumentOpen.severity(), Severity::Warning);
        assert_eq!(ExtractError::NoSelection.severity(), Severity::Warning);
        assert_eq!(ExtractError::NoDestination.severity(), Severity::Warning);
        assert_eq!(
            ExtractError::InvalidPageIndex {
                page: 9,
                page_count: 5
            }
            .severity(),
            Severity::Warning
        );
    }

    #[test]
    fn io_errors_are_critical() {
        let err = ExtractError::save_failed(
            "/nowhere/out.pdf",
            lopdf::Error::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
        );
        assert_eq!(err.severity(), Severity::Critical);
    }

    #[test]
    fn out_of_range_message_names_both_numbers() {
        let err = ExtractError::InvalidPageIndex {
            page: 6,
            page_count: 5,
        };
        assert_eq!(
            err.to_string(),
            "page 6 is out of range (document has 5 pages)"
        );
    }
}
