//! The page export operations.
//!
//! Both operations take their inputs as explicit, possibly-absent arguments
//! and check every precondition before touching the filesystem. They run
//! synchronously on the caller's thread and never mutate the source
//! document.

use crate::error::{ExtractError, Result};
use crate::label::default_page_name;
use crate::pdf::PdfDocument;
use std::path::Path;

/// Export one page of `source` as a standalone single-page PDF at
/// `destination`.
///
/// `page` is the 1-based page number derived from the caller's selection
/// (see [`crate::label::page_number`]). Fails with [`ExtractError::NoDocumentOpen`],
/// [`ExtractError::NoSelection`], or [`ExtractError::NoDestination`] when the
/// corresponding input is absent, and with [`ExtractError::InvalidPageIndex`]
/// when the page is outside the document; none of these write anything.
pub fn extract_single_page(
    source: Option<&PdfDocument>,
    page: Option<u32>,
    destination: Option<&Path>,
) -> Result<()> {
    let source = source.ok_or(ExtractError::NoDocumentOpen)?;
    let page = page.ok_or(ExtractError::NoSelection)?;
    let destination = destination.ok_or(ExtractError::NoDestination)?;

    let mut single = source.copy_page(page)?;
    PdfDocument::save(&mut single, destination)
}

/// Export every page of `source` into `directory`, one single-page PDF per
/// page, named `documento1.pdf` … `documentoN.pdf` in page order.
pub fn extract_all_pages(source: Option<&PdfDocument>, directory: Option<&Path>) -> Result<()> {
    extract_all_pages_with(source, directory, default_page_name)
}

/// Export every page of `source` into `directory`, naming each file with
/// `naming` applied to its 1-based page number.
///
/// Pages are exported in ascending order. A failure on one page does not
/// abort the remaining pages and does not undo the files already written;
/// each failure is logged as it happens and the last one is returned after
/// the whole run. A document with no pages succeeds without writing
/// anything.
pub fn extract_all_pages_with<F>(
    source: Option<&PdfDocument>,
    directory: Option<&Path>,
    naming: F,
) -> Result<()>
where
    F: Fn(u32) -> String,
{
    let source = source.ok_or(ExtractError::NoDocumentOpen)?;
    let directory = directory.ok_or(ExtractError::NoDestination)?;

    let mut last_failure = None;
    for page in 1..=source.page_count() {
        let destination = directory.join(naming(page));
        let result = source
            .copy_page(page)
            .and_then(|mut single| PdfDocument::save(&mut single, &destination));
        if let Err(err) = result {
            log::warn!("page {page} failed: {err}");
            last_failure = Some(err);
        }
    }

    match last_failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
