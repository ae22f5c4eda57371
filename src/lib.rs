//! Export single pages of a PDF as standalone PDF files.
//!
//! Open a document, then save one page — or every page — as its own
//! single-page PDF:
//!
//! ```no_run
//! use expdf::{extract_single_page, PdfDocument};
//! use std::path::Path;
//!
//! # fn main() -> expdf::Result<()> {
//! let doc = PdfDocument::open("informe.pdf")?;
//! extract_single_page(Some(&doc), Some(3), Some(Path::new("pagina3.pdf")))?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod extract;
pub mod label;
pub mod pdf;

pub use error::{ExtractError, Result, Severity};
pub use extract::{extract_all_pages, extract_all_pages_with, extract_single_page};
pub use pdf::{PdfDocument, PdfInfo};
