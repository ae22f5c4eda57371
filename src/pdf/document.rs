use crate::error::{ExtractError, Result};
use lopdf::{Document, Object, ObjectId};
use serde::Serialize;
use std::path::Path;

/// An open PDF document.
///
/// Wraps the parsed `lopdf` representation and exposes the handful of
/// operations page export needs: page count, per-page copy, save, and the
/// document information dictionary. The wrapped document is never mutated;
/// `copy_page` works on a clone.
#[derive(Debug)]
pub struct PdfDocument {
    doc: Document,
}

impl PdfDocument {
    /// Open a document from a file on disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let doc = Document::load(path).map_err(ExtractError::CorruptDocument)?;
        let doc = PdfDocument { doc };
        log::debug!("opened {} ({} pages)", path.display(), doc.page_count());
        Ok(doc)
    }

    /// Open a document already held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let doc = Document::load_mem(bytes).map_err(ExtractError::CorruptDocument)?;
        Ok(PdfDocument { doc })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Copy page `page` (1-based), and only that page, into a new document.
    ///
    /// The result is a self-contained single-page PDF: the source is cloned,
    /// every other page is deleted, and orphaned objects are pruned so the
    /// copied page keeps its content and resources without dragging the rest
    /// of the file along.
    pub fn copy_page(&self, page: u32) -> Result<Document> {
        let page_count = self.page_count();
        if page == 0 || page > page_count {
            return Err(ExtractError::InvalidPageIndex { page, page_count });
        }

        let mut single = self.doc.clone();
        let others: Vec<u32> = (1..=page_count).rev().filter(|&n| n != page).collect();
        if !others.is_empty() {
            single.delete_pages(&others);
        }
        single.prune_objects();
        single.compress();
        Ok(single)
    }

    /// Persist a document to `path`, overwriting any existing file.
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        let path = path.as_ref();
        doc.save(path)
            .map_err(|source| ExtractError::save_failed(path, lopdf::Error::IO(source)))?;
        Ok(())
    }

    /// Read the document information dictionary.
    pub fn info(&self) -> PdfInfo {
        let mut info = PdfInfo {
            page_count: self.page_count(),
            ..PdfInfo::default()
        };

        if let Ok(Object::Reference(info_ref)) = self.doc.trailer.get(b"Info") {
            if let Ok(Object::Dictionary(dict)) = self.doc.get_object(*info_ref) {
                info.title = string_entry(dict, b"Title");
                info.author = string_entry(dict, b"Author");
                info.subject = string_entry(dict, b"Subject");
                info.keywords = string_entry(dict, b"Keywords");
                info.creator = string_entry(dict, b"Creator");
                info.producer = string_entry(dict, b"Producer");
                info.creation_date = string_entry(dict, b"CreationDate");
                info.mod_date = string_entry(dict, b"ModDate");
            }
        }

        info
    }

    /// 1-based page numbers with their page object ids, in page order.
    pub fn pages(&self) -> Vec<(u32, ObjectId)> {
        let mut pages: Vec<_> = self.doc.get_pages().into_iter().collect();
        pages.sort_by_key(|(num, _)| *num);
        pages
    }
}

/// Document-level metadata plus the page count.
#[derive(Debug, Default, Clone, Serialize)]
pub struct PdfInfo {
    pub page_count: u32,
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<String>,
    pub mod_date: Option<String>,
}

fn string_entry(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key) {
        Ok(Object::String(bytes, _)) => Some(decode_pdf_string(bytes)),
        _ => None,
    }
}

// Info dictionary strings are either UTF-16 BE with a BOM or PDFDocEncoding;
// the latter is decoded as Latin-1, which covers its printable range.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        bytes.iter().map(|&b| b as char).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_utf16_with_bom() {
        let bytes = [0xFE, 0xFF, 0x00, 0x48, 0x00, 0x6F, 0x00, 0x6C, 0x00, 0x61];
        assert_eq!(decode_pdf_string(&bytes), "Hola");
    }

    #[test]
    fn decodes_latin1_without_bom() {
        let bytes = b"P\xE1gina";
        assert_eq!(decode_pdf_string(bytes), "Página");
    }
}
