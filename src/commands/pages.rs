use anyhow::Result;
use expdf::{label, PdfDocument};
use std::path::Path;

pub fn run<P: AsRef<Path>>(path: P) -> Result<()> {
    let doc = PdfDocument::open(&path)?;

    for (page, _) in doc.pages() {
        println!("{}", label::page_label(page));
    }

    Ok(())
}
