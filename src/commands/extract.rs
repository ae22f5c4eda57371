use anyhow::Result;
use expdf::{extract_single_page, label, PdfDocument};
use std::path::Path;

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input: P, selection: &str, output: Q) -> Result<()> {
    let doc = PdfDocument::open(&input)?;
    let page = label::page_number(selection);

    extract_single_page(Some(&doc), page, Some(output.as_ref()))?;

    if let Some(page) = page {
        println!("Extracted page {} to {}", page, output.as_ref().display());
    }

    Ok(())
}
