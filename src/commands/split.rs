use anyhow::{Context, Result};
use expdf::{extract_all_pages_with, label, PdfDocument};
use std::path::Path;

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output_dir: Q, prefix: &str) -> Result<()> {
    let output_dir = output_dir.as_ref();

    // Create output directory if it doesn't exist
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let doc = PdfDocument::open(&input)?;
    let total_pages = doc.page_count();

    extract_all_pages_with(Some(&doc), Some(output_dir), |page| {
        label::page_name(prefix, page)
    })?;

    println!("Split {} pages into {}", total_pages, output_dir.display());

    Ok(())
}
