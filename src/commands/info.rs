use anyhow::Result;
use expdf::PdfDocument;
use std::path::Path;

pub fn run<P: AsRef<Path>>(path: P, json: bool) -> Result<()> {
    let doc = PdfDocument::open(&path)?;
    let info = doc.info();

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("File: {}", path.as_ref().display());
    println!("Pages: {}", info.page_count);

    if let Some(title) = &info.title {
        println!("Title: {}", title);
    }
    if let Some(author) = &info.author {
        println!("Author: {}", author);
    }
    if let Some(subject) = &info.subject {
        println!("Subject: {}", subject);
    }
    if let Some(keywords) = &info.keywords {
        println!("Keywords: {}", keywords);
    }
    if let Some(creator) = &info.creator {
        println!("Creator: {}", creator);
    }
    if let Some(producer) = &info.producer {
        println!("Producer: {}", producer);
    }
    if let Some(creation_date) = &info.creation_date {
        println!("Created: {}", format_pdf_date(creation_date));
    }
    if let Some(mod_date) = &info.mod_date {
        println!("Modified: {}", format_pdf_date(mod_date));
    }

    Ok(())
}

// Dates come in as D:YYYYMMDDHHmmSS with optional trailing timezone; anything
// that doesn't fit that shape is printed as-is.
fn format_pdf_date(date: &str) -> String {
    let digits = match date.strip_prefix("D:") {
        Some(d) if d.len() >= 8 && d.as_bytes()[..8].iter().all(u8::is_ascii_digit) => d,
        _ => return date.to_string(),
    };

    let (year, month, day) = (&digits[..4], &digits[4..6], &digits[6..8]);
    let time = if digits.len() >= 14 && digits.as_bytes()[8..14].iter().all(u8::is_ascii_digit) {
        format!(" {}:{}:{}", &digits[8..10], &digits[10..12], &digits[12..14])
    } else {
        String::new()
    };

    format!("{}-{}-{}{}", year, month, day, time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_full_date() {
        assert_eq!(
            format_pdf_date("D:20240131120000+01'00"),
            "2024-01-31 12:00:00"
        );
    }

    #[test]
    fn formats_date_without_time() {
        assert_eq!(format_pdf_date("D:20240131"), "2024-01-31");
    }

    #[test]
    fn leaves_unparseable_dates_alone() {
        assert_eq!(format_pdf_date("yesterday"), "yesterday");
        assert_eq!(format_pdf_date("D:gibberish"), "D:gibberish");
    }
}
