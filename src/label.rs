//! Page display labels and the filenames derived from them.
//!
//! The page list shown to the user is a run of labels like "Página 1",
//! "Página 2", …; a selection comes back as one of those strings. Deriving
//! the page number takes the label's trailing integer, so bare numbers
//! ("3") and other label texts ending in a page number work too.

use regex::Regex;

/// Display label for a 1-based page number.
pub fn page_label(page: u32) -> String {
    format!("Página {page}")
}

/// Derive the 1-based page number from a displayed label.
///
/// Returns `None` when the label carries no trailing integer, i.e. when no
/// page can be considered selected.
pub fn page_number(label: &str) -> Option<u32> {
    let trailing = Regex::new(r"(\d+)\s*$").ok()?;
    trailing
        .captures(label.trim())?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

/// Default bulk-export filename for a 1-based page number.
pub fn default_page_name(page: u32) -> String {
    page_name("documento", page)
}

/// Bulk-export filename with a caller-chosen prefix.
pub fn page_name(prefix: &str, page: u32) -> String {
    format!("{prefix}{page}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trips() {
        assert_eq!(page_label(3), "Página 3");
        assert_eq!(page_number(&page_label(3)), Some(3));
    }

    #[test]
    fn bare_number_is_a_valid_selection() {
        assert_eq!(page_number("3"), Some(3));
        assert_eq!(page_number(" 12 "), Some(12));
    }

    #[test]
    fn other_label_texts_work() {
        assert_eq!(page_number("Page 7"), Some(7));
        assert_eq!(page_number("Seite 44"), Some(44));
    }

    #[test]
    fn labels_without_a_number_are_no_selection() {
        assert_eq!(page_number("Página"), None);
        assert_eq!(page_number(""), None);
        assert_eq!(page_number("3 of 10 pages"), None);
    }

    #[test]
    fn huge_numbers_are_no_selection() {
        assert_eq!(page_number("99999999999999999999"), None);
    }

    #[test]
    fn default_names_follow_page_order() {
        assert_eq!(default_page_name(1), "documento1.pdf");
        assert_eq!(default_page_name(12), "documento12.pdf");
        assert_eq!(page_name("out_", 3), "out_3.pdf");
    }
}
