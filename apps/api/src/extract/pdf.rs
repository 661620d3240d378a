use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, error, warn};

use super::ExtractError;

/// Extracts the text of every page in document order, each page followed by
/// a line break. Pages without extractable text (scanned images, blank
/// pages) contribute an empty segment.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    debug!("Starting PDF extraction ({} bytes)", bytes.len());

    // pdf-extract can panic on malformed fonts/glyphs instead of returning an error
    let pages = match catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    })) {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => {
            warn!("PDF extraction failed: {e}");
            return Err(ExtractError::Parse(e.to_string()));
        }
        Err(_panic) => {
            error!("PDF extraction panicked, likely malformed font/glyph data");
            return Err(ExtractError::Parse(
                "the document could not be read (malformed font or structure)".to_string(),
            ));
        }
    };

    let pages: Vec<&str> = pages.iter().map(|p| strip_page_framing(p)).collect();

    let blank_pages = pages.iter().filter(|p| p.trim().is_empty()).count();
    if blank_pages > 0 {
        debug!(
            "{} of {} pages had no extractable text",
            blank_pages,
            pages.len()
        );
    }

    Ok(join_pages(&pages))
}

/// pdf-extract opens every page with a page-break preamble of blank lines
/// and closes it with a line end. Only the page's own text is kept.
fn strip_page_framing(page: &str) -> &str {
    page.trim_matches(&['\n', '\r'][..])
}

/// `T_1 + "\n" + T_2 + "\n" + ... + T_N + "\n"`
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let capacity = pages.iter().map(|p| p.as_ref().len() + 1).sum();
    let mut text = String::with_capacity(capacity);
    for page in pages {
        text.push_str(page.as_ref());
        text.push('\n');
    }
    text
}
