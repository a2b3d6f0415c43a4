//! Page Counter: number of pages in a compiled PDF.

use std::path::Path;

use lopdf::Document;
use tracing::debug;

use crate::errors::PageCountError;

/// Counts the pages in the page tree of `pdf`. Never reports zero as success.
pub fn count_pages(pdf: &Path) -> Result<usize, PageCountError> {
    let doc = Document::load(pdf).map_err(|e| PageCountError::Unreadable {
        path: pdf.to_path_buf(),
        message: e.to_string(),
    })?;

    let pages = doc.get_pages().len();
    debug!(path = %pdf.display(), pages, "Counted PDF pages");
    if pages == 0 {
        return Err(PageCountError::NoPages {
            path: pdf.to_path_buf(),
        });
    }
    Ok(pages)
}
