//! Local PDF text extraction.
//!
//! `pdf_extract` can panic on malformed input, so every call goes through
//! `catch_unwind` and comes back as [`AppError::DocumentError`].

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::errors::{AppError, AppResult};

fn extract_pages(data: &[u8]) -> AppResult<Vec<String>> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(data)
    }));

    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(AppError::DocumentError(format!(
            "Failed to extract text from PDF: {}",
            e
        ))),
        Err(_) => Err(AppError::DocumentError(
            "Failed to extract text from PDF: malformed document".to_string(),
        )),
    }
}

/// Joins per-page text, one line break after each page.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pages.into_iter().fold(String::new(), |mut text, page| {
        text.push_str(page.as_ref().trim());
        text.push('\n');
        text
    })
}

pub fn extract_text(data: &[u8]) -> AppResult<String> {
    let text = join_pages(extract_pages(data)?);

    if text.trim().is_empty() {
        return Err(AppError::DocumentError(
            "PDF contains no extractable text (it may be a scanned image)".to_string(),
        ));
    }

    Ok(text)
}

pub fn extract_text_from_file(path: &Path) -> AppResult<String> {
    let data = std::fs::read(path).map_err(|e| {
        AppError::DocumentError(format!("Failed to read {}: {}", path.display(), e))
    })?;
    extract_text(&data)
}
