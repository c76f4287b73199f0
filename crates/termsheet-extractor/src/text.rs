//! PDF byte-to-text boundary

use crate::error::ExtractError;
use std::path::Path;
use tracing::debug;

/// Extract the full text of a PDF, pages concatenated in order.
///
/// This is the pipeline's only contact with the document format; everything
/// downstream operates on the returned string. No separator beyond page
/// order is guaranteed.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text(path)
        .map_err(|e| ExtractError::Pdf(format!("{}: {}", path.display(), e)))?;

    debug!("extracted {} chars from {}", text.len(), path.display());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_a_pdf_error() {
        let result = extract_text(Path::new("/nonexistent/offering.pdf"));
        assert!(matches!(result, Err(ExtractError::Pdf(_))));
    }
}
