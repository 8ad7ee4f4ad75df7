use serde::{Deserialize, Serialize};

/// A file picked for text extraction.
#[derive(Debug, Clone)]
pub struct OcrUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl OcrUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrResult {
    #[serde(default)]
    pub text: String,
    /// Average confidence in percent (0-100), when the engine reports one.
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl OcrResult {
    /// Text suitable as insight context; `None` when nothing was recognised.
    ///
    /// Leading and trailing whitespace is dropped, the same way the OCR text
    /// area's value is trimmed before it is sent. Inner text is kept as is.
    pub fn context_text(&self) -> Option<String> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_text_trims() {
        let r = OcrResult {
            text: "  Revenue up 12%\n".into(),
            confidence: Some(91.5),
        };
        assert_eq!(r.context_text().as_deref(), Some("Revenue up 12%"));
    }

    #[test]
    fn test_context_text_empty() {
        let r = OcrResult {
            text: " \n ".into(),
            confidence: None,
        };
        assert!(r.context_text().is_none());
    }
}
