use thiserror::Error;

/// Errors from the upload intake path.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The selected file is not an image. The intake rejects it without
    /// touching any workflow state.
    #[error("Please upload an image file (got {mime})")]
    NotAnImage { mime: String },

    /// The browser failed to hand us the file contents.
    #[error("Could not read file: {0}")]
    Unreadable(String),
}

impl From<UploadError> for String {
    fn from(err: UploadError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_an_image_message_names_mime() {
        let err = UploadError::NotAnImage {
            mime: "text/plain".to_string(),
        };
        let msg: String = err.into();
        assert!(msg.contains("image file"));
        assert!(msg.contains("text/plain"));
    }

    #[test]
    fn test_unreadable_message() {
        let msg = UploadError::Unreadable("aborted".to_string()).to_string();
        assert!(msg.contains("aborted"));
    }
}
