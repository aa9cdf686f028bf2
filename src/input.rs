//! Local input handling: image attachments and question composition.

use crate::mime;
use crate::{Error, Result};
use std::fs;
use std::path::PathBuf;

/// An image read from disk, ready to be inlined into a request.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Read each path into an attachment, preserving order.
///
/// Returns [`Error::ImageNotFound`] for the first missing path, before any
/// bytes are read.
pub fn load_image_attachments(
    paths: &[PathBuf],
    fallback_types: &[(&str, &str)],
) -> Result<Vec<ImageAttachment>> {
    let mut attachments = Vec::with_capacity(paths.len());

    for path in paths {
        if !path.exists() {
            return Err(Error::ImageNotFound(path.clone()));
        }

        let bytes = fs::read(path)?;
        let mime_type = mime::infer_image_mime(path, fallback_types);

        attachments.push(ImageAttachment {
            path: path.clone(),
            bytes,
            mime_type,
        });
    }

    Ok(attachments)
}

/// Merge optional background context into the final question text.
pub fn compose_question(question: &str, context: Option<&str>) -> String {
    match context {
        Some(context) if !context.is_empty() => {
            format!("Context:\n{}\n\nQuestion: {}", context, question)
        }
        _ => question.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_image_attachments_reads_bytes_in_order() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.jpg");
        fs::write(&first, [0x89, 0x50, 0x4E, 0x47]).unwrap();
        fs::write(&second, [0xFF, 0xD8, 0xFF]).unwrap();

        let attachments =
            load_image_attachments(&[first.clone(), second.clone()], mime::STANDARD_IMAGE_TYPES)
                .unwrap();

        assert_eq!(attachments.len(), 2);
        assert_eq!(attachments[0].path, first);
        assert_eq!(attachments[0].bytes, vec![0x89, 0x50, 0x4E, 0x47]);
        assert_eq!(attachments[0].mime_type, "image/png");
        assert_eq!(attachments[1].path, second);
        assert_eq!(attachments[1].mime_type, "image/jpeg");
    }

    #[test]
    fn test_load_image_attachments_rejects_missing_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.png");

        let err = load_image_attachments(&[missing.clone()], mime::STANDARD_IMAGE_TYPES)
            .unwrap_err();

        match err {
            Error::ImageNotFound(path) => assert_eq!(path, missing),
            other => panic!("expected ImageNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_image_attachments_stops_before_later_paths() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone.png");
        let present = dir.path().join("real.png");
        fs::write(&present, [0x01]).unwrap();

        let err =
            load_image_attachments(&[missing, present], mime::STANDARD_IMAGE_TYPES).unwrap_err();
        assert!(matches!(err, Error::ImageNotFound(_)));
    }

    #[test]
    fn test_compose_question_with_context() {
        let combined = compose_question("What is this?", Some("A photo from the garden."));
        assert_eq!(
            combined,
            "Context:\nA photo from the garden.\n\nQuestion: What is this?"
        );
    }

    #[test]
    fn test_compose_question_without_context() {
        assert_eq!(compose_question("What is this?", None), "What is this?");
    }

    #[test]
    fn test_compose_question_ignores_empty_context() {
        assert_eq!(compose_question("What is this?", Some("")), "What is this?");
    }
}
