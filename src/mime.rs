use std::path::Path;

/// Extension fallbacks for generated-image references.
pub const STANDARD_IMAGE_TYPES: &[(&str, &str)] = &[
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".gif", "image/gif"),
    (".webp", "image/webp"),
];

/// Extension fallbacks for consultation attachments, including phone photo formats.
pub const PHOTO_IMAGE_TYPES: &[(&str, &str)] = &[
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".gif", "image/gif"),
    (".webp", "image/webp"),
    (".heic", "image/heic"),
    (".heif", "image/heif"),
];

/// Infer an image MIME type from a file path.
///
/// Prefers the system MIME database; anything it cannot identify as an image
/// goes through the extension fallback table, then defaults to `image/jpeg`.
pub fn infer_image_mime(path: &Path, fallback: &[(&str, &str)]) -> String {
    if let Some(guess) = mime_guess::from_path(path).first() {
        if guess.type_() == mime_guess::mime::IMAGE {
            return guess.essence_str().to_string();
        }
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();

    fallback
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| mime.to_string())
        .unwrap_or_else(|| "image/jpeg".to_string())
}
