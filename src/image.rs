//! Image attachment handling for the submission form.
//!
//! [`ImageFile`] stands in for the opaque blob a client hands over (name,
//! MIME type, bytes). Validation rejects oversized or unsupported files
//! with user-facing messages; [`object_url`] mints the session-local URL a
//! post stores when the attachment is accepted.

use uuid::Uuid;

/// Largest accepted attachment, in bytes (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Accepted attachment MIME types.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

const SIZE_ERROR: &str = "A imagem deve ter no máximo 5MB";
const FORMAT_ERROR: &str = "Formato de imagem não suportado. Use JPG, PNG, GIF ou WebP";

/// An image attachment as submitted by the form.
#[derive(Debug, Clone, Default)]
pub struct ImageFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Outcome of attachment validation: a flag plus the message the form
/// shows when the flag is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCheck {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ImageCheck {
    fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    fn rejected(message: &str) -> Self {
        Self {
            is_valid: false,
            error: Some(message.to_string()),
        }
    }
}

/// Validate an attachment before it reaches a draft. Size is checked
/// before format, so an oversized file of an unsupported type reports the
/// size message.
pub fn validate_image_file(file: &ImageFile) -> ImageCheck {
    if file.size() > MAX_IMAGE_BYTES {
        return ImageCheck::rejected(SIZE_ERROR);
    }

    if !ALLOWED_IMAGE_TYPES.contains(&file.mime.as_str()) {
        return ImageCheck::rejected(FORMAT_ERROR);
    }

    ImageCheck::ok()
}

/// Mint a session-local object URL for an accepted attachment.
///
/// The URL is an opaque token, valid only for the lifetime of the process;
/// nothing dereferences it inside this crate. Each call yields a fresh URL
/// even for the same file, matching browser object-URL semantics.
pub fn object_url(_file: &ImageFile) -> String {
    format!("blob:{}", Uuid::new_v4())
}
