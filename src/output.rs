//! Output path resolution and image persistence.

use std::path::{Path, PathBuf};

use base64::Engine;

use crate::error::GenError;

/// Filename used when the caller gives no output path.
pub const DEFAULT_OUTPUT: &str = "output-image.png";

/// Resolve the output path: use the explicit path or the default filename
/// in the working directory.
#[must_use]
pub fn resolve_output_path(explicit: Option<&str>) -> PathBuf {
    match explicit {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(DEFAULT_OUTPUT),
    }
}

/// Decode a base64 payload and write the raw bytes to `path`, overwriting
/// any existing file.
///
/// # Errors
///
/// Returns an error if the payload is not valid base64 or the file cannot
/// be written.
pub fn write_image(path: &Path, data_b64: &str) -> Result<(), GenError> {
    let bytes = base64::engine::general_purpose::STANDARD.decode(data_b64)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_explicit() {
        let path = resolve_output_path(Some("my-image.png"));
        assert_eq!(path, PathBuf::from("my-image.png"));
    }

    #[test]
    fn resolve_default() {
        let path = resolve_output_path(None);
        assert_eq!(path, PathBuf::from("output-image.png"));
    }

    #[test]
    fn write_decodes_payload() {
        let dir = std::env::temp_dir().join("picgen_output_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("image.png");

        write_image(&path, "aGVsbG8=").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_rejects_invalid_base64() {
        let dir = std::env::temp_dir().join("picgen_output_bad_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("image.png");

        let result = write_image(&path, "not base64!!!");
        assert!(matches!(result, Err(GenError::Decode(_))));
        assert!(!path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
