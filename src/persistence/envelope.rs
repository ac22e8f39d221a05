//! Tagged save envelope
//!
//! Layout: `<hex sha256 tag>\n<payload>`. The tag covers a fixed
//! application string followed by the payload bytes. This only deters casual
//! editing; the string ships with the binary.

use sha2::{Digest, Sha256};

use super::PersistError;

/// Prefix mixed into every tag
pub const TAG_SECRET: &str = "sticky_cubes_secret_v1";

/// Hex tag for a payload
pub fn tag(payload: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(TAG_SECRET.as_bytes());
    hasher.update(payload);
    format!("{:x}", hasher.finalize())
}

/// Prepend the tag line to a payload
pub fn seal(payload: &str) -> String {
    format!("{}\n{}", tag(payload.as_bytes()), payload)
}

/// Split a saved file and verify its tag, returning the payload bytes
pub fn open(bytes: &[u8]) -> Result<&[u8], PersistError> {
    let split = bytes
        .iter()
        .position(|&b| b == b'\n')
        .ok_or(PersistError::Empty)?;
    let stored = bytes[..split].trim_ascii();
    let payload = bytes[split + 1..].trim_ascii();
    if stored.is_empty() || payload.is_empty() {
        return Err(PersistError::Empty);
    }

    if tag(payload).as_bytes() != stored {
        return Err(PersistError::TagMismatch);
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tag() {
        let payload = r#"{"best":0,"coins":0,"current":0,"owned":[true,false,false,false]}"#;
        assert_eq!(
            tag(payload.as_bytes()),
            "90cd5f2f0aa97b24746524ead96dbeb1705c5b3fabe1670bdb87c6b1298d4c8a"
        );
    }

    #[test]
    fn test_open_sealed() {
        let sealed = seal("{\"coins\":1}");
        assert_eq!(open(sealed.as_bytes()).unwrap(), b"{\"coins\":1}");
    }

    #[test]
    fn test_open_tolerates_trailing_newline() {
        let sealed = format!("{}\r\n", seal("{}").replacen('\n', "\r\n", 1));
        assert_eq!(open(sealed.as_bytes()).unwrap(), b"{}");
    }

    #[test]
    fn test_open_rejects_bad_input() {
        assert!(matches!(open(b""), Err(PersistError::Empty)));
        assert!(matches!(open(b"abcdef"), Err(PersistError::Empty)));
        assert!(matches!(open(b"\n{}"), Err(PersistError::Empty)));
        assert!(matches!(open(b"deadbeef\n{}"), Err(PersistError::TagMismatch)));
    }
}
