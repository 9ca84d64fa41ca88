use crate::shortcuts::error::LnkError;
use log::{error, warn};

/// Convert a string to bytes. Only ASCII is allowed, nothing is transcoded or truncated
pub(crate) fn ascii_bytes(value: &str) -> Result<Vec<u8>, LnkError> {
    if let Some(bad_char) = value.chars().find(|entry| !entry.is_ascii()) {
        error!("[lnkcore] Non-ASCII char detected: {bad_char:?} in {value}");
        return Err(LnkError::InvalidInput);
    }

    Ok(value.as_bytes().to_vec())
}

/// Get an ASCII string from provided bytes. Stops at the first NUL byte
pub(crate) fn extract_ascii_string(data: &[u8]) -> String {
    let end = data.iter().position(|byte| *byte == 0).unwrap_or(data.len());
    let string_data = &data[..end];

    if !string_data.is_ascii() {
        warn!("[lnkcore] Shortcut string contains non-ASCII bytes: {string_data:?}");
    }
    String::from_utf8_lossy(string_data).to_string()
}
