use super::strings::ascii_bytes;
use crate::shortcuts::error::LnkError;
use byteorder::{ByteOrder, LittleEndian};
use log::error;

/// Size prefixes in shortcut data count the two (2) size bytes themselves
const SIZE_ADJUST: usize = 2;

/// Encode a value into two (2) little endian bytes. Values wider than a `u16` are rejected
pub(crate) fn encode_u16_le(value: usize) -> Result<[u8; 2], LnkError> {
    let narrow = match u16::try_from(value) {
        Ok(result) => result,
        Err(_err) => {
            error!("[lnkcore] Value {value} does not fit into two bytes");
            return Err(LnkError::RecordTooLarge);
        }
    };

    let mut buf = [0; 2];
    LittleEndian::write_u16(&mut buf, narrow);
    Ok(buf)
}

/// Encode a `u32` into four (4) little endian bytes
pub(crate) fn encode_u32_le(value: u32) -> [u8; 4] {
    let mut buf = [0; 4];
    LittleEndian::write_u32(&mut buf, value);
    buf
}

/// Prepend the size of the record. The size includes the two size bytes
pub(crate) fn length_prefixed_record(payload: &[u8]) -> Result<Vec<u8>, LnkError> {
    let size = encode_u16_le(payload.len() + SIZE_ADJUST)?;

    let mut record = Vec::with_capacity(payload.len() + SIZE_ADJUST);
    record.extend_from_slice(&size);
    record.extend_from_slice(payload);
    Ok(record)
}

/// Build a string data record: size, ASCII content, then a NUL byte.
/// The NUL is not part of the content but is covered by the size
pub(crate) fn data_record(value: &str) -> Result<Vec<u8>, LnkError> {
    let payload = ascii_bytes(value)?;
    let mut record = length_prefixed_record(&payload)?;
    record.push(0);
    Ok(record)
}
