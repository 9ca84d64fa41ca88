use crate::shortcuts::error::LnkError;
use log::{error, warn};
use uuid::Uuid;

/// Create a UUID and return as a string
pub(crate) fn generate_uuid() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/**
 * Encode a canonical GUID string (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`) into 16 bytes.
 * First three groups are little endian, last two keep their byte order
 */
pub(crate) fn encode_clsid(clsid: &str) -> Result<[u8; 16], LnkError> {
    let group_sizes = [8, 4, 4, 4, 12];
    let groups: Vec<&str> = clsid.split('-').collect();

    if groups.len() != group_sizes.len()
        || groups
            .iter()
            .zip(group_sizes)
            .any(|(group, size)| group.len() != size)
    {
        error!("[lnkcore] CLSID {clsid} does not have five hyphen delimited groups");
        return Err(LnkError::MalformedClsid);
    }

    match Uuid::try_parse(clsid) {
        Ok(result) => Ok(result.to_bytes_le()),
        Err(err) => {
            error!("[lnkcore] Could not parse CLSID {clsid}: {err:?}");
            Err(LnkError::MalformedClsid)
        }
    }
}

/// Convert little endian bytes to a UUID/GUID string
pub(crate) fn format_guid_le_bytes(data: &[u8]) -> String {
    let guid_data: Result<[u8; 16], _> = data.try_into();
    match guid_data {
        Ok(result) => Uuid::from_bytes_le(result).hyphenated().to_string(),
        Err(_err) => {
            warn!(
                "[lnkcore] Provided little endian data does not meet GUID size of 16 bytes, got: {}",
                data.len()
            );
            format!("Not a GUID/UUID: {data:?}")
        }
    }
}
