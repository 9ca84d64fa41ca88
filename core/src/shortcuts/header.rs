use super::error::LnkError;
use crate::utils::{
    bytes::encode_u32_le,
    nom_helper::{nom_unsigned_eight_bytes, nom_unsigned_four_bytes, nom_unsigned_two_bytes},
    uuid::{encode_clsid, format_guid_le_bytes},
};
use nom::bytes::complete::take;
use serde::Serialize;
use std::mem::size_of;

pub(crate) const HEADER_SIZE: u32 = 0x4c;
pub(crate) const LINK_CLSID: &str = "00021401-0000-0000-c000-000000000046";
pub(crate) const SHOW_NORMAL: u32 = 1;

pub(crate) const ATTRIBUTE_DIRECTORY: u32 = 0x10;
pub(crate) const ATTRIBUTE_ARCHIVE: u32 = 0x20;

#[derive(Debug)]
pub struct LnkHeader {
    /**Should always be 0x4c (76) */
    _size: u32,
    /**Should be 00021401-0000-0000-c000-000000000046 */
    _class_id: String,
    pub(crate) data_flags: Vec<DataFlags>,
    pub(crate) attribute_flags: Vec<AttributeFlags>,
    pub(crate) created: u64,
    pub(crate) access: u64,
    pub(crate) modified: u64,
    pub(crate) file_size: u32,
    _icon_index: u32,
    _window_value: u32,
    _hot_key: u16,
    _unknown: u16,
    _unknown2: u32,
    _unknown3: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DataFlags {
    HasTargetIdList,
    HasName,
    HasWorkingDirectory,
    HasArguments,
    HasIconLocation,
    IsUnicode,
}

impl DataFlags {
    const ALL: [DataFlags; 6] = [
        DataFlags::HasTargetIdList,
        DataFlags::HasName,
        DataFlags::HasWorkingDirectory,
        DataFlags::HasArguments,
        DataFlags::HasIconLocation,
        DataFlags::IsUnicode,
    ];

    pub(crate) fn bit(&self) -> u32 {
        match self {
            DataFlags::HasTargetIdList => 0x1,
            DataFlags::HasName => 0x4,
            DataFlags::HasWorkingDirectory => 0x10,
            DataFlags::HasArguments => 0x20,
            DataFlags::HasIconLocation => 0x40,
            DataFlags::IsUnicode => 0x80,
        }
    }

    /// Combine flags into the header bitmask
    pub(crate) fn to_bits(flags: &[DataFlags]) -> u32 {
        flags.iter().fold(0, |bits, flag| bits | flag.bit())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum AttributeFlags {
    Directory,
    Archive,
}

impl AttributeFlags {
    fn bit(&self) -> u32 {
        match self {
            AttributeFlags::Directory => ATTRIBUTE_DIRECTORY,
            AttributeFlags::Archive => ATTRIBUTE_ARCHIVE,
        }
    }
}

/// Encode the fixed 76 byte `Shortcut` header. Timestamps, file size, icon index and hotkey are zero
pub(crate) fn encode_header(data_flags: u32, attribute_flags: u32) -> Result<Vec<u8>, LnkError> {
    let mut header = Vec::with_capacity(HEADER_SIZE as usize);
    header.extend_from_slice(&encode_u32_le(HEADER_SIZE));
    header.extend_from_slice(&encode_clsid(LINK_CLSID)?);
    header.extend_from_slice(&encode_u32_le(data_flags));
    header.extend_from_slice(&encode_u32_le(attribute_flags));

    let timestamps = [0; 3 * size_of::<u64>()];
    header.extend_from_slice(&timestamps);
    let file_size = [0; size_of::<u32>()];
    header.extend_from_slice(&file_size);
    let icon_index = [0; size_of::<u32>()];
    header.extend_from_slice(&icon_index);
    header.extend_from_slice(&encode_u32_le(SHOW_NORMAL));
    let hot_key = [0; size_of::<u16>()];
    header.extend_from_slice(&hot_key);
    let reserved = [0; size_of::<u16>() + 2 * size_of::<u32>()];
    header.extend_from_slice(&reserved);

    Ok(header)
}

impl LnkHeader {
    /// Parse the `Shortcut` file header
    pub(crate) fn parse_header(data: &[u8]) -> nom::IResult<&[u8], LnkHeader> {
        let (input, size) = nom_unsigned_four_bytes(data)?;
        let (input, guid_data) = take(size_of::<u128>())(input)?;
        let (input, data_flags) = nom_unsigned_four_bytes(input)?;
        let (input, attribute_flags) = nom_unsigned_four_bytes(input)?;

        let (input, created) = nom_unsigned_eight_bytes(input)?;
        let (input, access) = nom_unsigned_eight_bytes(input)?;
        let (input, modified) = nom_unsigned_eight_bytes(input)?;

        let (input, file_size) = nom_unsigned_four_bytes(input)?;
        let (input, icon_index) = nom_unsigned_four_bytes(input)?;
        let (input, window_value) = nom_unsigned_four_bytes(input)?;
        let (input, hot_key) = nom_unsigned_two_bytes(input)?;

        let (input, unknown) = nom_unsigned_two_bytes(input)?;
        let (input, unknown2) = nom_unsigned_four_bytes(input)?;
        let (input, unknown3) = nom_unsigned_four_bytes(input)?;

        let header = LnkHeader {
            _size: size,
            _class_id: format_guid_le_bytes(guid_data),
            data_flags: LnkHeader::get_flags(data_flags),
            attribute_flags: LnkHeader::get_attributes(attribute_flags),
            created,
            access,
            modified,
            file_size,
            _icon_index: icon_index,
            _window_value: window_value,
            _hot_key: hot_key,
            _unknown: unknown,
            _unknown2: unknown2,
            _unknown3: unknown3,
        };

        Ok((input, header))
    }

    /// Get data flags from `Shortcut` header. Controls which structures follow the header
    pub(crate) fn get_flags(flags: u32) -> Vec<DataFlags> {
        DataFlags::ALL
            .into_iter()
            .filter(|flag| flags & flag.bit() == flag.bit())
            .collect()
    }

    /// Get the target attributes. Only directory and archive are written by this crate
    pub(crate) fn get_attributes(flags: u32) -> Vec<AttributeFlags> {
        [AttributeFlags::Directory, AttributeFlags::Archive]
            .into_iter()
            .filter(|flag| flags & flag.bit() == flag.bit())
            .collect()
    }

    /// Verify if provided bytes start with a `Shortcut` header
    pub fn check_header(data: &[u8]) -> bool {
        match LnkHeader::header_id(data) {
            Ok((_, (size, guid_data))) => {
                size == HEADER_SIZE && format_guid_le_bytes(guid_data) == LINK_CLSID
            }
            Err(_err) => false,
        }
    }

    /// Get the header size and class id bytes
    fn header_id(data: &[u8]) -> nom::IResult<&[u8], (u32, &[u8])> {
        let (input, size) = nom_unsigned_four_bytes(data)?;
        let (input, guid_data) = take(size_of::<u128>())(input)?;
        Ok((input, (size, guid_data)))
    }
}

#[cfg(test)]
mod tests {
    use super::{encode_header, AttributeFlags, DataFlags, LnkHeader};

    #[test]
    fn test_encode_header() {
        let result = encode_header(0x35, 0x20).unwrap();
        assert_eq!(
            result,
            [
                76, 0, 0, 0, 1, 20, 2, 0, 0, 0, 0, 0, 192, 0, 0, 0, 0, 0, 0, 70, 53, 0, 0, 0, 32,
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0
            ]
        );
        assert_eq!(result.len(), 76);
    }

    #[test]
    fn test_parser_header() {
        let test = [
            76, 0, 0, 0, 1, 20, 2, 0, 0, 0, 0, 0, 192, 0, 0, 0, 0, 0, 0, 70, 139, 0, 32, 0, 16, 0,
            0, 0, 159, 38, 31, 30, 26, 246, 216, 1, 133, 5, 25, 151, 28, 27, 217, 1, 40, 54, 5,
            151, 28, 27, 217, 1, 0, 192, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0,
        ];

        let (remaining, result) = LnkHeader::parse_header(&test).unwrap();
        assert!(remaining.is_empty());
        assert_eq!(result._size, 76);
        assert_eq!(result._class_id, "00021401-0000-0000-c000-000000000046");
        assert_eq!(
            result.data_flags,
            [DataFlags::HasTargetIdList, DataFlags::IsUnicode]
        );
        assert_eq!(result.attribute_flags, [AttributeFlags::Directory]);
        assert_eq!(result.created, 0x01d8f61a1e1f269f);
        assert_eq!(result.file_size, 49152);
        assert_eq!(result._icon_index, 0);
        assert_eq!(result._window_value, 1);
        assert_eq!(result._hot_key, 0);
        assert_eq!(result._unknown, 0);
        assert_eq!(result._unknown2, 0);
        assert_eq!(result._unknown3, 0);
    }

    #[test]
    fn test_get_flags() {
        let result = LnkHeader::get_flags(0x75);
        assert_eq!(
            result,
            [
                DataFlags::HasTargetIdList,
                DataFlags::HasName,
                DataFlags::HasWorkingDirectory,
                DataFlags::HasArguments,
                DataFlags::HasIconLocation
            ]
        );
        assert_eq!(DataFlags::to_bits(&result), 0x75);
    }

    #[test]
    fn test_get_attributes() {
        assert_eq!(
            LnkHeader::get_attributes(0x20),
            [AttributeFlags::Archive]
        );
        assert!(LnkHeader::get_attributes(0x80).is_empty());
    }

    #[test]
    fn test_check_header() {
        let test = encode_header(1, 0x20).unwrap();
        assert_eq!(LnkHeader::check_header(&test), true);

        assert_eq!(LnkHeader::check_header(&test[..10]), false);

        let mut bad_size = test.clone();
        bad_size[0] = 75;
        assert_eq!(LnkHeader::check_header(&bad_size), false);
    }
}
