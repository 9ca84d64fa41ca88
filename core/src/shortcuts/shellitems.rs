use super::{error::LnkError, target::ClassifiedTarget, target::ROOT_SEGMENT_SIZE};
use crate::utils::{
    bytes::length_prefixed_record,
    nom_helper::{nom_unsigned_one_byte, nom_unsigned_two_bytes},
    strings::extract_ascii_string,
    uuid::format_guid_le_bytes,
};
use log::{debug, error};
use nom::{bytes::complete::take, Needed};
use serde::Serialize;
use std::mem::size_of;

pub(crate) const COMPUTER_CLSID: &str = "20d04fe0-3aea-1069-a2d8-08002b30309d";
pub(crate) const NETWORK_CLSID: &str = "208d2c60-3aea-1069-a2d7-08002b30309d";

pub(crate) const COMPUTER_ROOT_ITEM: [u8; 2] = [0x1f, 0x50];
pub(crate) const NETWORK_ROOT_ITEM: [u8; 2] = [0x1f, 0x58];

pub(crate) const LOCAL_ROOT_PREFIX: &[u8] = &[0x2f];
pub(crate) const NETWORK_ROOT_PREFIX: &[u8] = &[0xc3, 0x01, 0x81];
pub(crate) const FOLDER_PREFIX: [u8; 12] = [0x31, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
pub(crate) const FILE_PREFIX: [u8; 12] = [0x32, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellItem {
    pub value: String,
    pub shell_type: ShellType,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ShellType {
    RootFolder,
    Volume,
    NetworkShare,
    Directory,
    File,
}

/**
 * Build the ID list container. Items are back to back:
 *   root item (class type + CLSID)
 *   drive or share root (prefix + 21 byte root + NUL)
 *   leaf (prefix + path + NUL), skipped when there is no leaf
 */
pub(crate) fn build_id_list(target: &ClassifiedTarget) -> Result<Vec<u8>, LnkError> {
    let mut root_item = target.item_type.to_vec();
    root_item.extend_from_slice(&target.clsid);

    let mut volume_item = target.root_prefix.to_vec();
    volume_item.extend_from_slice(&target.root_segment);
    volume_item.push(0);

    let mut items = length_prefixed_record(&root_item)?;
    items.extend(length_prefixed_record(&volume_item)?);

    if !target.leaf_segment.is_empty() {
        let mut leaf_item = target.leaf_prefix.to_vec();
        leaf_item.extend_from_slice(&target.leaf_segment);
        leaf_item.push(0);
        items.extend(length_prefixed_record(&leaf_item)?);
    }

    debug!("[shortcuts] ID list items are {} bytes", items.len());
    length_prefixed_record(&items)
}

/// Parse the `ShellItems` that are in the `Shortcut` data
pub(crate) fn parse_lnk_shellitems(data: &[u8]) -> nom::IResult<&[u8], Vec<ShellItem>> {
    let (input, total_size) = nom_unsigned_two_bytes(data)?;
    let (remaining_input, mut input) = take(total_size)(input)?;
    let mut shellitems_vec: Vec<ShellItem> = Vec::new();

    let end_of_shellitems = [0, 0];
    while !input.is_empty() && input != end_of_shellitems {
        let (shell_input, item_size) = nom_unsigned_two_bytes(input)?;

        // Size includes size itself
        let adjust_size = 2;
        if item_size < adjust_size {
            return Err(nom::Err::Incomplete(Needed::Unknown));
        }
        let (item_remaining, shellitem_data) = take(item_size - adjust_size)(shell_input)?;
        let shellitem = match detect_shellitem(shellitem_data) {
            Ok((_, result)) => result,
            Err(err) => {
                error!("[shortcuts] Could not parse shellitem: {err:?}");
                return Err(err);
            }
        };
        shellitems_vec.push(shellitem);

        input = item_remaining;
    }

    Ok((remaining_input, shellitems_vec))
}

/// Determine the `ShellItem` type from the first byte
fn detect_shellitem(data: &[u8]) -> nom::IResult<&[u8], ShellItem> {
    let (input, class_type) = nom_unsigned_one_byte(data)?;

    let root_folder = COMPUTER_ROOT_ITEM[0];
    let volume = LOCAL_ROOT_PREFIX[0];
    let network = NETWORK_ROOT_PREFIX[0];
    let directory = FOLDER_PREFIX[0];
    let file = FILE_PREFIX[0];

    if class_type == root_folder {
        let (input, _sort_index) = take(size_of::<u8>())(input)?;
        let (input, guid) = take(size_of::<u128>())(input)?;
        let item = ShellItem {
            value: format_guid_le_bytes(guid),
            shell_type: ShellType::RootFolder,
        };
        return Ok((input, item));
    }

    if class_type == volume || class_type == network {
        let (input, shell_type) = if class_type == network {
            let (input, _flags) = take(NETWORK_ROOT_PREFIX.len() - 1)(input)?;
            (input, ShellType::NetworkShare)
        } else {
            (input, ShellType::Volume)
        };
        let (input, root) = take(ROOT_SEGMENT_SIZE)(input)?;
        let item = ShellItem {
            value: extract_ascii_string(root),
            shell_type,
        };
        return Ok((input, item));
    }

    if class_type == directory || class_type == file {
        let (input, _unused) = take(FOLDER_PREFIX.len() - 1)(input)?;
        let shell_type = if class_type == directory {
            ShellType::Directory
        } else {
            ShellType::File
        };
        let (input, leaf) = take(input.len())(input)?;
        let item = ShellItem {
            value: extract_ascii_string(leaf),
            shell_type,
        };
        return Ok((input, item));
    }

    error!("[shortcuts] Unsupported shellitem class type: {class_type:#x}");
    Err(nom::Err::Failure(nom::error::Error::new(
        data,
        nom::error::ErrorKind::Tag,
    )))
}
