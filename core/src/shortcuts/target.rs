use super::{
    error::LnkError,
    header::{ATTRIBUTE_ARCHIVE, ATTRIBUTE_DIRECTORY},
    shellitems::{
        COMPUTER_CLSID, COMPUTER_ROOT_ITEM, FILE_PREFIX, FOLDER_PREFIX, LOCAL_ROOT_PREFIX,
        NETWORK_CLSID, NETWORK_ROOT_ITEM, NETWORK_ROOT_PREFIX,
    },
};
use crate::utils::{strings::ascii_bytes, uuid::encode_clsid};
use log::{error, warn};

/// Drive or share roots are stored in a fixed 21 byte field
pub(crate) const ROOT_SEGMENT_SIZE: usize = 21;

const SEPARATOR: char = '\\';
const UNC_ROOT: &str = "\\\\";

/// Target path split into the bytes needed for the ID list
#[derive(Debug, PartialEq)]
pub(crate) struct ClassifiedTarget {
    pub(crate) is_folder: bool,
    pub(crate) is_network: bool,
    /// Zero padded to `ROOT_SEGMENT_SIZE`
    pub(crate) root_segment: Vec<u8>,
    pub(crate) leaf_segment: Vec<u8>,
    pub(crate) item_type: [u8; 2],
    pub(crate) clsid: [u8; 16],
    pub(crate) root_prefix: &'static [u8],
    pub(crate) leaf_prefix: [u8; 12],
    pub(crate) attribute_flags: u32,
}

/// Classify a backslash separated target path as local or network, file or folder
pub(crate) fn classify_target(path: &str) -> Result<ClassifiedTarget, LnkError> {
    if path.is_empty() {
        error!("[shortcuts] Shortcut target path is empty");
        return Err(LnkError::InvalidInput);
    }
    ascii_bytes(path)?;

    let mut target = path;
    let mut is_folder = false;
    if target.ends_with(SEPARATOR) && target != UNC_ROOT {
        target = target.trim_end_matches(SEPARATOR);
        is_folder = true;
    }

    let (root, leaf, is_network) = match target.strip_prefix(UNC_ROOT) {
        Some(share_path) => {
            let (root, leaf) = split_share(share_path);
            (root, leaf, true)
        }
        None => {
            let (root, leaf) = split_drive(target);
            (root, leaf, false)
        }
    };

    let mut root_segment = ascii_bytes(&root)?;
    if root_segment.len() > ROOT_SEGMENT_SIZE {
        error!(
            "[shortcuts] Target root {root} is {} bytes, max is {ROOT_SEGMENT_SIZE}",
            root_segment.len()
        );
        return Err(LnkError::PathTooLong);
    }
    root_segment.resize(ROOT_SEGMENT_SIZE, 0);
    let leaf_segment = ascii_bytes(&leaf)?;

    let (item_type, clsid, root_prefix) = if is_network {
        (NETWORK_ROOT_ITEM, encode_clsid(NETWORK_CLSID)?, NETWORK_ROOT_PREFIX)
    } else {
        (COMPUTER_ROOT_ITEM, encode_clsid(COMPUTER_CLSID)?, LOCAL_ROOT_PREFIX)
    };

    let (leaf_prefix, attribute_flags) = if is_folder {
        (FOLDER_PREFIX, ATTRIBUTE_DIRECTORY)
    } else {
        (FILE_PREFIX, ATTRIBUTE_ARCHIVE)
    };

    Ok(ClassifiedTarget {
        is_folder,
        is_network,
        root_segment,
        leaf_segment,
        item_type,
        clsid,
        root_prefix,
        leaf_prefix,
        attribute_flags,
    })
}

/// Split `server\share\rest` into `\\server\share\` and `rest`
fn split_share(share_path: &str) -> (String, String) {
    let segments: Vec<&str> = share_path.split(SEPARATOR).collect();
    let share_segments = 2;
    let split_at = share_segments.min(segments.len());

    let root = format!("{UNC_ROOT}{}{SEPARATOR}", segments[..split_at].join("\\"));
    let leaf = segments[split_at..].join("\\");
    (root, leaf)
}

/// Split `C:\rest` into `C:\` and `rest`
fn split_drive(path: &str) -> (String, String) {
    let segments: Vec<&str> = path.split(SEPARATOR).collect();
    let drive = segments.first().copied().unwrap_or_default();
    if !drive.ends_with(':') {
        warn!("[shortcuts] Local target root {drive} does not look like a drive letter");
    }

    let root = format!("{drive}{SEPARATOR}");
    let leaf = segments.get(1..).unwrap_or_default().join("\\");
    (root, leaf)
}
