use super::{
    error::LnkError,
    header::{encode_header, DataFlags},
    options::{LinkFile, LinkOptions, SHORTCUT_MIME_TYPE},
    shellitems::build_id_list,
    strings::build_string_data,
    target::classify_target,
};
use log::debug;

/// Terminates the ID list
const TERMINAL_ID: [u8; 2] = [0, 0];

/**
 * Build `Shortcut` bytes from the provided options.
 * Every string is validated and every size computed before any output is assembled.
 * Nothing is shared between calls, so this can be called from any number of threads
 */
pub fn create_shortcut(options: &LinkOptions) -> Result<LinkFile, LnkError> {
    let target = classify_target(&options.target_path)?;
    debug!(
        "[shortcuts] Target {} is_network: {}, is_folder: {}",
        options.target_path, target.is_network, target.is_folder
    );
    let (string_data, string_flags) = build_string_data(options)?;

    let mut data_flags = vec![DataFlags::HasTargetIdList];
    data_flags.extend(string_flags);

    let id_list = build_id_list(&target)?;
    let header = encode_header(DataFlags::to_bits(&data_flags), target.attribute_flags)?;

    let mut data =
        Vec::with_capacity(header.len() + id_list.len() + TERMINAL_ID.len() + string_data.len());
    data.extend(header);
    data.extend(id_list);
    data.extend_from_slice(&TERMINAL_ID);
    data.extend(string_data);

    debug!(
        "[shortcuts] Built {} byte shortcut for {}",
        data.len(),
        options.target_path
    );
    Ok(LinkFile {
        data,
        mime_type: SHORTCUT_MIME_TYPE,
    })
}

#[cfg(test)]
mod tests {
    use super::create_shortcut;
    use crate::shortcuts::{
        error::LnkError,
        options::{LinkOptions, SHORTCUT_MIME_TYPE},
    };

    #[test]
    fn test_create_shortcut() {
        let options = LinkOptions::new("C:\\Windows\\notepad.exe");
        let result = create_shortcut(&options).unwrap();
        assert_eq!(result.mime_type, SHORTCUT_MIME_TYPE);
        assert_eq!(result.data.len(), 76 + 81 + 2);
        assert_eq!(result.data[0..4], [76, 0, 0, 0]);
        // Only the ID list flag
        assert_eq!(result.data[20..24], [1, 0, 0, 0]);
        // Archive attribute
        assert_eq!(result.data[24..28], [32, 0, 0, 0]);
        assert_eq!(result.data[76..78], [81, 0]);
        assert_eq!(result.data[157..], [0, 0]);
    }

    #[test]
    fn test_create_shortcut_all_strings() {
        let options = LinkOptions {
            target_path: String::from("C:\\Tools\\"),
            display_name: Some(String::from("Tools")),
            working_directory: Some(String::from("C:\\")),
            arguments: Some(String::from("/s")),
            icon_location: Some(String::from("i.ico")),
        };
        let result = create_shortcut(&options).unwrap();
        assert_eq!(result.data[20..24], [0x75, 0, 0, 0]);
        assert_eq!(result.data[24..28], [16, 0, 0, 0]);

        // Header, ID list with a 5 byte leaf (2 + 20 + 25 + 20), terminal ID
        let strings_start = 76 + 67 + 2;
        assert_eq!(
            result.data[strings_start..],
            [
                7, 0, 84, 111, 111, 108, 115, 0, 5, 0, 67, 58, 92, 0, 4, 0, 47, 115, 0, 7, 0, 105,
                46, 105, 99, 111, 0
            ]
        );
    }

    #[test]
    fn test_create_shortcut_failures() {
        let options = LinkOptions::new("\\\\averyveryverylongserver\\share\\file");
        assert_eq!(create_shortcut(&options), Err(LnkError::PathTooLong));

        let mut options = LinkOptions::new("C:\\app.exe");
        options.display_name = Some(String::from("café"));
        assert_eq!(create_shortcut(&options), Err(LnkError::InvalidInput));
    }
}
