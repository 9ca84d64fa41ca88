use super::{
    error::LnkError,
    header::{AttributeFlags, DataFlags, LnkHeader},
    shellitems::{parse_lnk_shellitems, ShellItem, ShellType},
    strings::extract_string,
};
use log::error;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ShortcutInfo {
    pub data_flags: Vec<DataFlags>,
    pub attribute_flags: Vec<AttributeFlags>,
    /// Raw FILETIME values
    pub created: u64,
    pub modified: u64,
    pub accessed: u64,
    pub file_size: u32,
    /// Drive or share root joined with the leaf item
    pub path: String,
    pub shellitems: Vec<ShellItem>,
    pub name: String,
    pub working_directory: String,
    pub arguments: String,
    pub icon_location: String,
}

/// Parse `Shortcut` bytes. Only ASCII string data is supported
pub fn parse_shortcut(data: &[u8]) -> Result<ShortcutInfo, LnkError> {
    if !LnkHeader::check_header(data) {
        error!("[shortcuts] Provided data is not a shortcut");
        return Err(LnkError::NotLnkData);
    }

    let (input, header) = match LnkHeader::parse_header(data) {
        Ok(result) => result,
        Err(err) => {
            error!("[shortcuts] Could not parse shortcut header: {err:?}");
            return Err(LnkError::BadHeader);
        }
    };

    if header.data_flags.contains(&DataFlags::IsUnicode) {
        error!("[shortcuts] Shortcut contains Unicode strings");
        return Err(LnkError::UnsupportedUnicode);
    }

    match get_shortcut_info(input, header) {
        Ok((_, result)) => Ok(result),
        Err(err) => {
            error!("[shortcuts] Could not parse shortcut data: {err:?}");
            Err(LnkError::Parse)
        }
    }
}

/// Parse the structures that follow the header
fn get_shortcut_info(data: &[u8], header: LnkHeader) -> nom::IResult<&[u8], ShortcutInfo> {
    let mut shortcut_info = ShortcutInfo {
        data_flags: header.data_flags,
        attribute_flags: header.attribute_flags,
        created: header.created,
        modified: header.modified,
        accessed: header.access,
        file_size: header.file_size,
        path: String::new(),
        shellitems: Vec::new(),
        name: String::new(),
        working_directory: String::new(),
        arguments: String::new(),
        icon_location: String::new(),
    };

    let mut input = data;
    if shortcut_info.data_flags.contains(&DataFlags::HasTargetIdList) {
        let (remaining, shellitems) = parse_lnk_shellitems(input)?;
        shortcut_info.path = item_path(&shellitems);
        shortcut_info.shellitems = shellitems;
        input = remaining;
    }

    let strings = [
        (DataFlags::HasName, &mut shortcut_info.name),
        (
            DataFlags::HasWorkingDirectory,
            &mut shortcut_info.working_directory,
        ),
        (DataFlags::HasArguments, &mut shortcut_info.arguments),
        (DataFlags::HasIconLocation, &mut shortcut_info.icon_location),
    ];
    for (flag, value) in strings {
        if !shortcut_info.data_flags.contains(&flag) {
            continue;
        }
        let (remaining, string_value) = extract_string(input)?;
        *value = string_value;
        input = remaining;
    }

    Ok((input, shortcut_info))
}

/// Join the root and leaf `ShellItems` back into a path
fn item_path(shellitems: &[ShellItem]) -> String {
    let mut path = String::new();
    for item in shellitems {
        if item.shell_type == ShellType::RootFolder {
            continue;
        }
        path.push_str(&item.value);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::{item_path, parse_shortcut};
    use crate::shortcuts::{
        error::LnkError,
        header::{encode_header, AttributeFlags, DataFlags},
        options::LinkOptions,
        shellitems::{ShellItem, ShellType},
        shortcut::create_shortcut,
    };

    #[test]
    fn test_parse_shortcut() {
        let mut options = LinkOptions::new("C:\\Program Files\\App\\app.exe");
        options.arguments = Some(String::from("--flag"));
        options.icon_location = Some(String::from("C:\\app.ico"));
        let link = create_shortcut(&options).unwrap();

        let result = parse_shortcut(&link.data).unwrap();
        assert_eq!(
            result.data_flags,
            [
                DataFlags::HasTargetIdList,
                DataFlags::HasArguments,
                DataFlags::HasIconLocation
            ]
        );
        assert_eq!(result.attribute_flags, [AttributeFlags::Archive]);
        assert_eq!(result.path, "C:\\Program Files\\App\\app.exe");
        assert_eq!(result.shellitems.len(), 3);
        assert_eq!(result.shellitems[1].shell_type, ShellType::Volume);
        assert_eq!(result.name, "");
        assert_eq!(result.working_directory, "");
        assert_eq!(result.arguments, "--flag");
        assert_eq!(result.icon_location, "C:\\app.ico");
        assert_eq!(result.created, 0);
        assert_eq!(result.file_size, 0);
    }

    #[test]
    fn test_parse_not_shortcut() {
        let test = [1, 2, 3, 4];
        assert_eq!(parse_shortcut(&test).unwrap_err(), LnkError::NotLnkData);
    }

    #[test]
    fn test_parse_unicode_shortcut() {
        let test = encode_header(0x81, 0x20).unwrap();
        assert_eq!(
            parse_shortcut(&test).unwrap_err(),
            LnkError::UnsupportedUnicode
        );
    }

    #[test]
    fn test_parse_truncated_shortcut() {
        let link = create_shortcut(&LinkOptions::new("C:\\a.txt")).unwrap();
        assert_eq!(
            parse_shortcut(&link.data[..90]).unwrap_err(),
            LnkError::Parse
        );
    }

    #[test]
    fn test_item_path() {
        let items = [
            ShellItem {
                value: String::from("20d04fe0-3aea-1069-a2d8-08002b30309d"),
                shell_type: ShellType::RootFolder,
            },
            ShellItem {
                value: String::from("D:\\"),
                shell_type: ShellType::Volume,
            },
        ];
        assert_eq!(item_path(&items), "D:\\");
    }
}
