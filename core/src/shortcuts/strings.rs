use super::{error::LnkError, header::DataFlags, options::LinkOptions};
use crate::utils::{
    bytes::data_record, nom_helper::nom_unsigned_two_bytes, strings::extract_ascii_string,
};
use nom::{bytes::complete::take, Needed};
use std::mem::size_of;

/**
 * Build the string data section in its fixed order: name, working directory, arguments, icon location.
 * Empty or missing strings are skipped and their flag is not returned
 */
pub(crate) fn build_string_data(
    options: &LinkOptions,
) -> Result<(Vec<u8>, Vec<DataFlags>), LnkError> {
    let entries = [
        (&options.display_name, DataFlags::HasName),
        (&options.working_directory, DataFlags::HasWorkingDirectory),
        (&options.arguments, DataFlags::HasArguments),
        (&options.icon_location, DataFlags::HasIconLocation),
    ];

    let mut string_data = Vec::new();
    let mut flags = Vec::new();
    for (value, flag) in entries {
        let value = match value {
            Some(result) if !result.is_empty() => result,
            _ => continue,
        };
        string_data.extend(data_record(value)?);
        flags.push(flag);
    }

    Ok((string_data, flags))
}

/// Extract a string record from `Shortcut` data. Size counts itself, the NUL byte follows the content
pub(crate) fn extract_string(data: &[u8]) -> nom::IResult<&[u8], String> {
    let (input, size) = nom_unsigned_two_bytes(data)?;

    let adjust_size = 2;
    if size < adjust_size {
        return Err(nom::Err::Incomplete(Needed::Unknown));
    }
    let (input, string_data) = take(size - adjust_size)(input)?;
    let (input, _end) = take(size_of::<u8>())(input)?;

    Ok((input, extract_ascii_string(string_data)))
}
