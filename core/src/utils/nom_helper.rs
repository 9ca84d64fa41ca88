/**
 * Shortcut data stores every number as little endian.
 * With nom reading a number is two steps, ex:  
 *   `take X bytes`  
 *   `le_uX` to number
 *
 * These functions help reduce the repetitiveness of converting bytes to a number
 */
use nom::{
    bytes::complete::take,
    number::complete::{le_u16, le_u32, le_u64, le_u8},
};
use std::mem::size_of;

/// Nom one (1) byte to u8
pub(crate) fn nom_unsigned_one_byte(data: &[u8]) -> nom::IResult<&[u8], u8> {
    let (input, value_data) = take(size_of::<u8>())(data)?;
    let (_, value) = le_u8(value_data)?;
    Ok((input, value))
}

/// Nom two (2) little endian bytes to u16
pub(crate) fn nom_unsigned_two_bytes(data: &[u8]) -> nom::IResult<&[u8], u16> {
    let (input, value_data) = take(size_of::<u16>())(data)?;
    let (_, value) = le_u16(value_data)?;
    Ok((input, value))
}

/// Nom four (4) little endian bytes to u32
pub(crate) fn nom_unsigned_four_bytes(data: &[u8]) -> nom::IResult<&[u8], u32> {
    let (input, value_data) = take(size_of::<u32>())(data)?;
    let (_, value) = le_u32(value_data)?;
    Ok((input, value))
}

/// Nom eight (8) little endian bytes to u64
pub(crate) fn nom_unsigned_eight_bytes(data: &[u8]) -> nom::IResult<&[u8], u64> {
    let (input, value_data) = take(size_of::<u64>())(data)?;
    let (_, value) = le_u64(value_data)?;
    Ok((input, value))
}
