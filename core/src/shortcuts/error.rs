use std::fmt;

#[derive(Debug, PartialEq)]
pub enum LnkError {
    InvalidInput,
    PathTooLong,
    MalformedClsid,
    RecordTooLarge,
    NotLnkData,
    BadHeader,
    Parse,
    UnsupportedUnicode,
}

impl std::error::Error for LnkError {}

impl fmt::Display for LnkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LnkError::InvalidInput => write!(f, "Shortcut strings must only contain ASCII"),
            LnkError::PathTooLong => write!(f, "Target root is longer than 21 bytes"),
            LnkError::MalformedClsid => write!(f, "Malformed CLSID string"),
            LnkError::RecordTooLarge => write!(f, "Record too large for a two byte size"),
            LnkError::NotLnkData => write!(f, "Not shortcut data"),
            LnkError::BadHeader => write!(f, "Bad LNK header"),
            LnkError::Parse => write!(f, "Failed to parse shortcut data"),
            LnkError::UnsupportedUnicode => write!(f, "Unicode shortcut strings are not supported"),
        }
    }
}
