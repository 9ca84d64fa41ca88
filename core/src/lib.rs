//! Build Windows Shell Link (`.lnk`) shortcut files from a target path and a few optional strings.
//! Only ASCII strings and local drive or UNC share targets are supported.

pub mod core;
pub mod error;
pub mod shortcuts;
pub mod structs;
pub mod utils;

pub use shortcuts::{
    error::LnkError,
    options::{LinkFile, LinkOptions, SHORTCUT_MIME_TYPE},
    parser::{parse_shortcut, ShortcutInfo},
    shortcut::create_shortcut,
};
