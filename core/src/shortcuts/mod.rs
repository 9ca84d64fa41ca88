pub mod error;
pub mod header;
pub mod options;
pub mod parser;
pub mod shellitems;
pub mod shortcut;
mod strings;
pub(crate) mod target;
