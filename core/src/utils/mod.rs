pub(crate) mod bytes;
pub mod error;
pub mod logging;
pub(crate) mod nom_helper;
pub mod output;
pub(crate) mod strings;
pub(crate) mod uuid;
