use crate::shortcuts::options::LinkOptions;
use serde::Deserialize;

/// A collection of shortcuts to build and where to write them
#[derive(Debug, Deserialize)]
pub struct ShortcutToml {
    pub output: Output,
    pub shortcuts: Vec<ShortcutEntry>,
}

#[derive(Debug, Deserialize)]
pub struct Output {
    pub directory: String,
    /// When set a log file is created in the output directory
    pub logging: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ShortcutEntry {
    pub filename: String,
    #[serde(flatten)]
    pub options: LinkOptions,
}
