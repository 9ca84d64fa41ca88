use serde::{Deserialize, Serialize};

/// Media type attached to generated shortcut bytes
pub const SHORTCUT_MIME_TYPE: &str = "application/x-ms-shortcut";

/// Fields used to build a shortcut. All strings must be ASCII
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkOptions {
    /// Backslash separated local (`C:\dir\file`) or UNC (`\\server\share\file`) path
    pub target_path: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub working_directory: Option<String>,
    #[serde(default)]
    pub arguments: Option<String>,
    #[serde(default)]
    pub icon_location: Option<String>,
}

impl LinkOptions {
    pub fn new(target_path: &str) -> LinkOptions {
        LinkOptions {
            target_path: target_path.to_string(),
            ..Default::default()
        }
    }
}

/// Complete shortcut file bytes
#[derive(Debug, Clone, PartialEq)]
pub struct LinkFile {
    pub data: Vec<u8>,
    pub mime_type: &'static str,
}
