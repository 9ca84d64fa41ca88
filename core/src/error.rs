use std::fmt;

#[derive(Debug)]
pub enum TomlError {
    NoFile,
    BadToml,
    Shortcut,
    Output,
    Logging,
}

impl std::error::Error for TomlError {}

impl fmt::Display for TomlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TomlError::NoFile => write!(f, "Failed to read TOML file"),
            TomlError::BadToml => write!(f, "Failed to parse TOML data"),
            TomlError::Shortcut => write!(f, "Failed to build shortcut from TOML data"),
            TomlError::Output => write!(f, "Failed to write shortcut output"),
            TomlError::Logging => write!(f, "Failed to set up logging"),
        }
    }
}
