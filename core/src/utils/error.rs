use std::fmt;

#[derive(Debug)]
pub enum WriteError {
    CreateDirectory,
    WriteFile,
    LogFile,
    SetLogger,
}

impl std::error::Error for WriteError {}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::CreateDirectory => write!(f, "Could not create directory(ies)"),
            WriteError::WriteFile => write!(f, "Could not write shortcut file"),
            WriteError::LogFile => write!(f, "Could not create log file"),
            WriteError::SetLogger => write!(f, "Could not set the global logger"),
        }
    }
}
