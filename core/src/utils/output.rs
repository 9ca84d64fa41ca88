use super::error::WriteError;
use crate::shortcuts::options::LinkFile;
use log::{error, info};
use std::{
    fs::{create_dir_all, write},
    path::Path,
};

/// Write shortcut bytes to `directory/filename`. Appends `.lnk` if the filename has no such extension
pub fn write_shortcut(
    directory: &str,
    filename: &str,
    link: &LinkFile,
) -> Result<String, WriteError> {
    if let Err(err) = create_dir_all(directory) {
        error!("[lnkcore] Failed to create output directory {directory}. Error: {err:?}");
        return Err(WriteError::CreateDirectory);
    }

    let extension = ".lnk";
    let mut name = filename.to_string();
    if !name.to_lowercase().ends_with(extension) {
        name.push_str(extension);
    }

    let path = Path::new(directory).join(name).display().to_string();
    if let Err(err) = write(&path, &link.data) {
        error!("[lnkcore] Failed to write shortcut to {path}. Error: {err:?}");
        return Err(WriteError::WriteFile);
    }
    info!("[lnkcore] Wrote {} bytes to {path}", link.data.len());

    Ok(path)
}
