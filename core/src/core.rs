use crate::{
    error::TomlError,
    shortcuts::{options::LinkFile, shortcut::create_shortcut},
    structs::toml::ShortcutToml,
    utils::{logging::setup_logging, output::write_shortcut},
};
use log::{error, info};
use std::{fs::read, str::from_utf8};

/// Parse a TOML file at provided path and write every shortcut it lists.
/// Installs the log file logger when `[output]` has `logging`
pub fn parse_toml_file(path: &str) -> Result<Vec<String>, TomlError> {
    let collection = read_toml_file(path)?;
    run_collection(&collection)
}

/// Parse already read TOML data and write every shortcut it lists.
/// Installs the log file logger when `[output]` has `logging`
pub fn parse_toml_data(data: &[u8]) -> Result<Vec<String>, TomlError> {
    let collection = read_toml_data(data)?;
    run_collection(&collection)
}

/// Set up collection logging then build the collection
fn run_collection(collection: &ShortcutToml) -> Result<Vec<String>, TomlError> {
    if let Err(err) = setup_logging(None, Some(&collection.output)) {
        error!("[lnkcore] Could not set up collection logging: {err:?}");
        return Err(TomlError::Logging);
    }
    build_collection(collection)
}

/// Read a TOML shortcut collection without building it
pub fn read_toml_file(path: &str) -> Result<ShortcutToml, TomlError> {
    let buffer = match read(path) {
        Ok(results) => results,
        Err(err) => {
            error!("[lnkcore] Could not read TOML file {path}: {err:?}");
            return Err(TomlError::NoFile);
        }
    };

    read_toml_data(&buffer)
}

/// Parse TOML data into a shortcut collection without building it
pub fn read_toml_data(data: &[u8]) -> Result<ShortcutToml, TomlError> {
    let toml_results = toml::from_str(from_utf8(data).unwrap_or_default());
    let collection: ShortcutToml = match toml_results {
        Ok(results) => results,
        Err(err) => {
            error!("[lnkcore] Could not parse TOML data: {err:?}");
            return Err(TomlError::BadToml);
        }
    };

    Ok(collection)
}

/// Build every shortcut first so a bad entry rejects the whole collection, then write them
pub fn build_collection(collection: &ShortcutToml) -> Result<Vec<String>, TomlError> {
    let mut links: Vec<(&str, LinkFile)> = Vec::new();
    for entry in &collection.shortcuts {
        match create_shortcut(&entry.options) {
            Ok(result) => links.push((entry.filename.as_str(), result)),
            Err(err) => {
                error!("[lnkcore] Could not build shortcut {}: {err:?}", entry.filename);
                return Err(TomlError::Shortcut);
            }
        }
    }

    let mut paths = Vec::new();
    for (filename, link) in links {
        match write_shortcut(&collection.output.directory, filename, &link) {
            Ok(result) => paths.push(result),
            Err(err) => {
                error!("[lnkcore] Could not write shortcut {filename}: {err:?}");
                return Err(TomlError::Output);
            }
        }
    }

    info!("[lnkcore] Wrote {} shortcut(s)", paths.len());
    Ok(paths)
}
