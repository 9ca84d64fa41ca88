use base64::{engine::general_purpose, Engine};
use clap::Parser;
use commands::CommandArgs;
use lnkcore::{
    core::{build_collection, read_toml_data, read_toml_file},
    create_shortcut, parse_shortcut,
    utils::{
        logging::{log_level, setup_logging},
        output::write_shortcut,
    },
    LinkOptions,
};
use log::LevelFilter;
use std::{fs::read, path::Path, process::ExitCode};

mod commands;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Logging level: error, warn, info, debug
    #[arg(long, default_value_t = String::from("warn"), global = true)]
    log_level: String,

    #[command(subcommand)]
    command: CommandArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args.command, log_level(&args.log_level)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            println!("[lnkmaker] {err}");
            ExitCode::FAILURE
        }
    }
}

/// Run a command. The terminal logger is combined with a TOML log file when one is requested
fn run(command: CommandArgs, level: LevelFilter) -> Result<(), String> {
    match command {
        CommandArgs::Create {
            target,
            name,
            working_directory,
            arguments,
            icon_location,
            output,
        } => {
            let options = LinkOptions {
                target_path: target,
                display_name: name,
                working_directory,
                arguments,
                icon_location,
            };
            setup_logging(Some(level), None)
                .map_err(|err| format!("Failed to set up logging: {err}"))?;
            create(&options, &output)
        }
        CommandArgs::Toml { file, data } => {
            let collection_result = if let Some(path) = file {
                read_toml_file(&path)
            } else if let Some(data) = data {
                let toml_data = general_purpose::STANDARD
                    .decode(&data)
                    .map_err(|err| format!("Failed to base64 decode TOML data: {err:?}"))?;
                read_toml_data(&toml_data)
            } else {
                return Err(String::from("No TOML file or data provided!"));
            };
            let collection =
                collection_result.map_err(|err| format!("Failed to read TOML data: {err}"))?;

            setup_logging(Some(level), Some(&collection.output))
                .map_err(|err| format!("Failed to set up logging: {err}"))?;
            let paths = build_collection(&collection)
                .map_err(|err| format!("Failed to create shortcuts: {err}"))?;
            for path in paths {
                println!("[lnkmaker] Created {path}");
            }
            Ok(())
        }
        CommandArgs::Inspect { file } => {
            setup_logging(Some(level), None)
                .map_err(|err| format!("Failed to set up logging: {err}"))?;
            let data = read(&file).map_err(|err| format!("Could not read {file}: {err}"))?;
            let info =
                parse_shortcut(&data).map_err(|err| format!("Could not parse {file}: {err}"))?;
            let json = serde_json::to_string_pretty(&info)
                .map_err(|err| format!("Could not serialize {file}: {err}"))?;
            println!("{json}");
            Ok(())
        }
    }
}

/// Build one shortcut and write it to `output`. Missing directories are created
fn create(options: &LinkOptions, output: &str) -> Result<(), String> {
    let link = create_shortcut(options)
        .map_err(|err| format!("Failed to create shortcut for {}: {err}", options.target_path))?;

    let output_path = Path::new(output);
    let directory = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.display().to_string(),
        _ => String::from("."),
    };
    let filename = match output_path.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => return Err(format!("No shortcut filename in {output}")),
    };

    let path = write_shortcut(&directory, &filename, &link)
        .map_err(|err| format!("Could not write {output}: {err}"))?;
    println!("[lnkmaker] Created {path}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{create, run, Args};
    use crate::commands::CommandArgs;
    use clap::Parser;
    use lnkcore::LinkOptions;
    use log::LevelFilter;
    use std::fs::{read, remove_dir_all};

    #[test]
    fn test_args_create() {
        let args = Args::parse_from([
            "lnkmaker",
            "create",
            "--target",
            "C:\\Windows\\notepad.exe",
            "--name",
            "Notepad",
            "-o",
            "notepad",
        ]);
        assert_eq!(args.log_level, "warn");
        match args.command {
            CommandArgs::Create {
                target,
                name,
                arguments,
                output,
                ..
            } => {
                assert_eq!(target, "C:\\Windows\\notepad.exe");
                assert_eq!(name, Some(String::from("Notepad")));
                assert_eq!(arguments, None);
                assert_eq!(output, "notepad");
            }
            _ => panic!("expected create command"),
        }
    }

    #[test]
    fn test_create() {
        let _ = remove_dir_all("tmp/create");
        create(
            &LinkOptions::new("C:\\Windows\\notepad.exe"),
            "tmp/create/nested/notepad",
        )
        .unwrap();

        let data = read("tmp/create/nested/notepad.lnk").unwrap();
        assert_eq!(data[0..4], [76, 0, 0, 0]);

        create(&LinkOptions::new("C:\\Windows\\"), "tmp/create/windows.LNK").unwrap();
        assert!(read("tmp/create/windows.LNK").is_ok());
    }

    #[test]
    fn test_create_bad_output() {
        assert!(create(&LinkOptions::new("C:\\Windows\\notepad.exe"), "tmp/..").is_err());
    }

    #[test]
    fn test_run_toml_without_input() {
        let result = run(
            CommandArgs::Toml {
                file: None,
                data: None,
            },
            LevelFilter::Off,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_run_inspect_missing_file() {
        let result = run(
            CommandArgs::Inspect {
                file: String::from("tmp/missing.lnk"),
            },
            LevelFilter::Off,
        );
        assert!(result.is_err());
    }
}
