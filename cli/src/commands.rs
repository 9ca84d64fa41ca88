use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub(crate) enum CommandArgs {
    /// Create a single shortcut
    Create {
        /// Backslash separated target, ex: C:\Windows\notepad.exe or \\server\share\file
        #[arg(long)]
        target: String,
        /// Shortcut description
        #[arg(long)]
        name: Option<String>,
        /// Directory the target starts in
        #[arg(long)]
        working_directory: Option<String>,
        /// Command line arguments for the target
        #[arg(long)]
        arguments: Option<String>,
        /// Icon path, ex: C:\Windows\System32\shell32.dll
        #[arg(long)]
        icon_location: Option<String>,
        /// Where to write the shortcut. `.lnk` is appended if missing
        #[arg(short, long)]
        output: String,
    },
    /// Create all shortcuts listed in a TOML file
    Toml {
        /// Full path to TOML file
        #[arg(short, long)]
        file: Option<String>,
        /// Base64 encoded TOML file
        #[arg(short, long)]
        data: Option<String>,
    },
    /// Parse a shortcut and print it as JSON
    Inspect {
        /// Full path to shortcut file
        #[arg(short, long)]
        file: String,
    },
}
