use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "verbump",
    about = "Bump the version declared in a project manifest",
    version,
    author
)]
pub struct Cli {
    /// Next version to write into the manifest (e.g. "1.2.4")
    #[arg(
        value_name = "NEXT_VERSION",
        required_unless_present = "current",
        conflicts_with = "current"
    )]
    pub next_version: Option<String>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// Manifest file holding the version line, relative to the project directory
    #[arg(short, long, default_value = "Cargo.toml")]
    pub manifest: String,

    /// Print the current version and exit
    #[arg(short, long)]
    pub current: bool,

    /// Validate the bump without writing the manifest
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
