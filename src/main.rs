use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;
use vfs_zip::errors::VfsZipError;

#[derive(Parser)]
#[command(
    name = "vfs-zip",
    about = "vfs-zip — ZIP file options for the virtual file system",
    version,
    help_template = "{bin} — {about}\n\nUsage: {usage}\n\nCommands:\n{subcommands}\n\nOptions:\n{options}\n"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate options documents and show the resulting ZIP settings
    Check(vfs_zip::cmds::check::CheckArgs),

    /// List registered file options
    List(vfs_zip::cmds::list::ListArgs),
}

fn main() -> Result<(), VfsZipError> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => vfs_zip::cmds::check::run(args),
        Commands::List(args) => vfs_zip::cmds::list::run(args),
    }
}
