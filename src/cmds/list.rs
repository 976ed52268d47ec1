use clap::Args;
use colored::Colorize;

use crate::errors::VfsZipError;
use crate::registry;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show options whose name starts with this prefix (e.g. "zip:")
    #[arg(short, long, default_value = "")]
    pub prefix: String,
}

/// Run the list command
pub fn run(args: ListArgs) -> Result<(), VfsZipError> {
    let resolvers = registry::resolvers_with_prefix(&args.prefix);
    if resolvers.is_empty() {
        println!("{} No file options registered.", "!".yellow());
        return Ok(());
    }

    println!("{}", "File options:".bold());
    for r in resolvers {
        println!("  {}: {}", r.name.yellow(), r.description);
    }
    Ok(())
}
