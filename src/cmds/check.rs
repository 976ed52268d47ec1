use clap::Args;
use colored::Colorize;

use std::path::Path;

use crate::config::{build_file_system_options, load_file_options};
use crate::errors::VfsZipError;
use crate::types::zip_config::ZipFileSystemConfigBuilder;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Options documents to check
    #[arg(required = true)]
    pub files: Vec<String>,
}

/// Run the check command
pub fn run(args: CheckArgs) -> Result<(), VfsZipError> {
    println!("{} Checking file options...", "→".cyan());

    let mut failed = 0;
    for file in &args.files {
        if let Err(e) = check_file(Path::new(file)) {
            println!("{} {}: {}", "✗".red(), file, e);
            failed += 1;
        }
    }

    if failed > 0 {
        println!("{} {} of {} files failed.", "Summary:".yellow(), failed, args.files.len());
        return Err(VfsZipError::CheckFailed(failed));
    }

    println!("{} No issues found.", "✓".green());
    Ok(())
}

/// Check a single options document
fn check_file(path: &Path) -> Result<(), VfsZipError> {
    let options = load_file_options(path)?;
    println!("{} {}", "File:".yellow(), path.display());
    for option in &options {
        println!("  - {}", option);
    }

    let opts = build_file_system_options(&options);
    let charset = ZipFileSystemConfigBuilder::charset_or_default(&opts);
    let origin = if ZipFileSystemConfigBuilder::charset(&opts).is_some() { "configured" } else { "default" };
    println!("  {} zip charset: {} ({})", "•".dimmed(), charset.to_string().green(), origin);
    Ok(())
}
