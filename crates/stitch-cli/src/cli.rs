//! Command-line interface definition for the stitch CLI.
//!
//! Stitch has exactly one action and no subcommands: running it sets
//! up Tailwind CSS in the project at the current working directory.
//! Only the global output flags exist.

use clap::Parser;

/// Stitch - Tailwind CSS setup for Vite React and Next.js projects
#[derive(Parser, Debug)]
#[command(
    name = "stitch",
    version,
    about = "Set up Tailwind CSS in Vite React and Next.js projects",
    long_about = "Stitch inspects the current directory's package.json to detect a\n\
                  Vite React or Next.js project, installs Tailwind CSS dev dependencies\n\
                  and scaffolds its config files when missing, fills in the framework's\n\
                  content globs in tailwind.config.js, and prepends the @tailwind\n\
                  directives to every index.css in the project."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}
